//! Input-state provider.  The simulation only ever asks two questions:
//! is a logical key held right now, and did it go down this frame.
//! The binary feeds this from terminal events once per frame; tests
//! set it directly.

/// The logical keys the simulation reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
}

const KEY_COUNT: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct InputState {
    held: [bool; KEY_COUNT],
    pressed: [bool; KEY_COUNT],
}

impl InputState {
    pub fn new() -> InputState {
        InputState::default()
    }

    /// Records this frame's held state for `key`.  The press edge is
    /// derived from the previous frame, so calling this once per key
    /// per frame keeps `was_pressed` meaning "went down this frame".
    pub fn set_held(&mut self, key: Key, down: bool) {
        let k = key as usize;
        self.pressed[k] = down && !self.held[k];
        self.held[k] = down;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key as usize]
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed[key as usize]
    }
}
