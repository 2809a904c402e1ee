use alien_invaders::input::{InputState, Key};

#[test]
fn keys_start_released() {
    let input = InputState::new();
    assert!(!input.is_held(Key::Left));
    assert!(!input.is_held(Key::Right));
    assert!(!input.is_held(Key::Fire));
    assert!(!input.was_pressed(Key::Fire));
}

#[test]
fn press_edge_lasts_one_frame() {
    let mut input = InputState::new();
    input.set_held(Key::Fire, true);
    assert!(input.is_held(Key::Fire));
    assert!(input.was_pressed(Key::Fire));

    // Still held the next frame, but no longer a fresh press.
    input.set_held(Key::Fire, true);
    assert!(input.is_held(Key::Fire));
    assert!(!input.was_pressed(Key::Fire));
}

#[test]
fn release_and_repress_makes_a_new_edge() {
    let mut input = InputState::new();
    input.set_held(Key::Fire, true);
    input.set_held(Key::Fire, false);
    assert!(!input.is_held(Key::Fire));
    input.set_held(Key::Fire, true);
    assert!(input.was_pressed(Key::Fire));
}

#[test]
fn keys_are_tracked_independently() {
    let mut input = InputState::new();
    input.set_held(Key::Left, true);
    assert!(input.is_held(Key::Left));
    assert!(!input.is_held(Key::Right));
    assert!(!input.is_held(Key::Fire));
}
