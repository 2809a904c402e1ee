//! Layout and tuning constants, gathered into one struct built once
//! at wave creation.  World coordinates are f32 with y increasing
//! upward; positions name the CENTER of a rectangle.

/// Every knob the simulation reads.  `Default` is the classic board.
#[derive(Clone, Debug)]
pub struct WaveConfig {
    /// World width in pixels.
    pub game_width: f32,
    /// World height in pixels.
    pub game_height: f32,

    pub ship_width: f32,
    pub ship_height: f32,
    /// Gap between the bottom of the screen and the bottom of the ship.
    pub ship_bottom: f32,
    /// Horizontal distance the ship covers per frame a key is held.
    pub ship_movement: f32,
    pub ship_lives: u32,

    pub alien_rows: usize,
    pub aliens_in_row: usize,
    pub alien_width: f32,
    pub alien_height: f32,
    /// Horizontal gap between adjacent aliens (and the edge margin).
    pub alien_h_sep: f32,
    /// Vertical gap between adjacent alien rows.
    pub alien_v_sep: f32,
    /// Gap between the top of the screen and the topmost alien row.
    pub alien_ceiling: f32,
    /// Horizontal distance one fleet step covers.
    pub alien_h_walk: f32,
    /// Vertical drop when the fleet reaches a screen edge.
    pub alien_v_walk: f32,
    /// Seconds of accumulated frame time per fleet step.
    pub step_seconds: f32,

    pub bolt_width: f32,
    pub bolt_height: f32,
    /// Vertical distance a bolt covers per frame (sign comes from origin).
    pub bolt_speed: f32,
    /// Upper bound on the randomized steps-until-the-fleet-fires draw.
    pub fire_rate: u32,

    /// Height of the line the fleet must not descend past.
    pub defense_line: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        WaveConfig {
            game_width: 800.0,
            game_height: 700.0,
            ship_width: 44.0,
            ship_height: 44.0,
            ship_bottom: 32.0,
            ship_movement: 5.0,
            ship_lives: 3,
            alien_rows: 5,
            aliens_in_row: 12,
            alien_width: 33.0,
            alien_height: 33.0,
            alien_h_sep: 16.0,
            alien_v_sep: 16.0,
            alien_ceiling: 100.0,
            alien_h_walk: 8.0,
            alien_v_walk: 16.0,
            step_seconds: 1.0,
            bolt_width: 4.0,
            bolt_height: 16.0,
            bolt_speed: 10.0,
            fire_rate: 5,
            defense_line: 100.0,
        }
    }
}
