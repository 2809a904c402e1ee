use alien_invaders::config::WaveConfig;
use alien_invaders::fleet::Fleet;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A 2 × 2 formation on a 100 × 300 board.  Slot centers land at
/// x = 40 / 65 and y = 220 / 250.
fn small_cfg() -> WaveConfig {
    WaveConfig {
        game_width: 100.0,
        game_height: 300.0,
        ship_width: 20.0,
        ship_height: 20.0,
        ship_bottom: 10.0,
        ship_movement: 4.0,
        ship_lives: 3,
        alien_rows: 2,
        aliens_in_row: 2,
        alien_width: 20.0,
        alien_height: 20.0,
        alien_h_sep: 5.0,
        alien_v_sep: 10.0,
        alien_ceiling: 40.0,
        alien_h_walk: 5.0,
        alien_v_walk: 10.0,
        step_seconds: 1.0,
        bolt_width: 4.0,
        bolt_height: 10.0,
        bolt_speed: 50.0,
        fire_rate: 1,
        defense_line: 60.0,
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Assembly ──────────────────────────────────────────────────────────────────

#[test]
fn assemble_fills_every_slot() {
    let fleet = Fleet::assemble(&WaveConfig::default());
    assert_eq!(fleet.rows(), 5);
    assert_eq!(fleet.columns(), 12);
    assert_eq!(fleet.living_count(), 60);
    assert!(!fleet.is_cleared());
}

#[test]
fn assemble_places_the_bottom_left_alien() {
    // x = h_sep + w/2 + (h_sep + w) = 16 + 16.5 + 49 = 81.5
    // y = 700 − 100 − 4.5·33 − 4·16 = 387.5
    let fleet = Fleet::assemble(&WaveConfig::default());
    let alien = fleet.slot(0, 0).unwrap();
    assert_eq!(alien.x, 81.5);
    assert_eq!(alien.y, 387.5);
}

#[test]
fn assemble_spaces_rows_and_columns() {
    let c = WaveConfig::default();
    let fleet = Fleet::assemble(&c);
    let a = fleet.slot(0, 0).unwrap();
    let right = fleet.slot(0, 1).unwrap();
    let above = fleet.slot(1, 0).unwrap();
    assert_eq!(right.x - a.x, c.alien_h_sep + c.alien_width);
    assert_eq!(above.y - a.y, c.alien_v_sep + c.alien_height);
}

#[test]
fn columns_share_x() {
    let fleet = Fleet::assemble(&WaveConfig::default());
    for col in 0..fleet.columns() {
        let x = fleet.slot(0, col).unwrap().x;
        for row in 1..fleet.rows() {
            assert_eq!(fleet.slot(row, col).unwrap().x, x);
        }
    }
}

#[test]
fn sprites_alternate_every_two_rows() {
    let fleet = Fleet::assemble(&WaveConfig::default());
    let sprite_of = |row| fleet.slot(row, 0).unwrap().sprite;
    assert_eq!(sprite_of(0), 0);
    assert_eq!(sprite_of(1), 0);
    assert_eq!(sprite_of(2), 1);
    assert_eq!(sprite_of(3), 1);
    assert_eq!(sprite_of(4), 2);
}

// ── Slots ─────────────────────────────────────────────────────────────────────

#[test]
fn clear_slot_keeps_the_grid_shape() {
    let mut fleet = Fleet::assemble(&small_cfg());
    fleet.clear_slot(0, 0);
    assert!(fleet.slot(0, 0).is_none());
    assert!(fleet.slot(0, 1).is_some());
    assert_eq!(fleet.rows(), 2);
    assert_eq!(fleet.columns(), 2);
    assert_eq!(fleet.living_count(), 3);
}

#[test]
fn cleared_once_every_slot_is_empty() {
    let mut fleet = Fleet::assemble(&small_cfg());
    for row in 0..2 {
        for col in 0..2 {
            assert!(!fleet.is_cleared());
            fleet.clear_slot(row, col);
        }
    }
    assert!(fleet.is_cleared());
}

// ── Scans ─────────────────────────────────────────────────────────────────────

#[test]
fn no_edge_at_assembly() {
    assert!(!Fleet::assemble(&small_cfg()).reached_edge(&small_cfg()));
    let c = WaveConfig::default();
    assert!(!Fleet::assemble(&c).reached_edge(&c));
}

#[test]
fn edge_when_an_alien_nears_the_right_wall() {
    let mut c = small_cfg();
    // One alien assembled at x = 85; margin = h_sep + width = 50, so the
    // right threshold (100 − 50 = 50) is already crossed.
    c.aliens_in_row = 1;
    c.alien_rows = 1;
    c.alien_h_sep = 20.0;
    c.alien_width = 30.0;
    let fleet = Fleet::assemble(&c);
    assert_eq!(fleet.slot(0, 0).unwrap().x, 85.0);
    assert!(fleet.reached_edge(&c));
}

#[test]
fn dead_aliens_cannot_trigger_the_edge() {
    let mut c = small_cfg();
    c.aliens_in_row = 1;
    c.alien_rows = 1;
    c.alien_h_sep = 20.0;
    c.alien_width = 30.0;
    let mut fleet = Fleet::assemble(&c);
    fleet.clear_slot(0, 0);
    assert!(!fleet.reached_edge(&c));
}

#[test]
fn dip_compares_the_lower_edge_to_the_line() {
    let c = small_cfg();
    let fleet = Fleet::assemble(&c);
    // Bottom row's lower edge is 220 − 10 = 210.
    assert!(!fleet.has_dipped(60.0));
    assert!(!fleet.has_dipped(210.0)); // touching is not past
    assert!(fleet.has_dipped(215.0));
}

// ── Lockstep movement ─────────────────────────────────────────────────────────

#[test]
fn advance_moves_sideways_only() {
    let c = small_cfg();
    let mut fleet = Fleet::assemble(&c);
    fleet.advance(1.0, false, &c);
    let alien = fleet.slot(0, 0).unwrap();
    assert_eq!(alien.x, 45.0); // 40 + h_walk
    assert_eq!(alien.y, 220.0);
}

#[test]
fn advance_with_drop_descends_then_moves() {
    let c = small_cfg();
    let mut fleet = Fleet::assemble(&c);
    fleet.advance(-1.0, true, &c);
    let alien = fleet.slot(0, 0).unwrap();
    assert_eq!(alien.x, 35.0); // 40 − h_walk
    assert_eq!(alien.y, 210.0); // dropped exactly once
}

#[test]
fn advance_keeps_the_fleet_rigid() {
    let c = small_cfg();
    let mut fleet = Fleet::assemble(&c);
    fleet.advance(1.0, true, &c);
    // Every living alien moved by the same delta.
    for (_, col, alien) in fleet.living() {
        assert_eq!(alien.x, [45.0, 70.0][col]);
        assert!(alien.y == 210.0 || alien.y == 240.0);
    }
}

// ── Shooter selection ─────────────────────────────────────────────────────────

#[test]
fn shooter_is_the_first_living_alien_of_its_column() {
    let mut c = small_cfg();
    c.aliens_in_row = 1; // a single column: the pick is deterministic
    let mut fleet = Fleet::assemble(&c);
    let mut rng = seeded_rng();

    let (x, y) = fleet.pick_shooter(&mut rng).unwrap();
    assert_eq!((x, y), (40.0, 220.0)); // bottom row wins the scan

    fleet.clear_slot(0, 0);
    let (x, y) = fleet.pick_shooter(&mut rng).unwrap();
    assert_eq!((x, y), (40.0, 250.0)); // next row up takes over
}

#[test]
fn shooter_never_comes_from_an_empty_column() {
    let c = small_cfg();
    let mut fleet = Fleet::assemble(&c);
    // Wipe out column 0 entirely.
    fleet.clear_slot(0, 0);
    fleet.clear_slot(1, 0);
    let mut rng = seeded_rng();
    for _ in 0..50 {
        let (x, _) = fleet.pick_shooter(&mut rng).unwrap();
        assert_eq!(x, 65.0); // only column 1 remains
    }
}

#[test]
fn no_shooter_once_the_grid_is_empty() {
    let c = small_cfg();
    let mut fleet = Fleet::assemble(&c);
    for row in 0..2 {
        for col in 0..2 {
            fleet.clear_slot(row, col);
        }
    }
    assert!(fleet.pick_shooter(&mut seeded_rng()).is_none());
}
