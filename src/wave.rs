//! One wave of the game: the ship, the fleet, and every bolt in
//! flight, advanced one deterministic pass per frame.  A wave is built
//! once per level and replaced wholesale for the next one; there is no
//! in-place reset.
//!
//! All randomness (the fire-threshold draw and the shooter choice)
//! comes through an injected `Rng`, so callers control determinism.

use rand::Rng;

use crate::config::WaveConfig;
use crate::entities::{Bolt, BoltOrigin, Ship};
use crate::fleet::Fleet;
use crate::input::{InputState, Key};

// ── Drawable enumeration ─────────────────────────────────────────────────────

/// Visual kind of an on-screen entity.  The renderer maps these to
/// sprites and colors; no simulation logic is reachable through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Ship,
    Alien { sprite: usize },
    Bolt { origin: BoltOrigin },
    DefenseLine,
}

/// Position, size, and kind of one entity, in world coordinates.
#[derive(Clone, Debug)]
pub struct Drawable {
    pub kind: DrawKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// ── Wave ─────────────────────────────────────────────────────────────────────

pub struct Wave {
    config: WaveConfig,
    /// Absent between a fatal hit and the controller's respawn request.
    ship: Option<Ship>,
    fleet: Fleet,
    bolts: Vec<Bolt>,
    /// Lateral marching direction, +1 or −1.
    direction: f32,
    /// Seconds accumulated since the last fleet step.
    step_timer: f32,
    /// Fleet steps taken since the last shot.
    steps: u32,
    /// Step count at which the fleet fires next, drawn from [1, fire_rate].
    fire_when: u32,
    edge: bool,
    player_bolt_present: bool,
    lives: u32,
    /// Where the ship stood when it was destroyed; consumed by respawn.
    respawn_at: Option<(f32, f32)>,
    won: bool,
}

impl Wave {
    /// Assembles the fleet, spawns the ship centered just above the
    /// floor, and draws the first fire-threshold.
    pub fn new(config: WaveConfig, rng: &mut impl Rng) -> Wave {
        let ship = Ship::new(
            config.game_width / 2.0,
            config.ship_bottom + config.ship_height / 2.0,
            &config,
        );
        let fleet = Fleet::assemble(&config);
        let fire_when = rng.gen_range(1..=config.fire_rate);
        let lives = config.ship_lives;
        Wave {
            config,
            ship: Some(ship),
            fleet,
            bolts: Vec::new(),
            direction: 1.0,
            step_timer: 0.0,
            steps: 0,
            fire_when,
            edge: false,
            player_bolt_present: false,
            lives,
            respawn_at: None,
            won: false,
        }
    }

    /// Advances the simulation by one frame: steer the ship, run the
    /// fleet timer, spawn/move/cull bolts, resolve collisions, then
    /// evaluate the win condition.
    pub fn update(&mut self, input: &InputState, dt: f32, rng: &mut impl Rng) {
        assert!(dt >= 0.0, "negative frame time: {dt}");
        if let Some(ship) = &mut self.ship {
            ship.steer(input, &self.config);
        }
        self.update_fleet(dt, rng);
        self.update_bolts(input);
        self.resolve_collisions();
        if self.fleet.is_cleared() {
            self.won = true;
        }
    }

    // ── Queries for the outer controller ─────────────────────────────────────

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Terminal: set once every slot is empty, never cleared.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// True once a living alien's lower edge has descended past the
    /// defense line.  The controller polls this to call the loss.
    pub fn has_dipped(&self) -> bool {
        self.fleet.has_dipped(self.config.defense_line)
    }

    pub fn is_ship_present(&self) -> bool {
        self.ship.is_some()
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Re-creates the ship where it was destroyed, consuming the stored
    /// coordinate.  Callers must only ask for this while lives remain.
    pub fn respawn_ship(&mut self) {
        let (x, y) = self
            .respawn_at
            .take()
            .expect("respawn requested with no stored ship position");
        self.ship = Some(Ship::new(x, y, &self.config));
    }

    /// Everything on screen, in draw order: living aliens, the ship,
    /// the defense line, then bolts.
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut out = Vec::new();
        for (_, _, alien) in self.fleet.living() {
            out.push(Drawable {
                kind: DrawKind::Alien {
                    sprite: alien.sprite,
                },
                x: alien.x,
                y: alien.y,
                width: alien.width,
                height: alien.height,
            });
        }
        if let Some(ship) = &self.ship {
            out.push(Drawable {
                kind: DrawKind::Ship,
                x: ship.x,
                y: ship.y,
                width: ship.width,
                height: ship.height,
            });
        }
        out.push(Drawable {
            kind: DrawKind::DefenseLine,
            x: self.config.game_width / 2.0,
            y: self.config.defense_line,
            width: self.config.game_width,
            height: 2.0,
        });
        for bolt in &self.bolts {
            out.push(Drawable {
                kind: DrawKind::Bolt {
                    origin: bolt.origin(),
                },
                x: bolt.x,
                y: bolt.y,
                width: bolt.width,
                height: bolt.height,
            });
        }
        out
    }

    // ── Fleet stepping ───────────────────────────────────────────────────────

    /// Accumulates frame time and commits at most one fleet step per
    /// call, however large `dt` is.  Committing zeroes the accumulator.
    fn update_fleet(&mut self, dt: f32, rng: &mut impl Rng) {
        self.step_timer += dt;
        if self.step_timer < self.config.step_seconds {
            return;
        }
        self.step_timer = 0.0;
        self.steps += 1;

        self.fire_check(rng);
        if self.fleet.reached_edge(&self.config) {
            self.edge = true;
        }
        if self.edge {
            self.direction = -self.direction;
        }
        self.fleet.advance(self.direction, self.edge, &self.config);
        self.edge = false;
    }

    /// Fires a fleet bolt once the step counter reaches the threshold.
    /// The countdown restarts only when a shot actually went out.
    fn fire_check(&mut self, rng: &mut impl Rng) {
        if self.steps != self.fire_when {
            return;
        }
        if let Some((x, y)) = self.fleet.pick_shooter(rng) {
            let spawn_y = y - self.config.alien_height / 2.0 - self.config.bolt_height / 2.0;
            self.bolts
                .push(Bolt::new(x, spawn_y, BoltOrigin::Fleet, &self.config));
            self.steps = 0;
            self.fire_when = rng.gen_range(1..=self.config.fire_rate);
        }
    }

    // ── Bolt lifecycle ───────────────────────────────────────────────────────

    /// Spawns the player's bolt on the fire press edge (one live player
    /// bolt at a time), then moves every bolt and culls the ones that
    /// left the screen.
    fn update_bolts(&mut self, input: &InputState) {
        if let Some(ship) = &self.ship {
            if input.was_pressed(Key::Fire) && !self.player_bolt_present {
                let spawn_y = ship.top() + self.config.bolt_height / 2.0;
                self.bolts
                    .push(Bolt::new(ship.x, spawn_y, BoltOrigin::Player, &self.config));
                self.player_bolt_present = true;
            }
        }

        let top = self.config.game_height;
        let mut player_bolt_present = self.player_bolt_present;
        self.bolts.retain_mut(|bolt| {
            bolt.advance();
            if bolt.y >= top {
                // Only the player's bolt travels up, so only it can
                // exit here.
                player_bolt_present = false;
                false
            } else {
                bolt.y > 0.0
            }
        });
        self.player_bolt_present = player_bolt_present;
    }

    /// Tests every live bolt against the living fleet and then the
    /// ship.  A bolt consumes at most one target; one that hits nothing
    /// persists to the next frame.
    fn resolve_collisions(&mut self) {
        let mut spent: Vec<usize> = Vec::new();
        for (bi, bolt) in self.bolts.iter().enumerate() {
            let alien_hit = self
                .fleet
                .living()
                .find(|(_, _, alien)| alien.collides_with_bolt(bolt))
                .map(|(row, col, _)| (row, col));
            if let Some((row, col)) = alien_hit {
                self.fleet.clear_slot(row, col);
                self.player_bolt_present = false;
                spent.push(bi);
                continue;
            }

            let ship_hit = match &self.ship {
                Some(ship) if ship.collides_with_bolt(bolt) => Some((ship.x, ship.y)),
                _ => None,
            };
            if let Some(at) = ship_hit {
                self.respawn_at = Some(at);
                self.ship = None;
                self.player_bolt_present = false;
                self.lives = self.lives.saturating_sub(1);
                spent.push(bi);
            }
        }

        if !spent.is_empty() {
            let bolts = std::mem::take(&mut self.bolts);
            self.bolts = bolts
                .into_iter()
                .enumerate()
                .filter(|(i, _)| !spent.contains(i))
                .map(|(_, bolt)| bolt)
                .collect();
        }
    }
}
