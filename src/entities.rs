//! The three entity kinds that live on the board: the player's ship,
//! one alien of the fleet, and a bolt in flight.  Rectangles are
//! center-based; collision is a four-corner containment test gated by
//! the bolt's origin.

use crate::config::WaveConfig;
use crate::input::{InputState, Key};

// ── Origin tag & collision eligibility ───────────────────────────────────────

/// Who fired a bolt.  Fixed at creation; decides velocity sign, color,
/// and which side the bolt can harm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoltOrigin {
    Player,
    Fleet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Ship,
    Alien,
}

/// A bolt can only ever harm the opposite side of the one that fired
/// it.  Both collision methods below route through this one predicate.
pub fn eligible_target(origin: BoltOrigin, target: TargetKind) -> bool {
    match target {
        TargetKind::Ship => origin == BoltOrigin::Fleet,
        TargetKind::Alien => origin == BoltOrigin::Player,
    }
}

/// True if the point lies within the center-based rectangle.
fn within(cx: f32, cy: f32, width: f32, height: f32, px: f32, py: f32) -> bool {
    px >= cx - width / 2.0
        && px <= cx + width / 2.0
        && py >= cy - height / 2.0
        && py <= cy + height / 2.0
}

/// True if any of the bolt's four corners lies within the rectangle.
fn any_corner_within(cx: f32, cy: f32, width: f32, height: f32, bolt: &Bolt) -> bool {
    within(cx, cy, width, height, bolt.left(), bolt.top())
        || within(cx, cy, width, height, bolt.right(), bolt.top())
        || within(cx, cy, width, height, bolt.left(), bolt.bottom())
        || within(cx, cy, width, height, bolt.right(), bolt.bottom())
}

// ── Bolt ─────────────────────────────────────────────────────────────────────

/// A rectangular projectile.  Velocity is derived once from the origin
/// (player bolts travel up, fleet bolts down) and never reassigned.
#[derive(Clone, Debug)]
pub struct Bolt {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    velocity: f32,
    origin: BoltOrigin,
}

impl Bolt {
    pub fn new(x: f32, y: f32, origin: BoltOrigin, config: &WaveConfig) -> Bolt {
        let velocity = match origin {
            BoltOrigin::Player => config.bolt_speed,
            BoltOrigin::Fleet => -config.bolt_speed,
        };
        Bolt {
            x,
            y,
            width: config.bolt_width,
            height: config.bolt_height,
            velocity,
            origin,
        }
    }

    pub fn origin(&self) -> BoltOrigin {
        self.origin
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Moves the bolt one frame along its fixed velocity.
    pub fn advance(&mut self) {
        self.y += self.velocity;
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.height / 2.0
    }
}

// ── Ship ─────────────────────────────────────────────────────────────────────

/// The player's ship.  x is steered by input; y never changes after
/// construction.
#[derive(Clone, Debug)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Ship {
    /// Builds a ship at the given center.  The spawn point must already
    /// be legal: x inside the playable band and y between the floor and
    /// the defense line.
    pub fn new(x: f32, y: f32, config: &WaveConfig) -> Ship {
        let half_w = config.ship_width / 2.0;
        let half_h = config.ship_height / 2.0;
        assert!(
            x >= half_w && x <= config.game_width - half_w,
            "ship x {x} outside the playable band"
        );
        assert!(
            y >= half_h && y <= config.defense_line - half_h,
            "ship y {y} outside the playable band"
        );
        Ship {
            x,
            y,
            width: config.ship_width,
            height: config.ship_height,
        }
    }

    /// Applies one frame of held-key movement and clamps to the screen.
    /// Left and right held together cancel out.
    pub fn steer(&mut self, input: &InputState, config: &WaveConfig) {
        let mut delta = 0.0;
        if input.is_held(Key::Left) {
            delta -= config.ship_movement;
        }
        if input.is_held(Key::Right) {
            delta += config.ship_movement;
        }
        let half_w = self.width / 2.0;
        self.x = (self.x + delta)
            .max(half_w)
            .min(config.game_width - half_w);
    }

    pub fn top(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// True iff a corner of the bolt is inside the ship and the bolt
    /// was fired by the fleet.
    pub fn collides_with_bolt(&self, bolt: &Bolt) -> bool {
        eligible_target(bolt.origin(), TargetKind::Ship)
            && any_corner_within(self.x, self.y, self.width, self.height, bolt)
    }
}

// ── Alien ────────────────────────────────────────────────────────────────────

/// One fleet member.  `sprite` picks its look and is assigned during
/// fleet assembly.
#[derive(Clone, Debug)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub sprite: usize,
}

impl Alien {
    pub fn new(x: f32, y: f32, sprite: usize, config: &WaveConfig) -> Alien {
        Alien {
            x,
            y,
            width: config.alien_width,
            height: config.alien_height,
            sprite,
        }
    }

    /// The alien's lower edge, compared against the defense line.
    pub fn bottom(&self) -> f32 {
        self.y - self.height / 2.0
    }

    /// True iff a corner of the bolt is inside this alien and the bolt
    /// was fired by the player.
    pub fn collides_with_bolt(&self, bolt: &Bolt) -> bool {
        eligible_target(bolt.origin(), TargetKind::Alien)
            && any_corner_within(self.x, self.y, self.width, self.height, bolt)
    }
}
