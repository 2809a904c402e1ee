//! The fleet grid: a fixed rows × columns arrangement of alien-or-empty
//! slots.  Destroying an alien empties its slot in place, so column
//! indices stay stable for the wave's whole life; the grid never
//! reshapes.  Row 0 is the bottom row as laid out by `assemble`.

use rand::Rng;

use crate::config::WaveConfig;
use crate::entities::Alien;

/// Distinct alien looks; assembly cycles through them every two rows.
pub const SPRITE_KINDS: usize = 3;

#[derive(Clone, Debug)]
pub struct Fleet {
    slots: Vec<Vec<Option<Alien>>>,
}

impl Fleet {
    /// Lays out the grid.  The bottom row sits a ceiling margin plus the
    /// formation's own height below the top of the screen; each slot is
    /// separated from its neighbors by the configured gaps.
    pub fn assemble(config: &WaveConfig) -> Fleet {
        let rows = config.alien_rows as f32;
        let mut y = config.game_height
            - config.alien_ceiling
            - (rows - 0.5) * config.alien_height
            - config.alien_v_sep * (rows - 1.0);
        let mut sprite = 0;
        let mut slots = Vec::with_capacity(config.alien_rows);
        for r in 0..config.alien_rows {
            let mut row = Vec::with_capacity(config.aliens_in_row);
            let mut x = config.alien_h_sep + config.alien_width / 2.0;
            for _ in 0..config.aliens_in_row {
                x += config.alien_h_sep + config.alien_width;
                row.push(Some(Alien::new(x, y, sprite, config)));
            }
            slots.push(row);
            y += config.alien_v_sep + config.alien_height;
            if r % 2 == 1 {
                sprite = (sprite + 1) % SPRITE_KINDS;
            }
        }
        Fleet { slots }
    }

    pub fn rows(&self) -> usize {
        self.slots.len()
    }

    pub fn columns(&self) -> usize {
        self.slots.first().map_or(0, Vec::len)
    }

    pub fn slot(&self, row: usize, col: usize) -> Option<&Alien> {
        self.slots[row][col].as_ref()
    }

    /// Empties a slot.  The grid keeps its shape; only the occupant goes.
    pub fn clear_slot(&mut self, row: usize, col: usize) {
        self.slots[row][col] = None;
    }

    /// Living aliens with their grid coordinates, bottom row first.
    pub fn living(&self) -> impl Iterator<Item = (usize, usize, &Alien)> + '_ {
        self.slots.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, slot)| slot.as_ref().map(|alien| (r, c, alien)))
        })
    }

    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    /// True once every slot is empty.
    pub fn is_cleared(&self) -> bool {
        self.slots.iter().flatten().all(Option::is_none)
    }

    /// True if any living alien is within one column margin (gap plus
    /// alien width) of either screen edge.
    pub fn reached_edge(&self, config: &WaveConfig) -> bool {
        let margin = config.alien_h_sep + config.alien_width;
        self.living()
            .any(|(_, _, alien)| alien.x <= margin || alien.x >= config.game_width - margin)
    }

    /// True if any living alien's lower edge has descended past `line`.
    pub fn has_dipped(&self, line: f32) -> bool {
        self.living().any(|(_, _, alien)| alien.bottom() < line)
    }

    /// Moves every living alien one lockstep: down first when the fleet
    /// reached an edge this step, then sideways along `direction`.
    pub fn advance(&mut self, direction: f32, dropped: bool, config: &WaveConfig) {
        for alien in self.slots.iter_mut().flatten().flatten() {
            if dropped {
                alien.y -= config.alien_v_walk;
            }
            alien.x += config.alien_h_walk * direction;
        }
    }

    /// The shooter pool: each column's first living alien in row-scan
    /// order.  Aliens in a column share x at all times, so a tie-break
    /// on x can never displace a candidate; the scan order alone
    /// decides.
    fn shooter_candidates(&self) -> Vec<&Alien> {
        let mut candidates: Vec<Option<&Alien>> = vec![None; self.columns()];
        for row in &self.slots {
            for (col, slot) in row.iter().enumerate() {
                if candidates[col].is_none() {
                    candidates[col] = slot.as_ref();
                }
            }
        }
        candidates.into_iter().flatten().collect()
    }

    /// Picks the alien to fire the next fleet bolt: one column candidate
    /// chosen uniformly at random.  `None` once the grid is empty.
    pub fn pick_shooter(&self, rng: &mut impl Rng) -> Option<(f32, f32)> {
        let candidates = self.shooter_candidates();
        if candidates.is_empty() {
            return None;
        }
        let shooter = candidates[rng.gen_range(0..candidates.len())];
        Some((shooter.x, shooter.y))
    }
}
