//! Rules module for Conway's Game of Life simulation
//!
//! This module contains the rule table the board evaluates during the stage
//! phase, and preset patterns for seeding a board.

use crate::cell::Transition;

/// Game of Life standard rules:
/// 1. Any live cell with fewer than two live neighbors dies (underpopulation)
/// 2. Any live cell with two or three live neighbors lives (survival)
/// 3. Any live cell with more than three live neighbors dies (overpopulation)
/// 4. Any dead cell with exactly three live neighbors becomes alive (reproduction)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Minimum neighbors for a live cell to survive
    pub survival_min: u32,
    /// Maximum neighbors for a live cell to survive
    pub survival_max: u32,
    /// Number of neighbors for a dead cell to become alive
    pub birth_count: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        // Classic Conway's Game of Life rules
        Self {
            survival_min: 2,
            survival_max: 3,
            birth_count: 3,
        }
    }
}

impl GameRules {
    /// Create a new rule set with custom parameters
    pub fn new(survival_min: u32, survival_max: u32, birth_count: u32) -> Self {
        Self {
            survival_min,
            survival_max,
            birth_count,
        }
    }

    /// Preset for Conway's classic Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::default()
    }

    /// The transition to stage for a cell, or `None` when it stays as is.
    pub fn transition(&self, alive: bool, age: u32, live_neighbors: u32) -> Option<Transition> {
        if alive {
            if live_neighbors < self.survival_min || live_neighbors > self.survival_max {
                Some(Transition::die())
            } else {
                Some(Transition::survive(age.saturating_add(1)))
            }
        } else if live_neighbors == self.birth_count {
            Some(Transition::birth())
        } else {
            None
        }
    }
}

/// Predefined patterns for seeding the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small oscillator
    Blinker,
    /// A small oscillator
    Toad,
    /// A small stationary pattern
    Block,
    /// A diagonal spaceship
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// A pattern that grows indefinitely
    GosperGliderGun,
}

impl Pattern {
    /// Live cells as `(row, col)` offsets from the pattern's top-left anchor.
    pub fn offsets(&self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Blinker => &[(0, 1), (1, 1), (2, 1)],
            Pattern::Toad => &[
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
            Pattern::Block => &[
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
            // Travels down and to the right
            Pattern::Glider => &[
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
            Pattern::LightweightSpaceship => &[
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
            Pattern::GosperGliderGun => &[
                // Left block
                (5, 1), (6, 1),
                (5, 2), (6, 2),

                // Left ship
                (5, 11), (6, 11), (7, 11),
                (4, 12), (8, 12),
                (3, 13), (9, 13),
                (3, 14), (9, 14),
                (6, 15),
                (4, 16), (8, 16),
                (5, 17), (6, 17), (7, 17),
                (6, 18),

                // Right ship
                (3, 21), (4, 21), (5, 21),
                (3, 22), (4, 22), (5, 22),
                (2, 23), (6, 23),
                (1, 25), (2, 25), (6, 25), (7, 25),

                // Right block
                (3, 35), (4, 35),
                (3, 36), (4, 36),
            ],
        }
    }

    /// Height and width of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.offsets()
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_table() {
        let rules = GameRules::conway();
        assert_eq!(rules.transition(true, 0, 0), Some(Transition::die()));
        assert_eq!(rules.transition(true, 0, 1), Some(Transition::die()));
        assert_eq!(rules.transition(true, 2, 2), Some(Transition::survive(3)));
        assert_eq!(rules.transition(true, 2, 3), Some(Transition::survive(3)));
        assert_eq!(rules.transition(true, 5, 4), Some(Transition::die()));
        assert_eq!(rules.transition(true, 5, 8), Some(Transition::die()));
        assert_eq!(rules.transition(false, 0, 3), Some(Transition::birth()));
        assert_eq!(rules.transition(false, 0, 2), None);
        assert_eq!(rules.transition(false, 0, 4), None);
    }

    #[test]
    fn survival_age_saturates() {
        let rules = GameRules::conway();
        assert_eq!(
            rules.transition(true, u32::MAX, 2),
            Some(Transition::survive(u32::MAX))
        );
    }

    #[test]
    fn pattern_sizes() {
        assert_eq!(Pattern::Glider.offsets().len(), 5);
        assert_eq!(Pattern::Block.extent(), (2, 2));
        assert_eq!(Pattern::LightweightSpaceship.offsets().len(), 9);
        assert_eq!(Pattern::GosperGliderGun.offsets().len(), 36);
        assert_eq!(Pattern::GosperGliderGun.extent(), (10, 37));
    }
}
