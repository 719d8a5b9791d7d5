//! Immutable state snapshot consumed by renderers.
//!
//! The engine writes a fresh snapshot after each mutation; anything that
//! draws the game reads only this type and never the live state.

use crate::types::{HoleState, BOARD_HOLES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Per-hole state in board order.
    pub holes: [HoleState; BOARD_HOLES],
    pub score: u32,
    pub time_remaining: u32,
    pub running: bool,
    pub high_score: u32,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.holes = [HoleState::Empty; BOARD_HOLES];
        self.score = 0;
        self.time_remaining = 0;
        self.running = false;
        self.high_score = 0;
        self.episode_id = 0;
        self.seed = 0;
    }

    /// The session is over (as opposed to never started).
    pub fn game_over(&self) -> bool {
        !self.running && self.time_remaining == 0
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            holes: [HoleState::Empty; BOARD_HOLES],
            score: 0,
            time_remaining: 0,
            running: false,
            high_score: 0,
            episode_id: 0,
            seed: 0,
        }
    }
}
