//! Board module - manages the grid of holes
//!
//! The board is a fixed array of holes indexed 0..8, row-major
//! (left-to-right, top-to-bottom). The layout only matters for
//! presentation; the game logic treats indices as opaque.

use arrayvec::ArrayVec;

use crate::types::{HoleState, BOARD_HOLES};

/// The game board - a fixed set of holes using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    holes: [HoleState; BOARD_HOLES],
}

impl Board {
    /// Create a new board with every hole empty
    pub fn new() -> Self {
        Self {
            holes: [HoleState::Empty; BOARD_HOLES],
        }
    }

    /// Get the state of the hole at `index`
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<HoleState> {
        self.holes.get(index).copied()
    }

    /// Set the state of the hole at `index`
    /// Returns false if out of bounds
    pub fn set(&mut self, index: usize, state: HoleState) -> bool {
        match self.holes.get_mut(index) {
            Some(hole) => {
                *hole = state;
                true
            }
            None => false,
        }
    }

    /// All hole states in board order
    pub fn holes(&self) -> &[HoleState; BOARD_HOLES] {
        &self.holes
    }

    /// Indices of holes with no target, in board order.
    /// Zero-allocation: candidates fit in a fixed-capacity vec.
    pub fn empty_holes(&self) -> ArrayVec<usize, BOARD_HOLES> {
        self.holes
            .iter()
            .enumerate()
            .filter(|(_, hole)| !hole.has_mole())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of holes currently occupied by a target
    pub fn mole_count(&self) -> usize {
        self.holes.iter().filter(|hole| hole.has_mole()).count()
    }

    /// True when every hole holds a target (spawn saturation)
    pub fn is_full(&self) -> bool {
        self.holes.iter().all(|hole| hole.has_mole())
    }

    /// Reset every hole to empty
    pub fn clear(&mut self) {
        self.holes = [HoleState::Empty; BOARD_HOLES];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
