//! The set of board configurations still consistent with every observation.

use alloc::vec;
use alloc::vec::Vec;

use crate::bitboard::{BitBoardError, BB};
use crate::common::Coord;

/// Subset of the universe surviving all hit/miss observations so far.
///
/// Members are only ever removed; the set never grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeliefState {
    grid_size: usize,
    boards: Vec<BB>,
}

impl BeliefState {
    /// Starts from a copy of `universe`.
    pub fn new(grid_size: usize, universe: &[BB]) -> Self {
        Self {
            grid_size,
            boards: universe.to_vec(),
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of configurations left.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// No configuration fits the observations; reachable only through
    /// contradictory feedback or an empty universe.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Exactly one configuration remains.
    pub fn is_determined(&self) -> bool {
        self.boards.len() == 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &BB> + '_ {
        self.boards.iter()
    }

    /// Keeps only the boards whose occupancy at `coord` matches `is_hit`.
    /// Returns how many boards were dropped.
    pub fn retain_consistent(&mut self, coord: Coord, is_hit: bool) -> Result<usize, BitBoardError> {
        let (row, col) = coord;
        if row >= self.grid_size || col >= self.grid_size {
            return Err(BitBoardError::IndexOutOfBounds { row, col });
        }
        let before = self.boards.len();
        self.boards
            .retain(|board| board.get(row, col).unwrap_or(false) == is_hit);
        Ok(before - self.boards.len())
    }

    /// Number of surviving boards occupying each cell, row-major.
    pub fn hit_counts(&self) -> Vec<usize> {
        let n = self.grid_size;
        let mut counts = vec![0usize; n * n];
        for board in &self.boards {
            for (r, c) in board.iter_set_bits() {
                counts[r * n + c] += 1;
            }
        }
        counts
    }

    /// Fraction of surviving boards occupying each cell, row-major.
    /// All zeros when the belief state is empty.
    pub fn hit_probabilities(&self) -> Vec<f64> {
        let total = self.boards.len();
        let counts = self.hit_counts();
        if total == 0 {
            return counts.into_iter().map(|_| 0.0).collect();
        }
        counts
            .into_iter()
            .map(|count| count as f64 / total as f64)
            .collect()
    }

    /// Cells occupied in every surviving board; empty if no board survives.
    pub fn certain_cells(&self) -> Result<BB, BitBoardError> {
        let mut boards = self.boards.iter();
        let Some(first) = boards.next() else {
            return BB::try_new(self.grid_size);
        };
        Ok(boards.fold(*first, |acc, board| acc & *board))
    }

    /// Restores the state to a fresh copy of `universe`.
    pub(crate) fn reset(&mut self, universe: &[BB]) {
        self.boards.clear();
        self.boards.extend_from_slice(universe);
    }
}
