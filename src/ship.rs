//! Single-ship placements on a runtime-sized grid.

use core::fmt;

use crate::bitboard::BB;
use crate::common::{Coord, EngineError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Both orientations, in enumeration order.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    #[inline]
    fn step(self, row: usize, col: usize, i: usize) -> Coord {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }
}

/// One ship laid on the grid: `length` contiguous cells starting at the
/// top-left anchor (`row`, `col`). Immutable once built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    orientation: Orientation,
    row: usize,
    col: usize,
    length: usize,
    mask: BB,
}

impl Placement {
    /// Place a ship of `length` at (`row`, `col`) on an `n×n` grid.
    pub fn new(
        n: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
        length: usize,
    ) -> Result<Self, EngineError> {
        // Ensure placement fits within N×N
        let (last_r, last_c) = orientation.step(row, col, length.saturating_sub(1));
        if length == 0 || last_r >= n || last_c >= n {
            return Err(EngineError::ShipOutOfBounds);
        }

        let mut mask = BB::try_new(n)?;
        for i in 0..length {
            let (r, c) = orientation.step(row, col, i);
            mask.set(r, c)?;
        }
        Ok(Placement {
            orientation,
            row,
            col,
            length,
            mask,
        })
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Cells covered by the ship, from the anchor outwards.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| self.orientation.step(self.row, self.col, i))
    }

    /// Whether the ship covers (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// True when the two ships share no cell.
    pub fn is_disjoint(&self, other: &Placement) -> bool {
        self.mask.is_disjoint(&other.mask)
    }

    /// Anchor of the ship (row, col).
    pub fn origin(&self) -> Coord {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.length
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placement {{ origin: ({}, {}), orientation: {:?}, length: {} }}",
            self.row, self.col, self.orientation, self.length,
        )
    }
}
