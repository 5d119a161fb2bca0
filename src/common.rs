//! Common types: coordinates, guess results and engine errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// A `(row, col)` cell position, 0-indexed.
pub type Coord = (usize, usize);

/// Result of a guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Guess landed on a ship segment.
    Hit,
    /// Guess missed all ships.
    Miss,
}

impl GuessResult {
    /// `true` for [`GuessResult::Hit`].
    pub fn is_hit(self) -> bool {
        matches!(self, GuessResult::Hit)
    }
}

impl From<bool> for GuessResult {
    fn from(is_hit: bool) -> Self {
        if is_hit {
            GuessResult::Hit
        } else {
            GuessResult::Miss
        }
    }
}

/// Errors returned by engine and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoard(BitBoardError),
    /// Configuration value rejected before enumeration.
    InvalidConfig(&'static str),
    /// Ship placement does not fit on the grid.
    ShipOutOfBounds,
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// Every ship cell has already been hit.
    GameOver,
}

impl From<BitBoardError> for EngineError {
    fn from(err: BitBoardError) -> Self {
        EngineError::BitBoard(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            EngineError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
            EngineError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            EngineError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            EngineError::GameOver => write!(f, "The fleet has already been destroyed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
