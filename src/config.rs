use crate::bitboard::BB;
use crate::common::EngineError;

/// Default side length of the square grid.
pub const GRID_SIZE: usize = 5;
/// Default length of every ship.
pub const SHIP_LENGTH: usize = 3;
/// Default number of ships in the fleet.
pub const NUM_SHIPS: usize = 3;

/// Sizing of a game: an N×N grid holding `num_ships` ships of equal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    pub grid_size: usize,
    pub ship_length: usize,
    pub num_ships: usize,
}

impl EngineConfig {
    pub const fn new(grid_size: usize, ship_length: usize, num_ships: usize) -> Self {
        Self {
            grid_size,
            ship_length,
            num_ships,
        }
    }

    /// Reject parameters the engine cannot represent.
    ///
    /// A ship longer than the grid is accepted: it simply admits no
    /// placements, and the engine runs with an empty universe.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.grid_size == 0 {
            return Err(EngineError::InvalidConfig("grid size must be positive"));
        }
        if self.ship_length == 0 {
            return Err(EngineError::InvalidConfig("ship length must be positive"));
        }
        if self.num_ships == 0 {
            return Err(EngineError::InvalidConfig("ship count must be positive"));
        }
        BB::try_new(self.grid_size)?;
        Ok(())
    }

    /// Number of cells on the grid.
    pub fn cells(&self) -> usize {
        self.grid_size.saturating_mul(self.grid_size)
    }

    /// Number of occupied cells in every full board configuration.
    pub fn fleet_cells(&self) -> usize {
        self.ship_length.saturating_mul(self.num_ships)
    }

    /// Anchor positions for a single ship in one orientation.
    ///
    /// Like [`cells`](Self::cells), saturates for sizes `validate` rejects.
    pub fn placements_per_orientation(&self) -> usize {
        if self.ship_length > self.grid_size {
            0
        } else {
            self.grid_size
                .saturating_mul(self.grid_size - self.ship_length + 1)
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(GRID_SIZE, SHIP_LENGTH, NUM_SHIPS)
    }
}
