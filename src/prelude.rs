//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, BattleshipGame, EngineConfig, EntropyEngine, GameStatus, GuessResult, Player,
    Session, BB,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
