#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod belief;
mod bitboard;
mod common;
mod config;
mod engine;
mod entropy;
mod enumerate;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod session;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::{best_move, score_cells, CellScore};
pub use belief::BeliefState;
pub use bitboard::{BitBoard, BitBoardError, SetBits, BB};
pub use common::*;
pub use config::*;
pub use engine::EntropyEngine;
pub use entropy::{entropy_bits, information_gain};
pub use enumerate::{enumerate_universe, single_placements, visit_arrangements};
pub use game::{BattleshipGame, GameStatus};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::Player;
pub use player_ai::AiPlayer;
#[cfg(feature = "std")]
pub use player_cli::{parse_coord, CliPlayer};
pub use session::{Session, SessionReport, TurnRecord};
pub use ship::{Orientation, Placement};
