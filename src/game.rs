use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{
    bitboard::BB,
    common::{EngineError, GuessResult},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Ground-truth holder: the secret fleet and the cells played against it.
///
/// The engine never looks at this; it only receives the hit/miss answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleshipGame {
    secret: BB,
    played: BB,
    hits: BB,
    turns: usize,
}

impl BattleshipGame {
    /// Start a game against a known secret layout.
    pub fn new(secret: BB) -> Self {
        let empty = secret.empty_like();
        Self {
            secret,
            played: empty,
            hits: empty,
            turns: 0,
        }
    }

    /// Draw the secret layout uniformly from `universe`. `None` if it is empty.
    pub fn random<R: Rng + ?Sized>(universe: &[BB], rng: &mut R) -> Option<Self> {
        universe.choose(rng).map(|secret| Self::new(*secret))
    }

    pub fn grid_size(&self) -> usize {
        self.secret.size()
    }

    /// The secret layout. Meant for rendering the final board and for tests.
    pub fn secret(&self) -> BB {
        self.secret
    }

    /// Every cell guessed so far.
    pub fn played(&self) -> BB {
        self.played
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.played & !self.hits
    }

    /// Number of guesses processed.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.secret.count_ones() - self.hits.count_ones()
    }

    /// Resolve a guess at (row, col) against the secret layout.
    pub fn process_guess(&mut self, row: usize, col: usize) -> Result<GuessResult, EngineError> {
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }
        if self.played.get(row, col)? {
            return Err(EngineError::AlreadyGuessed);
        }
        self.played.set(row, col)?;
        self.turns += 1;
        if self.secret.get(row, col)? {
            self.hits.set(row, col)?;
            Ok(GuessResult::Hit)
        } else {
            Ok(GuessResult::Miss)
        }
    }

    /// All ship cells have been hit.
    pub fn is_game_over(&self) -> bool {
        self.hits.contains_all(&self.secret)
    }

    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
