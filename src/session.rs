//! Turn loop tying a [`Player`], the [`EntropyEngine`] and the secret
//! [`BattleshipGame`] together.

use alloc::boxed::Box;
use alloc::vec::Vec;
use log::{debug, info};

use crate::{
    common::{Coord, EngineError, GuessResult},
    config::EngineConfig,
    engine::EntropyEngine,
    entropy::information_gain,
    game::{BattleshipGame, GameStatus},
    player::Player,
};

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub turn: usize,
    pub coord: Coord,
    pub result: GuessResult,
    pub entropy_before: f64,
    pub remaining_before: usize,
    pub remaining_after: usize,
    pub bits_gained: f64,
}

/// Summary of a finished (or abandoned) session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionReport {
    pub config: EngineConfig,
    pub universe_size: usize,
    pub status: GameStatus,
    pub turns: usize,
    pub hits: usize,
    pub misses: usize,
    pub final_remaining: usize,
    pub history: Vec<TurnRecord>,
}

pub struct Session {
    player: Box<dyn Player>,
    engine: EntropyEngine,
    game: BattleshipGame,
    history: Vec<TurnRecord>,
}

impl Session {
    pub fn new(player: Box<dyn Player>, engine: EntropyEngine, game: BattleshipGame) -> Self {
        Self {
            player,
            engine,
            game,
            history: Vec::new(),
        }
    }

    pub fn engine(&self) -> &EntropyEngine {
        &self.engine
    }

    pub fn game(&self) -> &BattleshipGame {
        &self.game
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Play one turn. `Ok(None)` when the game is over or the player stops.
    ///
    /// A rejected guess (already played, off the grid) is returned as an
    /// error and leaves every piece of state unchanged.
    pub fn step(&mut self) -> Result<Option<TurnRecord>, EngineError> {
        if self.game.is_game_over() {
            return Ok(None);
        }
        let played = self.game.played();
        let Some(coord) = self.player.select_target(&self.engine, &played) else {
            debug!("player ended the session");
            return Ok(None);
        };
        let entropy_before = self.engine.entropy();
        let remaining_before = self.engine.remaining();
        let result = self.game.process_guess(coord.0, coord.1)?;
        self.engine.observe(coord, result)?;
        self.player.handle_guess_result(coord, result);

        let remaining_after = self.engine.remaining();
        let record = TurnRecord {
            turn: self.game.turns(),
            coord,
            result,
            entropy_before,
            remaining_before,
            remaining_after,
            bits_gained: information_gain(remaining_before, remaining_after),
        };
        self.history.push(record);
        Ok(Some(record))
    }

    /// Play until the fleet is destroyed, the player stops, or `max_turns`
    /// guesses have been made.
    pub fn run(&mut self, max_turns: usize) -> Result<SessionReport, EngineError> {
        while self.history.len() < max_turns {
            if self.step()?.is_none() {
                break;
            }
        }
        let report = self.report();
        info!(
            "session finished: {:?} after {} turns ({} hits, {} misses)",
            report.status, report.turns, report.hits, report.misses
        );
        Ok(report)
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            config: *self.engine.config(),
            universe_size: self.engine.universe_size(),
            status: self.game.status(),
            turns: self.game.turns(),
            hits: self.game.hits().count_ones(),
            misses: self.game.misses().count_ones(),
            final_remaining: self.engine.remaining(),
            history: self.history.clone(),
        }
    }

    /// Hand back the engine, e.g. to reset it for another game.
    pub fn into_engine(self) -> EntropyEngine {
        self.engine
    }
}
