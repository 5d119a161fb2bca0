use crate::{
    bitboard::BB,
    common::{Coord, GuessResult},
    engine::EntropyEngine,
};

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next cell to fire at, given the engine's current beliefs and
    /// the cells already played. `None` ends the session.
    fn select_target(&mut self, engine: &EntropyEngine, played: &BB) -> Option<Coord>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _coord: Coord, _result: GuessResult) {}
}
