use crate::{bitboard::BB, common::Coord, engine::EntropyEngine, player::Player};

/// Player that follows the engine's advice.
///
/// Once no unplayed cell carries information (every candidate is certain to
/// hit or certain to miss), it shoots the first cell that is occupied in every
/// remaining layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, engine: &EntropyEngine, played: &BB) -> Option<Coord> {
        let suggestion = engine.best_move(played);
        if let Some((r, c)) = suggestion {
            let n = engine.config().grid_size;
            let p_hit = engine.hit_probabilities()[r * n + c];
            if p_hit > 0.0 && p_hit < 1.0 {
                return Some((r, c));
            }
        }
        if let Ok(certain) = engine.belief().certain_cells() {
            let sure_hit = certain
                .iter_set_bits()
                .find(|&(r, c)| !played.get(r, c).unwrap_or(true));
            if sure_hit.is_some() {
                return sure_hit;
            }
        }
        suggestion.or_else(|| (!*played).iter_set_bits().next())
    }
}
