// Move selection over the belief state.
// Greedy one-step heuristic: the cell whose hit probability is closest to 1/2
// splits the surviving boards most evenly, which stands in for the full
// expected-entropy-reduction lookahead.

use alloc::vec::Vec;
use log::trace;

use crate::{belief::BeliefState, bitboard::BB, common::Coord};

/// Hit probability and score of one unplayed cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScore {
    pub coord: Coord,
    /// Fraction of surviving boards occupying the cell.
    pub p_hit: f64,
    /// `|p_hit - 0.5|`; lower is better.
    pub score: f64,
}

/// Scores every cell not set in `excluded`, in row-major order.
pub fn score_cells(belief: &BeliefState, excluded: &BB) -> Vec<CellScore> {
    let n = belief.grid_size();
    let total = belief.len();
    if total == 0 {
        return Vec::new();
    }
    let counts = belief.hit_counts();
    let mut scores = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            if excluded.get(r, c).unwrap_or(false) {
                continue;
            }
            let p_hit = counts[r * n + c] as f64 / total as f64;
            scores.push(CellScore {
                coord: (r, c),
                p_hit,
                score: libm::fabs(p_hit - 0.5),
            });
        }
    }
    scores
}

/// Picks the unplayed cell with hit probability closest to one half.
///
/// Ties go to the first cell in row-major order. Returns `None` when at most
/// one board survives, or when every cell is excluded.
pub fn best_move(belief: &BeliefState, excluded: &BB) -> Option<Coord> {
    if belief.len() <= 1 {
        return None;
    }
    let mut best: Option<CellScore> = None;
    for cell in score_cells(belief, excluded) {
        match best {
            Some(b) if cell.score >= b.score => {}
            _ => best = Some(cell),
        }
    }
    if let Some(b) = best {
        trace!(
            "best move ({}, {}) with P(hit)={:.4} over {} boards",
            b.coord.0,
            b.coord.1,
            b.p_hit,
            belief.len()
        );
    }
    best.map(|b| b.coord)
}
