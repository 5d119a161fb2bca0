#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::string::String;

use crate::{
    bitboard::BB,
    common::Coord,
    config::EngineConfig,
    engine::EntropyEngine,
    game::BattleshipGame,
};

/// Lets the game loop offer strategy tips without depending on the engine's
/// move selection directly.
pub trait SuggestionProvider {
    /// Suggested next guess, or `None` when no tip is available.
    fn suggest(&mut self, engine: &EntropyEngine, played: &BB) -> Option<Coord>;

    /// Whether this provider gives tips at all.
    fn is_active(&self) -> bool {
        true
    }
}

/// Tips from the entropy engine's best move.
pub struct EntropySuggestion;

impl SuggestionProvider for EntropySuggestion {
    fn suggest(&mut self, engine: &EntropyEngine, played: &BB) -> Option<Coord> {
        engine.best_move(played)
    }
}

/// [`SuggestionProvider`] that yields no suggestions.
pub struct NoSuggestion;

impl SuggestionProvider for NoSuggestion {
    fn suggest(&mut self, _engine: &EntropyEngine, _played: &BB) -> Option<Coord> {
        None
    }

    fn is_active(&self) -> bool {
        false
    }
}

fn frame(n: usize) -> String {
    format!("  +{}+", "-".repeat(n * 2 + 1))
}

/// Render the guess grid: `.` not guessed, `O` hit, `X` miss. With `reveal`,
/// unhit ship cells are shown as `S`.
pub fn render_guess_board(game: &BattleshipGame, reveal: bool) -> String {
    let n = game.grid_size();
    let hits = game.hits();
    let played = game.played();
    let secret = game.secret();
    let mut out = String::new();

    out.push_str("    ");
    for c in 0..n {
        let _ = write!(out, "{} ", c);
    }
    out.push('\n');
    out.push_str(&frame(n));
    out.push('\n');
    for r in 0..n {
        let _ = write!(out, "{} | ", r);
        for c in 0..n {
            let ch = if played.get(r, c).unwrap_or(false) {
                if hits.get(r, c).unwrap_or(false) {
                    'O'
                } else {
                    'X'
                }
            } else if reveal && secret.get(r, c).unwrap_or(false) {
                'S'
            } else {
                '.'
            };
            let _ = write!(out, "{} ", ch);
        }
        out.push_str("|\n");
    }
    out.push_str(&frame(n));
    out
}

/// Render a row-major hit-probability grid.
pub fn render_probability_board(probabilities: &[f64], n: usize) -> String {
    let mut out = String::from("Hit probability:\n   ");
    for c in 0..n {
        let _ = write!(out, " {:>4}", c);
    }
    for r in 0..n {
        let _ = write!(out, "\n{:2} ", r);
        for c in 0..n {
            let p = probabilities.get(r * n + c).copied().unwrap_or(0.0);
            let _ = write!(out, " {:4.2}", p);
        }
    }
    out
}

pub fn print_header(config: &EngineConfig) {
    println!("\n{}", "=".repeat(50));
    println!(
        "      ENTROPY BATTLESHIP: {}x{} EDITION",
        config.grid_size, config.grid_size
    );
    println!("{}", "=".repeat(50));
    println!(
        "Objective: Sink {} ships (each Length {}) using Entropy.",
        config.num_ships, config.ship_length
    );
    println!("Legend:    [.] Not guessed  [O] Hit  [X] Miss");
    println!("{}", "-".repeat(50));
}

pub fn print_guess_board(game: &BattleshipGame, reveal: bool) {
    println!("\n{}", render_guess_board(game, reveal));
}

pub fn print_probability_board(engine: &EntropyEngine) {
    println!(
        "\n{}",
        render_probability_board(&engine.hit_probabilities(), engine.config().grid_size)
    );
}

/// Entropy and belief-state size for the turn about to be played.
pub fn print_turn_stats(turn: usize, engine: &EntropyEngine) {
    println!("\n--- Turn {} ---", turn);
    println!("Current Entropy: {:.4} bits", engine.entropy());
    println!("Remaining Possible Configurations: {}", engine.remaining());
}

pub fn render_tip(tip: Option<Coord>) -> String {
    match tip {
        Some((r, c)) => format!(
            "Strategy Tip 💡 : Guess ({}, {}) to maximize information gain.",
            r, c
        ),
        None => {
            String::from("No more tips needed! Can you guess where the last battleships are? 🛳️")
        }
    }
}

/// The advisor's tip for this turn, or `None` if the advisor is switched off.
pub fn advice(
    advisor: &mut dyn SuggestionProvider,
    engine: &EntropyEngine,
    played: &BB,
) -> Option<String> {
    if !advisor.is_active() {
        return None;
    }
    Some(render_tip(advisor.suggest(engine, played)))
}

pub fn print_advice(advisor: &mut dyn SuggestionProvider, engine: &EntropyEngine, played: &BB) {
    if let Some(tip) = advice(advisor, engine, played) {
        println!("{}", tip);
    }
}

pub fn print_victory(turns: usize) {
    println!("\n{}", "=".repeat(50));
    println!("🎉 VICTORY! Fleet destroyed in {} turns!! 🎉", turns);
    println!("{}", "=".repeat(50));
}
