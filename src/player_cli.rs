#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::{String, ToString};

use log::warn;

use crate::{
    bitboard::BB,
    common::{Coord, GuessResult},
    engine::EntropyEngine,
    player::Player,
};

/// Interactive player reading `row col` guesses from a line-oriented input.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

/// Parse `"row col"` into a coordinate on an `n×n` grid.
pub fn parse_coord(input: &str, n: usize) -> Result<Coord, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Please enter two numbers separated by a space.".to_string());
    }
    let row: usize = parts[0]
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", parts[0]))?;
    let col: usize = parts[1]
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number", parts[1]))?;
    if row >= n || col >= n {
        return Err(format!(
            "Coordinates must be between 0 and {}.",
            n.saturating_sub(1)
        ));
    }
    Ok((row, col))
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask a yes/no question; anything but `y`/`Y` counts as no.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_target(&mut self, n: usize) -> io::Result<Option<Coord>> {
        loop {
            write!(self.output, "Enter coordinates (row col): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.eq_ignore_ascii_case("exit") {
                return Ok(None);
            }
            match parse_coord(&line, n) {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => writeln!(self.output, "⚠️  Error: {}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, engine: &EntropyEngine, _played: &BB) -> Option<Coord> {
        match self.prompt_target(engine.config().grid_size) {
            Ok(target) => target,
            Err(e) => {
                warn!("failed to read guess: {}", e);
                None
            }
        }
    }

    fn handle_guess_result(&mut self, coord: Coord, result: GuessResult) {
        let line = match result {
            GuessResult::Hit => format!("HIT 💥 at ({}, {})!", coord.0, coord.1),
            GuessResult::Miss => format!("MISS 🌊 at ({}, {}).", coord.0, coord.1),
        };
        if let Err(e) = writeln!(self.output, "{}", line) {
            warn!("failed to write guess result: {}", e);
        }
    }
}
