//! Exhaustive enumeration of every legal fleet layout.
//!
//! Runs once per engine. Cost is combinatorial in the number of single
//! placements choose the number of ships; partial combinations are pruned
//! as soon as two ships overlap.

use alloc::vec::Vec;
use log::{debug, info};

use crate::bitboard::BB;
use crate::common::EngineError;
use crate::config::EngineConfig;
use crate::ship::{Orientation, Placement};

/// Every single-ship placement on the grid: all horizontal placements
/// (rows ascending, then anchor columns), followed by all vertical ones
/// (columns ascending, then anchor rows).
pub fn single_placements(config: &EngineConfig) -> Result<Vec<Placement>, EngineError> {
    BB::try_new(config.grid_size)?;
    let n = config.grid_size;
    let len = config.ship_length;
    let mut placements = Vec::with_capacity(2 * config.placements_per_orientation());
    if len == 0 || len > n {
        return Ok(placements);
    }
    for orient in Orientation::ALL {
        for major in 0..n {
            for anchor in 0..=n - len {
                let (r, c) = match orient {
                    Orientation::Horizontal => (major, anchor),
                    Orientation::Vertical => (anchor, major),
                };
                placements.push(Placement::new(n, orient, r, c, len)?);
            }
        }
    }
    Ok(placements)
}

/// Calls `visit` once for every unordered set of `num_ships` pairwise
/// disjoint placements, in lexicographic order of placement indices,
/// passing the ships and their combined occupancy mask.
pub fn visit_arrangements<F>(config: &EngineConfig, mut visit: F) -> Result<(), EngineError>
where
    F: FnMut(&[Placement], BB),
{
    config.validate()?;
    let placements = single_placements(config)?;
    if config.num_ships > placements.len() {
        return Ok(());
    }
    let mut stack = Vec::with_capacity(config.num_ships);
    walk(
        &placements,
        0,
        config.num_ships,
        BB::try_new(config.grid_size)?,
        &mut stack,
        &mut visit,
    );
    Ok(())
}

fn walk<F>(
    placements: &[Placement],
    start: usize,
    remaining: usize,
    occupied: BB,
    stack: &mut Vec<Placement>,
    visit: &mut F,
) where
    F: FnMut(&[Placement], BB),
{
    if remaining == 0 {
        visit(stack.as_slice(), occupied);
        return;
    }
    // leave enough placements for the ships still to come
    for i in start..=placements.len() - remaining {
        let ship = placements[i];
        if !occupied.is_disjoint(&ship.mask()) {
            continue;
        }
        stack.push(ship);
        walk(placements, i + 1, remaining - 1, occupied | ship.mask(), stack, visit);
        stack.pop();
    }
}

/// Builds the universe: one occupancy mask per legal arrangement.
///
/// Layouts reachable by more than one arrangement (a 3×3 block is three
/// horizontal or three vertical ships) are kept once per arrangement, so the
/// uniform prior is over arrangements. An impossible sizing yields an empty
/// universe rather than an error.
pub fn enumerate_universe(config: &EngineConfig) -> Result<Vec<BB>, EngineError> {
    debug!(
        "Enumerating {} ship(s) of length {} on a {}x{} grid",
        config.num_ships, config.ship_length, config.grid_size, config.grid_size
    );
    let mut universe = Vec::new();
    visit_arrangements(config, |_, occupied| universe.push(occupied))?;
    info!("Total unique board states: {}", universe.len());
    Ok(universe)
}
