//! Test utilities for Tessel development.
//!
//! Builds engines from ASCII art and compares live-cell sets, so tests
//! can state grids the way they are drawn.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeSet;

use tessel_arena::CellView;
use tessel_core::{CellState, Coord};
use tessel_engine::{EngineConfig, LifeEngine};
use tessel_space::EdgeBehavior;

pub use fixtures::{BLINKER_HORIZONTAL, BLINKER_VERTICAL, BLOCK};

/// Build an engine whose active buffer matches `art`.
///
/// Rows are the non-empty lines of `art` after trimming surrounding
/// whitespace; `#` or `O` is alive, anything else dead. The grid is as
/// wide as the longest row.
///
/// # Panics
///
/// Panics if `art` has no rows.
pub fn engine_from_ascii(art: &str, edge: EdgeBehavior) -> LifeEngine {
    let rows: Vec<&str> = art
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!rows.is_empty(), "ascii grid has no rows");
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

    let config = EngineConfig {
        edge,
        ..EngineConfig::new(width as u32, rows.len() as u32)
    };
    let mut engine = LifeEngine::new(config).expect("ascii grid dimensions");
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if matches!(ch, '#' | 'O') {
                engine
                    .set_cell(x as i32, y as i32, CellState::Alive)
                    .expect("cell within ascii grid");
            }
        }
    }
    engine
}

/// Render `view` in the same format [`engine_from_ascii`] reads.
pub fn to_ascii(view: &CellView<'_>) -> String {
    view.to_string()
}

/// Live cells of `view` as an ordered set.
pub fn alive_set(view: &CellView<'_>) -> BTreeSet<Coord> {
    view.alive().collect()
}

/// `(x, y)` pairs as an ordered coordinate set.
pub fn coords(pairs: &[(i32, i32)]) -> BTreeSet<Coord> {
    pairs.iter().copied().map(Coord::from).collect()
}

/// `cells` translated by `(dx, dy)`.
pub fn shifted(cells: &BTreeSet<Coord>, dx: i32, dy: i32) -> BTreeSet<Coord> {
    cells.iter().map(|&c| c + Coord::new(dx, dy)).collect()
}
