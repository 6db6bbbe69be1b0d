//! Generation kernel.
//!
//! Reads the published generation through a [`CellView`] and writes the
//! next one into a staging [`CellBuffer`]. The caller owns the buffer swap.

use tessel_arena::{CellBuffer, CellView};
use tessel_core::Coord;
use tessel_space::EdgeBehavior;

use crate::rule::next_state;

/// Number of live cells among the 8 neighbour slots of `coord`.
///
/// Under [`EdgeBehavior::Absorb`] off-grid slots contribute nothing;
/// under [`EdgeBehavior::Wrap`] they wrap to the opposite edge.
#[inline]
pub fn count_live_neighbours(view: &CellView<'_>, coord: Coord, edge: EdgeBehavior) -> usize {
    view.grid()
        .neighbours(coord, edge)
        .iter()
        .filter(|&&n| view.state(n).is_alive())
        .count()
}

/// Compute the generation after `current` into `next`.
///
/// Every cell of `next` is overwritten. Returns the new population.
pub fn advance(current: &CellView<'_>, next: &mut CellBuffer, edge: EdgeBehavior) -> usize {
    let grid = current.grid();
    debug_assert_eq!(grid, next.grid());

    let mut population = 0;
    for (i, (cell, out)) in current
        .as_slice()
        .iter()
        .zip(next.cells_mut().iter_mut())
        .enumerate()
    {
        let live = count_live_neighbours(current, grid.coord_of(i), edge);
        *out = next_state(*cell, live);
        population += usize::from(out.as_bit());
    }
    population
}
