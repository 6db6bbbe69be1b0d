//! Precondition survey and writes for pattern stamps.

use tessel_arena::{CellBuffer, CellView};
use tessel_core::{CellState, Coord, Probe};

use crate::pattern::Pattern;

/// Result of a stamp that did not fail with an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StampOutcome {
    /// The pattern was written and published.
    Stamped {
        /// Number of cells set alive.
        cells: usize,
    },
    /// A target cell was not confirmed dead, so nothing was written.
    Blocked {
        /// The first blocking target cell.
        at: Coord,
        /// What the probe of `at` returned.
        probe: Probe,
    },
}

impl StampOutcome {
    /// Whether the pattern was written.
    pub fn is_stamped(&self) -> bool {
        matches!(self, Self::Stamped { .. })
    }
}

/// What a probe of every stamp target found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Survey {
    /// Every target is on the grid and dead.
    Clear,
    /// Every target is on the grid, but this one is alive.
    Occupied(Coord),
    /// This target is off the grid.
    OutOfRange(Coord),
}

/// Probe every cell `pattern` would cover at `anchor`.
///
/// An off-grid target takes precedence over a live one, so the caller can
/// reject the footprint before considering occupancy.
pub(crate) fn survey(view: &CellView<'_>, pattern: &Pattern, anchor: Coord) -> Survey {
    let mut occupied = None;
    for target in pattern.placed_at(anchor) {
        match view.probe(target) {
            Probe::OutOfRange => return Survey::OutOfRange(target),
            Probe::Alive => {
                occupied.get_or_insert(target);
            }
            Probe::Dead => {}
        }
    }
    occupied.map_or(Survey::Clear, Survey::Occupied)
}

/// Set every target of `pattern` at `anchor` alive in `buffer`.
///
/// Returns the number of cells written. Targets off the grid are skipped;
/// callers survey first so that never happens.
pub(crate) fn write(buffer: &mut CellBuffer, pattern: &Pattern, anchor: Coord) -> usize {
    pattern
        .placed_at(anchor)
        .filter(|&target| buffer.set(target, CellState::Alive))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_space::Square8;

    fn empty(width: u32, height: u32) -> CellBuffer {
        CellBuffer::new(Square8::new(width, height).unwrap())
    }

    #[test]
    fn clear_on_empty_interior() {
        let buf = empty(5, 5);
        assert_eq!(
            survey(&buf.view(), &Pattern::glider(), Coord::new(2, 2)),
            Survey::Clear
        );
    }

    #[test]
    fn live_target_blocks() {
        let mut buf = empty(5, 5);
        buf.set(Coord::new(1, 3), CellState::Alive);
        assert_eq!(
            survey(&buf.view(), &Pattern::glider(), Coord::new(2, 2)),
            Survey::Occupied(Coord::new(1, 3))
        );
    }

    #[test]
    fn live_non_target_does_not_block() {
        let mut buf = empty(5, 5);
        buf.set(Coord::new(2, 2), CellState::Alive); // glider anchor is not a target
        assert_eq!(
            survey(&buf.view(), &Pattern::glider(), Coord::new(2, 2)),
            Survey::Clear
        );
    }

    #[test]
    fn off_grid_wins_over_occupied() {
        let mut buf = empty(5, 5);
        buf.set(Coord::new(0, 1), CellState::Alive);
        assert_eq!(
            survey(&buf.view(), &Pattern::glider(), Coord::new(0, 0)),
            Survey::OutOfRange(Coord::new(0, -1))
        );
    }

    #[test]
    fn write_sets_targets() {
        let mut buf = empty(5, 5);
        let written = write(&mut buf, &Pattern::glider(), Coord::new(2, 2));
        assert_eq!(written, 5);
        let alive: Vec<_> = buf.view().alive().collect();
        assert_eq!(
            alive,
            vec![
                Coord::new(2, 1),
                Coord::new(3, 2),
                Coord::new(1, 3),
                Coord::new(2, 3),
                Coord::new(3, 3),
            ]
        );
    }
}
