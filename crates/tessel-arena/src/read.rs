//! Read-only view of a published cell buffer.
//!
//! [`CellView`] borrows from the published buffer of a
//! [`PingPongBuffers`](crate::PingPongBuffers). It is what rendering and
//! input layers receive from the engine; the shared borrow makes the
//! buffer immutable for as long as the view is alive.

use std::fmt;

use tessel_core::{CellState, Coord, Probe};
use tessel_space::Square8;

/// A read-only, row-major view of `height` rows of `width` cells.
#[derive(Clone, Copy, Debug)]
pub struct CellView<'a> {
    grid: Square8,
    cells: &'a [CellState],
}

impl<'a> CellView<'a> {
    pub(crate) fn new(grid: Square8, cells: &'a [CellState]) -> Self {
        debug_assert_eq!(cells.len(), grid.cell_count());
        Self { grid, cells }
    }

    /// Geometry of the viewed buffer.
    pub fn grid(&self) -> Square8 {
        self.grid
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// State at `coord`, or `None` off the grid.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.grid.index(coord).map(|i| self.cells[i])
    }

    /// State at `coord`, treating off-grid coordinates as dead.
    #[inline]
    pub fn state(&self, coord: Coord) -> CellState {
        self.get(coord).unwrap_or_default()
    }

    /// Tri-state lookup: dead, alive, or out of range.
    #[inline]
    pub fn probe(&self, coord: Coord) -> Probe {
        self.get(coord).map_or(Probe::OutOfRange, Probe::from)
    }

    /// Row `y`, or `None` if `y >= height`.
    pub fn row(&self, y: usize) -> Option<&'a [CellState]> {
        let w = self.grid.width() as usize;
        let start = y.checked_mul(w)?;
        self.cells.get(start..start.checked_add(w)?)
    }

    /// Iterate rows top to bottom. Always yields exactly `height` rows of
    /// `width` cells.
    pub fn rows(&self) -> impl Iterator<Item = &'a [CellState]> + 'a {
        self.cells.chunks_exact(self.grid.width() as usize)
    }

    /// The flat row-major slice.
    pub fn as_slice(&self) -> &'a [CellState] {
        self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of all live cells in row-major order.
    pub fn alive(&self) -> impl Iterator<Item = Coord> + 'a {
        let grid = self.grid;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| grid.coord_of(i))
    }
}

/// Renders one line per row, `#` for alive and `.` for dead.
impl fmt::Display for CellView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
