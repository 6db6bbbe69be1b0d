//! A single owned grid of cell states.

use tessel_core::{CellState, Coord};
use tessel_space::Square8;

use crate::read::CellView;

/// One row-major `width * height` buffer of cells.
///
/// The length of `cells` never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    grid: Square8,
    cells: Vec<CellState>,
}

impl CellBuffer {
    /// Allocate an all-dead buffer covering `grid`.
    pub fn new(grid: Square8) -> Self {
        Self {
            grid,
            cells: vec![CellState::Dead; grid.cell_count()],
        }
    }

    /// Geometry of this buffer.
    pub fn grid(&self) -> Square8 {
        self.grid
    }

    /// Read-only view of the buffer.
    pub fn view(&self) -> CellView<'_> {
        CellView::new(self.grid, &self.cells)
    }

    /// Set every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// State at `coord`, or `None` off the grid.
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.grid.index(coord).map(|i| self.cells[i])
    }

    /// Write `state` at `coord`. Returns `false` (and writes nothing) if
    /// `coord` is off the grid.
    pub fn set(&mut self, coord: Coord, state: CellState) -> bool {
        match self.grid.index(coord) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Overwrite this buffer with the contents of `src`.
    ///
    /// # Panics
    ///
    /// Panics if the buffers have different geometry; both buffers of a
    /// [`PingPongBuffers`](crate::PingPongBuffers) always share it.
    pub fn copy_from(&mut self, src: &CellView<'_>) {
        self.cells.copy_from_slice(src.as_slice());
    }

    /// Mutable access to the flat row-major cell slice.
    pub fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }
}
