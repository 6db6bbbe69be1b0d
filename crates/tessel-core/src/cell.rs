//! Cell states and probe results.

use std::fmt;

/// The state of a single cell.
///
/// Stored one byte per cell. `Dead` is the zero value so freshly
/// allocated buffers start empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellState {
    /// An empty cell.
    #[default]
    Dead = 0,
    /// A live cell.
    Alive = 1,
}

impl CellState {
    /// Returns `true` for [`CellState::Alive`].
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// `1` for alive, `0` for dead.
    #[inline]
    pub fn as_bit(self) -> u8 {
        self as u8
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dead => write!(f, "."),
            Self::Alive => write!(f, "#"),
        }
    }
}

/// Result of looking up a possibly out-of-range coordinate.
///
/// Pattern stamping only proceeds when every target cell is
/// [`Probe::Dead`]; both `Alive` and `OutOfRange` block it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Probe {
    /// The coordinate is on the grid and the cell is dead.
    Dead,
    /// The coordinate is on the grid and the cell is alive.
    Alive,
    /// The coordinate lies outside the grid.
    OutOfRange,
}

impl Probe {
    /// Returns `true` only for [`Probe::Dead`].
    #[inline]
    pub fn is_confirmed_dead(self) -> bool {
        matches!(self, Self::Dead)
    }
}

impl From<CellState> for Probe {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Dead => Self::Dead,
            CellState::Alive => Self::Alive,
        }
    }
}
