//! Error types for grid construction and coordinate lookups.

use std::fmt;

use tessel_core::Coord;

/// Errors arising from grid construction or spatial queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// An edge behaviour name was not recognised.
    UnknownEdgeBehavior {
        /// The rejected name.
        value: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::CoordOutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate {coord} out of bounds: [0, {width}) x [0, {height})"
                )
            }
            Self::UnknownEdgeBehavior { value } => {
                write!(
                    f,
                    "unknown border option '{value}', expected 'wrap' or 'nowrap'"
                )
            }
        }
    }
}

impl std::error::Error for SpaceError {}
