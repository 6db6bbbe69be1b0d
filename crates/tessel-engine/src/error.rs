//! Engine error types.

use std::error::Error;
use std::fmt;

use tessel_core::Coord;
use tessel_space::SpaceError;

use crate::pattern::PatternError;

/// Broad category of an [`EngineError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied value is malformed: zero dimensions, an unknown
    /// border name, an unknown or unparsable pattern.
    InvalidArgument,
    /// A coordinate or pattern footprint falls outside the grid.
    OutOfRange,
}

/// Errors returned by [`LifeEngine`](crate::LifeEngine) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Grid construction or a coordinate lookup failed.
    Space(SpaceError),
    /// A pattern could not be built.
    Pattern(PatternError),
    /// A pattern footprint crosses the grid edge. Nothing was written.
    StampOutOfRange {
        /// Name of the pattern being stamped.
        pattern: String,
        /// Anchor the pattern was placed at.
        anchor: Coord,
        /// First target cell found off the grid.
        cell: Coord,
    },
    /// No pattern is registered under this name.
    UnknownPattern {
        /// The requested name.
        name: String,
    },
}

impl EngineError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Space(SpaceError::CoordOutOfBounds { .. }) | Self::StampOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            Self::Space(_) | Self::Pattern(_) | Self::UnknownPattern { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Pattern(e) => write!(f, "pattern: {e}"),
            Self::StampOutOfRange {
                pattern,
                anchor,
                cell,
            } => write!(
                f,
                "pattern '{pattern}' at {anchor} writes outside the grid at {cell}"
            ),
            Self::UnknownPattern { name } => write!(f, "unknown pattern '{name}'"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for EngineError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<PatternError> for EngineError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let empty = EngineError::Space(SpaceError::EmptySpace {
            width: 0,
            height: 1,
        });
        assert_eq!(empty.kind(), ErrorKind::InvalidArgument);

        let border = EngineError::from(SpaceError::UnknownEdgeBehavior {
            value: "x".into(),
        });
        assert_eq!(border.kind(), ErrorKind::InvalidArgument);

        let stamp = EngineError::StampOutOfRange {
            pattern: "glider".into(),
            anchor: Coord::new(0, 0),
            cell: Coord::new(0, -1),
        };
        assert_eq!(stamp.kind(), ErrorKind::OutOfRange);

        let cell = EngineError::from(SpaceError::CoordOutOfBounds {
            coord: Coord::new(9, 9),
            width: 3,
            height: 3,
        });
        assert_eq!(cell.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn display_names_pattern_and_cell() {
        let err = EngineError::StampOutOfRange {
            pattern: "glider".into(),
            anchor: Coord::new(0, 2),
            cell: Coord::new(-1, 3),
        };
        assert_eq!(
            err.to_string(),
            "pattern 'glider' at (0, 2) writes outside the grid at (-1, 3)"
        );
    }

    #[test]
    fn source_chains_space_error() {
        let err = EngineError::from(SpaceError::EmptySpace {
            width: 0,
            height: 0,
        });
        assert!(err.source().is_some());
    }
}
