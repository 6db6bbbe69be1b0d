//! Spatial edge (boundary) behaviour for the grid.

use std::fmt;
use std::str::FromStr;

use crate::error::SpaceError;

/// How the grid handles neighbours at its edges.
///
/// The textual names `"nowrap"` and `"wrap"` are accepted by
/// [`FromStr`]; anything else is rejected with
/// [`SpaceError::UnknownEdgeBehavior`].
///
/// # Examples
///
/// ```
/// use tessel_space::{EdgeBehavior, Square8};
/// use tessel_core::Coord;
///
/// let grid = Square8::new(4, 4).unwrap();
/// let corner = Coord::new(0, 0);
///
/// // Absorb: the corner has 3 neighbours.
/// assert_eq!(grid.neighbours(corner, EdgeBehavior::Absorb).len(), 3);
///
/// // Wrap: every cell has 8 neighbours (torus).
/// let wrap: EdgeBehavior = "wrap".parse().unwrap();
/// assert_eq!(grid.neighbours(corner, wrap).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-range neighbours are omitted (fewer neighbours at edges).
    #[default]
    Absorb,
    /// Out-of-range neighbours wrap to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// The canonical textual name: `"nowrap"` or `"wrap"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Absorb => "nowrap",
            Self::Wrap => "wrap",
        }
    }
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeBehavior {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nowrap" => Ok(Self::Absorb),
            "wrap" => Ok(Self::Wrap),
            other => Err(SpaceError::UnknownEdgeBehavior {
                value: other.to_string(),
            }),
        }
    }
}
