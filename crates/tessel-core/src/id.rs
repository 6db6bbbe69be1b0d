//! Coordinates and the generation counter.

use std::fmt;
use std::ops::{Add, Sub};

/// A signed grid coordinate.
///
/// `x` is the column and `y` the row; `(0, 0)` is the top-left cell and
/// `y` grows downward. Signed so that pattern offsets and probes past the
/// grid edge are representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// Build a coordinate from column and row.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Coord {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Monotonically increasing generation counter.
///
/// Incremented each time the engine advances one step. Pattern stamps
/// publish a new buffer but do not advance the generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn generation_next() {
        assert_eq!(Generation(0).next(), Generation(1));
        assert_eq!(Generation::default(), Generation(0));
    }

    #[test]
    fn coord_display() {
        assert_eq!(Coord::new(3, -1).to_string(), "(3, -1)");
    }

    proptest! {
        #[test]
        fn add_then_sub_is_identity(
            ax in -1000i32..1000, ay in -1000i32..1000,
            bx in -1000i32..1000, by in -1000i32..1000,
        ) {
            let a = Coord::new(ax, ay);
            let b = Coord::new(bx, by);
            prop_assert_eq!((a + b) - b, a);
        }
    }
}
