//! 2D square grid with 8-connected neighbourhood (cardinal + diagonal).

use smallvec::SmallVec;
use tessel_core::Coord;

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;

/// All 8 offsets as `(dx, dy)`: NW, N, NE, W, E, SW, S, SE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Resolve a single axis value under the given edge behaviour.
///
/// Returns `Some(value)` for in-range values, the wrapped value under
/// [`EdgeBehavior::Wrap`], or `None` for out-of-range values under
/// [`EdgeBehavior::Absorb`].
#[inline]
pub fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n)),
    }
}

/// A fixed-size two-dimensional square grid with 8-connected neighbourhood.
///
/// Cells are addressed by [`Coord`] `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`, stored in row-major order: the flat index of
/// `(x, y)` is `y * width + x`.
///
/// The grid itself carries no edge behaviour; it is chosen per query so
/// a single engine can step under either topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square8 {
    width: u32,
    height: u32,
}

impl Square8 {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new `width * height` grid.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `coord` lies on the grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width as i32 && coord.y < self.height as i32
    }

    /// Row-major flat index of `coord`, or `None` if it is off the grid.
    #[inline]
    pub fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| (coord.y as usize) * (self.width as usize) + (coord.x as usize))
    }

    /// Like [`index`](Self::index) but reports the offending coordinate.
    pub fn check_bounds(&self, coord: Coord) -> Result<usize, SpaceError> {
        self.index(coord).ok_or(SpaceError::CoordOutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        })
    }

    /// Inverse of [`index`](Self::index). `index` must be below
    /// [`cell_count`](Self::cell_count).
    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((index % w) as i32, (index / w) as i32)
    }

    /// The 8-connected neighbours of `coord` under `edge`.
    ///
    /// Order follows [`OFFSETS_8`]. Under [`EdgeBehavior::Wrap`] on grids
    /// one cell wide or tall, several slots may resolve to the same cell;
    /// they are all returned so each slot is counted.
    pub fn neighbours(&self, coord: Coord, edge: EdgeBehavior) -> SmallVec<[Coord; 8]> {
        let mut result = SmallVec::new();
        for (dx, dy) in OFFSETS_8 {
            let nx = resolve_axis(coord.x + dx, self.width, edge);
            let ny = resolve_axis(coord.y + dy, self.height, edge);
            if let (Some(nx), Some(ny)) = (nx, ny) {
                result.push(Coord::new(nx, ny));
            }
        }
        result
    }

    /// All cells in row-major order: `(0,0), (1,0), ..., (width-1, height-1)`.
    pub fn canonical_ordering(&self) -> impl Iterator<Item = Coord> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_absorb_interior() {
        let s = Square8::new(5, 5).unwrap();
        assert_eq!(s.neighbours(c(2, 2), EdgeBehavior::Absorb).len(), 8);
    }

    #[test]
    fn neighbours_absorb_corner() {
        let s = Square8::new(5, 5).unwrap();
        let n = s.neighbours(c(0, 0), EdgeBehavior::Absorb);
        assert_eq!(n.len(), 3);
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
        assert!(n.contains(&c(1, 1)));
    }

    #[test]
    fn neighbours_absorb_edge() {
        let s = Square8::new(5, 5).unwrap();
        assert_eq!(s.neighbours(c(2, 0), EdgeBehavior::Absorb).len(), 5);
    }

    #[test]
    fn neighbours_wrap_corner() {
        let s = Square8::new(5, 4).unwrap();
        let n = s.neighbours(c(0, 0), EdgeBehavior::Wrap);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&c(4, 3))); // NW wraps on both axes
        assert!(n.contains(&c(0, 3))); // N wraps
        assert!(n.contains(&c(4, 0))); // W wraps
    }

    // ── Indexing tests ──────────────────────────────────────────

    #[test]
    fn index_is_row_major() {
        let s = Square8::new(4, 3).unwrap();
        assert_eq!(s.index(c(0, 0)), Some(0));
        assert_eq!(s.index(c(3, 0)), Some(3));
        assert_eq!(s.index(c(0, 1)), Some(4));
        assert_eq!(s.index(c(3, 2)), Some(11));
        assert_eq!(s.index(c(4, 0)), None);
        assert_eq!(s.index(c(0, -1)), None);
    }

    #[test]
    fn check_bounds_reports_coord() {
        let s = Square8::new(4, 3).unwrap();
        assert_eq!(
            s.check_bounds(c(4, 1)),
            Err(SpaceError::CoordOutOfBounds {
                coord: c(4, 1),
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    fn canonical_ordering_matches_index() {
        let s = Square8::new(3, 2).unwrap();
        let order: Vec<Coord> = s.canonical_ordering().collect();
        assert_eq!(order.len(), s.cell_count());
        for (i, coord) in order.iter().enumerate() {
            assert_eq!(s.index(*coord), Some(i));
            assert_eq!(s.coord_of(i), *coord);
        }
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_dimension_returns_error() {
        assert!(matches!(
            Square8::new(0, 5),
            Err(SpaceError::EmptySpace { width: 0, height: 5 })
        ));
        assert!(matches!(
            Square8::new(5, 0),
            Err(SpaceError::EmptySpace { .. })
        ));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Square8::new(big, 5),
            Err(SpaceError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Square8::new(5, big),
            Err(SpaceError::DimensionTooLarge { name: "height", .. })
        ));
    }

    // ── 1×1 edge case ──────────────────────────────────────────

    #[test]
    fn single_cell_absorb() {
        let s = Square8::new(1, 1).unwrap();
        assert!(s.neighbours(c(0, 0), EdgeBehavior::Absorb).is_empty());
    }

    #[test]
    fn single_cell_wrap() {
        let s = Square8::new(1, 1).unwrap();
        let n = s.neighbours(c(0, 0), EdgeBehavior::Wrap);
        // All 8 directions wrap to self
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|nb| nb == &c(0, 0)));
    }

    #[test]
    fn resolve_axis_wraps_both_ends() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Wrap), Some(4));
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Wrap), Some(0));
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Absorb), None);
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Absorb), None);
        assert_eq!(resolve_axis(2, 5, EdgeBehavior::Absorb), Some(2));
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
        prop_oneof![Just(EdgeBehavior::Absorb), Just(EdgeBehavior::Wrap)]
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(
            width in 2u32..10,
            height in 2u32..10,
            edge in arb_edge(),
            x in 0i32..10, y in 0i32..10,
        ) {
            let x = x % width as i32;
            let y = y % height as i32;
            let s = Square8::new(width, height).unwrap();
            let coord = c(x, y);
            for nb in s.neighbours(coord, edge) {
                prop_assert!(s.contains(nb));
                let nb_neighbours = s.neighbours(nb, edge);
                prop_assert!(
                    nb_neighbours.contains(&coord),
                    "neighbour symmetry violated: {:?} in N({:?}) but {:?} not in N({:?})",
                    nb, coord, coord, nb,
                );
            }
        }

        #[test]
        fn absorb_never_exceeds_wrap(
            width in 1u32..10,
            height in 1u32..10,
            x in 0i32..10, y in 0i32..10,
        ) {
            let x = x % width as i32;
            let y = y % height as i32;
            let s = Square8::new(width, height).unwrap();
            let absorb = s.neighbours(c(x, y), EdgeBehavior::Absorb).len();
            let wrap = s.neighbours(c(x, y), EdgeBehavior::Wrap).len();
            prop_assert_eq!(wrap, 8);
            prop_assert!(absorb <= wrap);
        }
    }
}
