//! Fixed cell patterns and the named pattern library.
//!
//! A [`Pattern`] is a set of live-cell offsets relative to an anchor.
//! Stamping places the anchor on a grid coordinate and sets every offset
//! cell alive (see [`LifeEngine::stamp`](crate::LifeEngine::stamp)).
//!
//! Two patterns are built in:
//!
//! - [`Pattern::glider`]: 5 cells, anchored on its centre cell.
//! - [`Pattern::gosper_glider_gun`]: 36 cells spanning `x-14..=x+21`,
//!   `y-5..=y+3` around the anchor.

use std::error::Error;
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use tessel_core::Coord;

/// Library name of [`Pattern::glider`].
pub const GLIDER: &str = "glider";
/// Library name of [`Pattern::gosper_glider_gun`].
pub const GOSPER_GLIDER_GUN: &str = "gosper-glider-gun";

/// Glider heading south-east:
///
/// ```text
/// .#.
/// ..#
/// ###
/// ```
const GLIDER_OFFSETS: [(i32, i32); 5] = [(0, -1), (1, 0), (1, 1), (0, 1), (-1, 1)];

/// Gosper glider gun, period 30.
const GOSPER_GLIDER_GUN_OFFSETS: [(i32, i32); 36] = [
    (0, 0),
    (-1, -3),
    (-1, 3),
    (-2, -3),
    (-2, 3),
    (-3, -2),
    (-3, 2),
    (-4, 0),
    (-4, -1),
    (-4, 1),
    (-13, 0),
    (-13, -1),
    (-14, 0),
    (-14, -1),
    (1, -2),
    (1, 2),
    (2, 0),
    (2, -1),
    (2, 1),
    (3, 0),
    (6, -1),
    (7, -1),
    (6, -2),
    (7, -2),
    (6, -3),
    (7, -3),
    (8, 0),
    (8, -4),
    (10, 0),
    (10, 1),
    (10, -4),
    (10, -5),
    (20, -2),
    (20, -3),
    (21, -2),
    (21, -3),
];

// ── PatternError ───────────────────────────────────────────────────

/// Errors from building a [`Pattern`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern has no live cells.
    Empty {
        /// Name of the rejected pattern.
        name: String,
    },
    /// A plaintext pattern contains a character that is neither a live
    /// nor a dead cell marker.
    InvalidChar {
        /// 1-based line number in the source text.
        line: usize,
        /// 1-based column number.
        column: usize,
        /// The offending character.
        ch: char,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { name } => write!(f, "pattern '{name}' has no live cells"),
            Self::InvalidChar { line, column, ch } => {
                write!(f, "invalid cell character {ch:?} at line {line}, column {column}")
            }
        }
    }
}

impl Error for PatternError {}

// ── Pattern ────────────────────────────────────────────────────────

/// A named set of live-cell offsets relative to an anchor.
///
/// Offsets are unique and keep their insertion order, which is the order
/// stamp targets are checked in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Vec<Coord>,
}

impl Pattern {
    /// Build a pattern from offsets. Duplicates are dropped.
    ///
    /// Returns `Err(PatternError::Empty)` if `cells` is empty.
    pub fn new(
        name: impl Into<String>,
        cells: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, PatternError> {
        let name = name.into();
        let cells: IndexSet<Coord> = cells.into_iter().collect();
        if cells.is_empty() {
            return Err(PatternError::Empty { name });
        }
        Ok(Self {
            name,
            cells: cells.into_iter().collect(),
        })
    }

    fn from_static(name: &str, offsets: &[(i32, i32)]) -> Self {
        Self {
            name: name.to_string(),
            cells: offsets.iter().copied().map(Coord::from).collect(),
        }
    }

    /// The 5-cell glider, anchored on its centre cell.
    pub fn glider() -> Self {
        Self::from_static(GLIDER, &GLIDER_OFFSETS)
    }

    /// The 36-cell Gosper glider gun.
    ///
    /// The anchor must sit at least 14 cells from the left edge, 21 from
    /// the right, 5 from the top and 3 from the bottom for the whole gun
    /// to fit.
    pub fn gosper_glider_gun() -> Self {
        Self::from_static(GOSPER_GLIDER_GUN, &GOSPER_GLIDER_GUN_OFFSETS)
    }

    /// Parse the Life plaintext format.
    ///
    /// Lines starting with `!` are comments. `O`, `#` and `*` are live
    /// cells; `.` and spaces are dead. The anchor is the top-left
    /// character of the first non-comment line; use
    /// [`with_anchor`](Self::with_anchor) to move it.
    ///
    /// ```
    /// use tessel_engine::Pattern;
    ///
    /// let blinker = Pattern::from_plaintext("blinker", "!Name: Blinker\nOOO\n").unwrap();
    /// assert_eq!(blinker.len(), 3);
    /// ```
    pub fn from_plaintext(name: impl Into<String>, text: &str) -> Result<Self, PatternError> {
        let mut cells = Vec::new();
        let mut y = 0i32;
        for (line_idx, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.starts_with('!') {
                continue;
            }
            for (col_idx, ch) in line.chars().enumerate() {
                match ch {
                    'O' | '#' | '*' => cells.push(Coord::new(col_idx as i32, y)),
                    '.' | ' ' => {}
                    other => {
                        return Err(PatternError::InvalidChar {
                            line: line_idx + 1,
                            column: col_idx + 1,
                            ch: other,
                        })
                    }
                }
            }
            y += 1;
        }
        Self::new(name, cells)
    }

    /// Move the anchor to `anchor`, expressed in the current offset frame.
    pub fn with_anchor(mut self, anchor: Coord) -> Self {
        for cell in &mut self.cells {
            *cell = *cell - anchor;
        }
        self
    }

    /// Name of the pattern.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Live-cell offsets relative to the anchor.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty patterns.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Inclusive `(min, max)` corners of the offsets.
    pub fn bounds(&self) -> (Coord, Coord) {
        let mut min = self.cells[0];
        let mut max = self.cells[0];
        for c in &self.cells[1..] {
            min = Coord::new(min.x.min(c.x), min.y.min(c.y));
            max = Coord::new(max.x.max(c.x), max.y.max(c.y));
        }
        (min, max)
    }

    /// Grid coordinates covered when the anchor is placed at `anchor`.
    ///
    /// Saturates at the `i32` range, which is never on a grid.
    pub fn placed_at(&self, anchor: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(move |&offset| {
            Coord::new(
                anchor.x.saturating_add(offset.x),
                anchor.y.saturating_add(offset.y),
            )
        })
    }
}

// ── PatternLibrary ─────────────────────────────────────────────────

/// Named patterns available to [`LifeEngine::stamp_named`](crate::LifeEngine::stamp_named).
///
/// Iteration follows registration order. [`Default`] pre-registers the
/// glider and the Gosper glider gun.
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    patterns: IndexMap<String, Pattern>,
}

impl PatternLibrary {
    /// An empty library.
    pub fn empty() -> Self {
        Self {
            patterns: IndexMap::new(),
        }
    }

    /// Register `pattern` under its name, returning any pattern it replaced.
    pub fn register(&mut self, pattern: Pattern) -> Option<Pattern> {
        self.patterns.insert(pattern.name.clone(), pattern)
    }

    /// Look up a pattern by name.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the library has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        let mut library = Self::empty();
        library.register(Pattern::glider());
        library.register(Pattern::gosper_glider_gun());
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glider_offsets() {
        let g = Pattern::glider();
        assert_eq!(g.len(), 5);
        assert_eq!(g.bounds(), (Coord::new(-1, -1), Coord::new(1, 1)));
    }

    #[test]
    fn gun_footprint() {
        let gun = Pattern::gosper_glider_gun();
        assert_eq!(gun.len(), 36);
        assert_eq!(gun.bounds(), (Coord::new(-14, -5), Coord::new(21, 3)));
    }

    #[test]
    fn plaintext_matches_builtin_glider() {
        let parsed = Pattern::from_plaintext("g", "!glider\n.O.\n..O\nOOO\n")
            .unwrap()
            .with_anchor(Coord::new(1, 1));
        let mut a: Vec<Coord> = parsed.cells().to_vec();
        let mut b: Vec<Coord> = Pattern::glider().cells().to_vec();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn plaintext_rejects_unknown_chars() {
        let err = Pattern::from_plaintext("bad", "OO\nOx\n").unwrap_err();
        assert_eq!(
            err,
            PatternError::InvalidChar {
                line: 2,
                column: 2,
                ch: 'x'
            }
        );
    }

    #[test]
    fn empty_patterns_rejected() {
        assert!(matches!(
            Pattern::from_plaintext("blank", "!nothing\n...\n"),
            Err(PatternError::Empty { .. })
        ));
        assert!(Pattern::new("none", Vec::new()).is_err());
    }

    #[test]
    fn duplicates_dropped_in_order() {
        let p = Pattern::new(
            "dup",
            [Coord::new(1, 0), Coord::new(0, 0), Coord::new(1, 0)],
        )
        .unwrap();
        assert_eq!(p.cells(), &[Coord::new(1, 0), Coord::new(0, 0)]);
    }

    #[test]
    fn library_defaults_and_registration() {
        let mut lib = PatternLibrary::default();
        assert_eq!(lib.names().collect::<Vec<_>>(), vec![GLIDER, GOSPER_GLIDER_GUN]);

        let block = Pattern::from_plaintext("block", "OO\nOO").unwrap();
        assert!(lib.register(block.clone()).is_none());
        assert_eq!(lib.get("block"), Some(&block));
        assert_eq!(lib.len(), 3);
        assert!(lib.register(block).is_some());
        assert_eq!(lib.len(), 3);
        assert!(PatternLibrary::empty().is_empty());
    }
}
