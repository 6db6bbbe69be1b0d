//! The Game of Life grid engine.

use std::fmt;

use log::{debug, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_arena::{view_hash, CellView, PingPongBuffers};
use tessel_core::{CellState, Coord, Generation, Probe};
use tessel_space::{EdgeBehavior, Square8};

use crate::config::{EngineConfig, StampCommit};
use crate::error::EngineError;
use crate::pattern::{Pattern, PatternLibrary};
use crate::stamp::{self, StampOutcome, Survey};
use crate::tick;

/// A fixed-size Game of Life grid with double-buffered stepping.
///
/// Owns two `width * height` buffers allocated once at construction. The
/// active (published) one is what [`get_cells`](Self::get_cells) returns;
/// [`step`](Self::step) computes the next generation into the other and
/// swaps them.
///
/// All mutation takes `&mut self`; callers sharing an engine across
/// threads must serialize access themselves.
///
/// # Examples
///
/// ```
/// use tessel_engine::LifeEngine;
///
/// let mut engine = LifeEngine::with_size(5, 5).unwrap();
/// for x in 1..=3 {
///     engine.set_cell(x, 2, true.into()).unwrap();
/// }
/// engine.step();
/// assert_eq!(engine.get_cells().to_string(), ".....\n..#..\n..#..\n..#..\n.....\n");
/// ```
pub struct LifeEngine {
    config: EngineConfig,
    grid: Square8,
    buffers: PingPongBuffers,
    rng: ChaCha8Rng,
    generation: Generation,
    library: PatternLibrary,
}

impl LifeEngine {
    /// Create an engine from a validated configuration.
    ///
    /// Returns `Err(EngineError::Space(SpaceError::EmptySpace))` if either
    /// dimension is zero.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let grid = config.grid()?;
        debug!(
            "life engine created: {}x{} edge={} seed={:#x} stamp_commit={:?}",
            grid.width(),
            grid.height(),
            config.edge,
            config.seed,
            config.stamp_commit,
        );
        let mut engine = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            buffers: PingPongBuffers::new(grid),
            generation: Generation::default(),
            library: PatternLibrary::default(),
            grid,
            config,
        };
        engine.clear();
        Ok(engine)
    }

    /// Create a `width * height` engine with default settings.
    pub fn with_size(width: u32, height: u32) -> Result<Self, EngineError> {
        Self::new(EngineConfig::new(width, height))
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// The configuration this engine was built from, with the current
    /// edge behaviour.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Edge behaviour used by [`step`](Self::step).
    pub fn edge(&self) -> EdgeBehavior {
        self.config.edge
    }

    /// Change the edge behaviour used by [`step`](Self::step).
    pub fn set_edge(&mut self, edge: EdgeBehavior) {
        self.config.edge = edge;
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Index of the active buffer, always `0` or `1`.
    pub fn active_index(&self) -> usize {
        self.buffers.published_index()
    }

    /// Read-only view of the active buffer.
    pub fn get_cells(&self) -> CellView<'_> {
        self.buffers.published()
    }

    /// Number of live cells in the active buffer.
    pub fn population(&self) -> usize {
        self.get_cells().population()
    }

    /// FNV-1a hash of the active buffer.
    pub fn fingerprint(&self) -> u64 {
        view_hash(&self.get_cells())
    }

    /// Tri-state lookup of `(x, y)` in the active buffer.
    pub fn probe(&self, x: i32, y: i32) -> Probe {
        self.get_cells().probe(Coord::new(x, y))
    }

    /// Patterns available to [`stamp_named`](Self::stamp_named).
    pub fn patterns(&self) -> &PatternLibrary {
        &self.library
    }

    /// Mutable access to the pattern library, for registering patterns.
    pub fn patterns_mut(&mut self) -> &mut PatternLibrary {
        &mut self.library
    }

    // ── In-place edits ─────────────────────────────────────────────

    /// Set every cell of the active buffer dead. The inactive buffer is
    /// not touched.
    pub fn clear(&mut self) {
        self.buffers.published_mut().fill(CellState::Dead);
    }

    /// Set every cell of the active buffer alive or dead with probability
    /// one half each, drawn from the engine's seeded RNG.
    pub fn randomize(&mut self) {
        let rng = &mut self.rng;
        for cell in self.buffers.published_mut().cells_mut() {
            *cell = CellState::from(rng.random_bool(0.5));
        }
        trace!("randomized: population {}", self.population());
    }

    /// Reset the RNG behind [`randomize`](Self::randomize) to `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.config.seed = seed;
    }

    /// Set the cell at `(x, y)` in the active buffer.
    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) -> Result<(), EngineError> {
        let coord = Coord::new(x, y);
        self.grid.check_bounds(coord)?;
        self.buffers.published_mut().set(coord, state);
        Ok(())
    }

    // ── Generations ────────────────────────────────────────────────

    /// Advance one generation under the configured edge behaviour.
    pub fn step(&mut self) {
        self.step_with(self.config.edge);
    }

    /// Advance one generation under `edge`, regardless of configuration.
    pub fn step_with(&mut self, edge: EdgeBehavior) {
        let (current, next) = self.buffers.stage();
        let population = tick::advance(&current, next, edge);
        self.buffers.publish();
        self.generation = self.generation.next();
        trace!(
            "generation {} ({edge}): population {population}",
            self.generation
        );
    }

    /// Advance `generations` steps under the configured edge behaviour.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    // ── Stamps ─────────────────────────────────────────────────────

    /// Stamp a glider centred on `(x, y)`.
    ///
    /// The five cells `(x, y-1)`, `(x+1, y)`, `(x+1, y+1)`, `(x, y+1)` and
    /// `(x-1, y+1)` must all be dead; `(x, y)` must be at least one cell
    /// from every edge.
    pub fn drop_glider(&mut self, x: i32, y: i32) -> Result<StampOutcome, EngineError> {
        self.stamp(&Pattern::glider(), x, y)
    }

    /// Stamp a Gosper glider gun anchored at `(x, y)`.
    ///
    /// `(x, y)` must be at least 14 cells from the left edge, 21 from the
    /// right, 5 from the top and 3 from the bottom.
    pub fn drop_gosper_glider_gun(&mut self, x: i32, y: i32) -> Result<StampOutcome, EngineError> {
        self.stamp(&Pattern::gosper_glider_gun(), x, y)
    }

    /// Stamp the library pattern registered as `name` at `(x, y)`.
    pub fn stamp_named(&mut self, name: &str, x: i32, y: i32) -> Result<StampOutcome, EngineError> {
        let pattern = self
            .library
            .get(name)
            .cloned()
            .ok_or_else(|| EngineError::UnknownPattern {
                name: name.to_string(),
            })?;
        self.stamp(&pattern, x, y)
    }

    /// Stamp `pattern` with its anchor at `(x, y)`.
    ///
    /// The stamp only proceeds when every target cell is confirmed dead in
    /// the active buffer. How the result is committed depends on
    /// [`EngineConfig::stamp_commit`]; see [`StampCommit`].
    pub fn stamp(&mut self, pattern: &Pattern, x: i32, y: i32) -> Result<StampOutcome, EngineError> {
        let anchor = Coord::new(x, y);
        let survey = stamp::survey(&self.buffers.published(), pattern, anchor);
        let outcome = match self.config.stamp_commit {
            StampCommit::Atomic => self.commit_atomic(pattern, anchor, survey)?,
            StampCommit::Legacy => self.commit_legacy(pattern, anchor, survey),
        };
        debug!("stamp '{}' at {anchor}: {outcome:?}", pattern.name());
        Ok(outcome)
    }

    fn commit_atomic(
        &mut self,
        pattern: &Pattern,
        anchor: Coord,
        survey: Survey,
    ) -> Result<StampOutcome, EngineError> {
        match survey {
            Survey::OutOfRange(cell) => Err(EngineError::StampOutOfRange {
                pattern: pattern.name().to_string(),
                anchor,
                cell,
            }),
            Survey::Occupied(at) => Ok(StampOutcome::Blocked {
                at,
                probe: Probe::Alive,
            }),
            Survey::Clear => {
                let (current, next) = self.buffers.stage();
                next.copy_from(&current);
                let cells = stamp::write(next, pattern, anchor);
                self.buffers.publish();
                Ok(StampOutcome::Stamped { cells })
            }
        }
    }

    fn commit_legacy(&mut self, pattern: &Pattern, anchor: Coord, survey: Survey) -> StampOutcome {
        let outcome = match survey {
            Survey::OutOfRange(at) => StampOutcome::Blocked {
                at,
                probe: Probe::OutOfRange,
            },
            Survey::Occupied(at) => StampOutcome::Blocked {
                at,
                probe: Probe::Alive,
            },
            Survey::Clear => {
                let (_, stale) = self.buffers.stage();
                let cells = stamp::write(stale, pattern, anchor);
                StampOutcome::Stamped { cells }
            }
        };
        if !outcome.is_stamped() {
            warn!(
                "legacy stamp '{}' at {anchor} blocked; publishing the stale buffer",
                pattern.name()
            );
        }
        self.buffers.publish();
        outcome
    }
}

impl fmt::Debug for LifeEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifeEngine")
            .field("config", &self.config)
            .field("generation", &self.generation)
            .field("active_index", &self.active_index())
            .field("population", &self.population())
            .finish_non_exhaustive()
    }
}
