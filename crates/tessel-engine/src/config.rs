//! Engine configuration and validation.
//!
//! [`EngineConfig`] is the builder-input for [`LifeEngine`](crate::LifeEngine).
//! [`validate()`](EngineConfig::validate) checks structural invariants;
//! the engine constructor runs the same check before allocating buffers.

use tessel_space::{EdgeBehavior, Square8};

use crate::error::EngineError;

// ── StampCommit ────────────────────────────────────────────────────

/// How a pattern stamp is committed to the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StampCommit {
    /// The pattern is merged onto a copy of the current generation and
    /// published only if every target cell is confirmed dead. A blocked
    /// stamp changes nothing, including the active buffer index. A
    /// footprint that crosses the grid edge is an error.
    #[default]
    Atomic,
    /// Historical behaviour, kept for output parity. The pattern is
    /// written into the stale inactive buffer without copying the
    /// current generation, and the buffers swap even when the stamp is
    /// blocked. An off-grid footprint counts as blocked, not as an error.
    Legacy,
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a [`LifeEngine`](crate::LifeEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of columns. Must be at least 1.
    pub width: u32,
    /// Number of rows. Must be at least 1.
    pub height: u32,
    /// Edge behaviour used by [`step()`](crate::LifeEngine::step). Default: no-wrap.
    pub edge: EdgeBehavior,
    /// Seed for the RNG behind [`randomize()`](crate::LifeEngine::randomize).
    pub seed: u64,
    /// Stamp commit semantics. Default: [`StampCommit::Atomic`].
    pub stamp_commit: StampCommit,
}

impl EngineConfig {
    /// Default RNG seed.
    pub const DEFAULT_SEED: u64 = 0x5eed_11fe;

    /// A `width * height` configuration with default settings.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            edge: EdgeBehavior::default(),
            seed: Self::DEFAULT_SEED,
            stamp_commit: StampCommit::default(),
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.grid().map(|_| ())
    }

    /// Grid geometry described by this configuration.
    pub(crate) fn grid(&self) -> Result<Square8, EngineError> {
        Ok(Square8::new(self.width, self.height)?)
    }
}
