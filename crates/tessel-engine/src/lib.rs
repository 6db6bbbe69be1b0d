//! Game of Life grid engine for Tessel.
//!
//! [`LifeEngine`] owns a fixed-size double-buffered grid and exposes the
//! operations a rendering or input layer drives it with:
//!
//! - [`get_cells`](LifeEngine::get_cells): read-only view of the active buffer
//! - [`clear`](LifeEngine::clear) / [`randomize`](LifeEngine::randomize)
//! - [`step`](LifeEngine::step): one B3/S23 generation under the configured
//!   [`EdgeBehavior`](tessel_space::EdgeBehavior)
//! - [`drop_glider`](LifeEngine::drop_glider) /
//!   [`drop_gosper_glider_gun`](LifeEngine::drop_gosper_glider_gun): stamp a
//!   pattern when all of its target cells are dead
//!
//! # Stamp semantics
//!
//! By default a stamp is atomic: it either publishes the current generation
//! plus the pattern, or changes nothing. [`StampCommit::Legacy`] keeps the
//! historical swap-even-when-blocked behaviour for output parity.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod life;
pub mod pattern;
pub mod rule;
pub mod stamp;
pub mod tick;

pub use config::{EngineConfig, StampCommit};
pub use error::{EngineError, ErrorKind};
pub use life::LifeEngine;
pub use pattern::{Pattern, PatternError, PatternLibrary};
pub use stamp::StampOutcome;
