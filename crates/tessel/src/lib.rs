//! Tessel: a Conway's Game of Life grid engine.
//!
//! This is the facade crate that re-exports the public API from all
//! Tessel sub-crates. For most users, adding `tessel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! let config = EngineConfig {
//!     edge: EdgeBehavior::Wrap,
//!     ..EngineConfig::new(16, 16)
//! };
//! let mut engine = LifeEngine::new(config).unwrap();
//!
//! let outcome = engine.drop_glider(4, 4).unwrap();
//! assert!(outcome.is_stamped());
//!
//! engine.run(4);
//! assert_eq!(engine.population(), 5);
//! assert_eq!(engine.generation(), Generation(4));
//! assert_eq!(engine.probe(5, 4), Probe::Alive);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | Cell states, probes, coordinates, generations |
//! | [`space`] | `tessel-space` | The 8-neighbour grid and edge behaviour |
//! | [`arena`] | `tessel-arena` | Cell buffers, read views, ping-pong pair |
//! | [`engine`] | `tessel-engine` | `LifeEngine`, configuration, patterns |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell states, probe results, and IDs (`tessel-core`).
pub use tessel_core as types;

/// Grid geometry and edge behaviour (`tessel-space`).
///
/// [`space::Square8`] resolves neighbours under an
/// [`space::EdgeBehavior`].
pub use tessel_space as space;

/// Cell storage (`tessel-arena`).
///
/// [`arena::PingPongBuffers`] holds the two generations; readers see the
/// active one through [`arena::CellView`].
pub use tessel_arena as arena;

/// The Life engine (`tessel-engine`).
///
/// [`engine::LifeEngine`] owns the grid, steps it, and stamps
/// [`engine::Pattern`]s.
pub use tessel_engine as engine;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessel_core::{CellState, Coord, Generation, Probe};

    // Space
    pub use tessel_space::{EdgeBehavior, SpaceError};

    // Arena
    pub use tessel_arena::CellView;

    // Engine
    pub use tessel_engine::{
        EngineConfig, EngineError, ErrorKind, LifeEngine, Pattern, PatternLibrary, StampCommit,
        StampOutcome,
    };
}
