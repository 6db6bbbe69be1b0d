//! Benchmark profiles for the Tessel Life engine.
//!
//! - [`reference_profile`]: 256x256 absorbing grid (64K cells)
//! - [`stress_profile`]: 1024x1024 toroidal grid (~1M cells)
//! - [`seeded_engine`]: an engine from a profile, randomized from its seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_engine::{EngineConfig, EngineError, LifeEngine};
use tessel_space::EdgeBehavior;

/// Build the reference benchmark profile: 256x256, absorbing edges.
pub fn reference_profile(seed: u64) -> EngineConfig {
    EngineConfig {
        edge: EdgeBehavior::Absorb,
        seed,
        ..EngineConfig::new(256, 256)
    }
}

/// Build the stress benchmark profile: 1024x1024, wrapping edges.
///
/// Wrap is the slower neighbour path, so this is the worst case per cell.
pub fn stress_profile(seed: u64) -> EngineConfig {
    EngineConfig {
        edge: EdgeBehavior::Wrap,
        seed,
        ..EngineConfig::new(1024, 1024)
    }
}

/// Build an engine from `config` and fill it with random soup.
pub fn seeded_engine(config: EngineConfig) -> Result<LifeEngine, EngineError> {
    let mut engine = LifeEngine::new(config)?;
    engine.randomize();
    Ok(engine)
}
