//! Tessel quickstart: stamp a glider and a Gosper glider gun, then watch.
//!
//! Demonstrates:
//!   1. Building an EngineConfig and LifeEngine
//!   2. Stamping built-in patterns and handling blocked stamps
//!   3. Stepping and rendering the active grid
//!   4. Randomizing from the engine's seed
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use tessel_engine::{EngineConfig, EngineError, LifeEngine, StampOutcome};
use tessel_space::EdgeBehavior;

// ─── Grid parameters ────────────────────────────────────────────

const WIDTH: u32 = 48;
const HEIGHT: u32 = 24;
const GENERATIONS: u64 = 60;

fn main() -> Result<(), EngineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EngineConfig {
        edge: EdgeBehavior::Absorb,
        seed: 7,
        ..EngineConfig::new(WIDTH, HEIGHT)
    };
    let mut engine = LifeEngine::new(config)?;

    // ─── Stamps ─────────────────────────────────────────────────

    report("gun", engine.drop_gosper_glider_gun(15, 6)?);
    report("glider", engine.drop_glider(40, 3)?);
    // Lands on the gun: blocked, nothing changes.
    report("glider", engine.drop_glider(1, 5)?);

    println!("generation {}:\n{}", engine.generation(), engine.get_cells());

    // ─── Stepping ───────────────────────────────────────────────

    engine.run(GENERATIONS);
    println!(
        "generation {} (population {}):\n{}",
        engine.generation(),
        engine.population(),
        engine.get_cells()
    );

    // ─── Randomize on a torus ───────────────────────────────────

    engine.clear();
    engine.set_edge(EdgeBehavior::Wrap);
    engine.randomize();
    let seeded = engine.population();
    engine.run(GENERATIONS);
    println!(
        "random soup: population {seeded} -> {} after {GENERATIONS} generations",
        engine.population()
    );

    Ok(())
}

fn report(what: &str, outcome: StampOutcome) {
    match outcome {
        StampOutcome::Stamped { cells } => println!("{what}: stamped {cells} cells"),
        StampOutcome::Blocked { at, probe } => println!("{what}: blocked at {at} ({probe:?})"),
    }
}
