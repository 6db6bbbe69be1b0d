//! Core types for the Tessel cellular automaton workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate: cell states, the tri-state
//! [`Probe`] result used when checking stamp targets, grid coordinates,
//! and the [`Generation`] counter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod id;

pub use cell::{CellState, Probe};
pub use id::{Coord, Generation};
