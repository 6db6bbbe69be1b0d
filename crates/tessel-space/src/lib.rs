//! Grid geometry for Tessel.
//!
//! Defines [`Square8`], the fixed-size rectangular lattice the engine runs
//! on, and [`EdgeBehavior`], which decides how the 8-cell neighbourhood is
//! resolved at the grid edges.
//!
//! # Edge behaviours
//!
//! - [`EdgeBehavior::Absorb`] (`"nowrap"`): out-of-range neighbours are
//!   omitted, so edge cells have 5 neighbours and corners have 3.
//! - [`EdgeBehavior::Wrap`] (`"wrap"`): the grid is a torus and every
//!   cell has 8 neighbour slots.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod square8;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use square8::{resolve_axis, Square8, OFFSETS_8};
