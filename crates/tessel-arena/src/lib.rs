//! Double-buffered cell storage for Tessel.
//!
//! # Architecture
//!
//! ```text
//! PingPongBuffers (orchestrator)
//! ├── CellBuffer × 2 (alternating published/staging)
//! │   └── Vec<CellState> (row-major, width * height)
//! └── b_is_published: bool (which buffer readers see)
//! ```
//!
//! Both buffers are allocated once at construction and reused for the
//! lifetime of the arena. A generation is computed by reading the
//! published buffer through a [`CellView`] and writing the staging
//! buffer, then [`PingPongBuffers::publish`] swaps their roles.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod hash;
pub mod pingpong;
pub mod read;

pub use buffer::CellBuffer;
pub use hash::view_hash;
pub use pingpong::PingPongBuffers;
pub use read::CellView;
