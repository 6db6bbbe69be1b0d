//! Double-buffered ping-pong cell storage.
//!
//! [`PingPongBuffers`] keeps two equally-sized [`CellBuffer`]s that
//! alternate between "published" (what readers see) and "staging" (where
//! the next generation is written). [`PingPongBuffers::publish`] swaps
//! the roles; nothing is reallocated.
//!
//! The lifecycle per generation is:
//! 1. `stage()`: borrow the published buffer read-only and the staging
//!    buffer mutably
//! 2. compute the next generation into the staging buffer
//! 3. `publish()`: swap roles

use tessel_space::Square8;

use crate::buffer::CellBuffer;
use crate::read::CellView;

/// Two cell buffers with a ping-pong swap.
///
/// # Buffer layout
///
/// ```text
/// buffer_a: CellBuffer  ←─── published (index 0) / staging
/// buffer_b: CellBuffer  ←─── published (index 1) / staging
/// ```
///
/// Staging contents are whatever was last published there; callers that
/// only touch part of the staging buffer see stale cells elsewhere.
#[derive(Clone, Debug)]
pub struct PingPongBuffers {
    buffer_a: CellBuffer,
    buffer_b: CellBuffer,
    /// Which buffer is published (false = A published, true = B published).
    b_is_published: bool,
}

impl PingPongBuffers {
    /// Allocate both buffers, all dead, with buffer A published.
    pub fn new(grid: Square8) -> Self {
        Self {
            buffer_a: CellBuffer::new(grid),
            buffer_b: CellBuffer::new(grid),
            b_is_published: false,
        }
    }

    /// Geometry shared by both buffers.
    pub fn grid(&self) -> Square8 {
        self.buffer_a.grid()
    }

    /// Index of the published buffer: `0` for A, `1` for B.
    pub fn published_index(&self) -> usize {
        usize::from(self.b_is_published)
    }

    /// Read-only view of the published buffer.
    pub fn published(&self) -> CellView<'_> {
        if self.b_is_published {
            self.buffer_b.view()
        } else {
            self.buffer_a.view()
        }
    }

    /// Mutable access to the published buffer, for in-place edits that do
    /// not produce a new generation (clear, randomize, single-cell edits).
    pub fn published_mut(&mut self) -> &mut CellBuffer {
        if self.b_is_published {
            &mut self.buffer_b
        } else {
            &mut self.buffer_a
        }
    }

    /// Read-only view of the staging buffer.
    pub fn staging(&self) -> CellView<'_> {
        if self.b_is_published {
            self.buffer_a.view()
        } else {
            self.buffer_b.view()
        }
    }

    /// Borrow the published buffer for reading and the staging buffer for
    /// writing at the same time.
    pub fn stage(&mut self) -> (CellView<'_>, &mut CellBuffer) {
        if self.b_is_published {
            (self.buffer_b.view(), &mut self.buffer_a)
        } else {
            (self.buffer_a.view(), &mut self.buffer_b)
        }
    }

    /// Swap roles: the staging buffer becomes published.
    pub fn publish(&mut self) {
        self.b_is_published = !self.b_is_published;
    }
}
