//! Hashing of grid state for determinism checks.
//!
//! Uses FNV-1a: fast and deterministic across platforms, not
//! cryptographically secure.

use crate::read::CellView;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the dimensions and every cell of `view`.
///
/// Dimensions are folded in first so a 2x3 and a 3x2 grid with the same
/// flat contents hash differently.
pub fn view_hash(view: &CellView<'_>) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, view.width());
    hash = fnv1a_u32(hash, view.height());
    for cell in view.as_slice() {
        hash = fnv1a_byte(hash, cell.as_bit());
    }
    hash
}
