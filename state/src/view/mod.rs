//! Read-only views over a battle buffer.
//!
//! Views are disposable projections: they borrow the buffer, never own it,
//! and every accessor is a pure read at a layout-defined offset. The buffer
//! length is validated once when the [`Battle`] view is constructed, so the
//! accessors themselves are infallible.

mod battle;
mod pokemon;
mod side;

pub use battle::Battle;
pub use pokemon::{Pokemon, Stored};
pub use side::Side;

use crate::types::stats::Stats;
use mimic_data::Layout;

pub(crate) fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

pub(crate) fn read_stats(data: &[u8], offset: usize, layout: &Layout) -> Stats {
    Stats {
        hp: read_u16(data, offset + layout.stats.hp),
        atk: read_u16(data, offset + layout.stats.atk),
        def: read_u16(data, offset + layout.stats.def),
        spe: read_u16(data, offset + layout.stats.spe),
        spc: read_u16(data, offset + layout.stats.spc),
    }
}

/// Extracts `width` bits at `bit` from a packed little-endian block.
pub(crate) fn read_bits(block: u64, bit: usize, width: u32) -> u64 {
    (block >> bit) & (u64::MAX >> (64 - width))
}

pub(crate) fn read_block(data: &[u8], offset: usize, len: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes[..len].copy_from_slice(&data[offset..offset + len]);
    u64::from_le_bytes(bytes)
}
