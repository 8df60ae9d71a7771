//! Domain types shared by the decode views and the encoders.

pub mod choice;
pub mod set;
pub mod stats;
pub mod status;
pub mod volatiles;

use serde::{Deserialize, Serialize};

/// One move slot: the move's stable id, remaining PP, and (for the active
/// Pokemon only) the remaining disable duration when this slot is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSlot {
    pub id: &'static str,
    pub pp: u8,
    pub disabled: Option<u8>,
}

/// The logical RNG seed, normalized from whichever physical encoding the
/// compatibility mode uses.
///
/// In classic mode the engine keeps a rotation index alongside the 9 seed
/// bytes; decoding always rotates the bytes back to index zero, so the
/// physical bytes of a battle do not round-trip in that mode, only the
/// logical seed value does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seed {
    /// Four 16-bit words (showdown mode).
    Showdown([u16; 4]),
    /// Nine bytes, logically zero-indexed (classic mode).
    Classic([u8; 9]),
}

impl Seed {
    /// Whether this seed variant belongs to the given compatibility mode.
    pub fn matches(&self, showdown: bool) -> bool {
        matches!(
            (self, showdown),
            (Seed::Showdown(_), true) | (Seed::Classic(_), false)
        )
    }
}
