//! Generation schemas and lookup tables for the pkmn engine's packed binary formats.
//!
//! The battle engine is a compiled component with an externally-fixed memory
//! layout. This crate carries everything needed to stay byte-compatible with
//! it without re-implementing any of its rules:
//!
//! - [`Layout`] - per-generation struct sizes and field offsets, versioned as
//!   data reconstructed from the engine's own struct declarations
//! - [`Lookup`] - per-generation bidirectional maps between stable string
//!   identifiers and the small integer ordinals the engine uses on the wire
//! - [`protocol`] - ordinal tables for the engine's binary event log
//! - [`dex`] - the embedded generation data tables backing [`Lookup`]
//!
//! Higher layers (`mimic-state`, `mimic-log`) interpret buffers through these
//! tables; nothing here reads or writes a buffer itself.

use thiserror::Error;

pub mod dex;
pub mod layout;
pub mod lookup;
pub mod protocol;
mod types;

pub use layout::{Layout, layout};
pub use lookup::Lookup;
pub use types::Type;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unsupported generation {0}")]
    UnsupportedGen(u8),
}

/// Player in a battle. The engine only knows two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(Player::P1),
            "p2" => Some(Player::P2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    /// Side index within the battle buffer (p1 = 0, p2 = 1).
    pub fn index(&self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }

    pub fn foe(&self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
