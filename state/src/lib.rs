//! Offset-accurate decode and encode of the pkmn engine's packed battle buffer.
//!
//! The engine owns the battle's state transitions; this crate only mirrors its
//! exact in-memory representation so a host process can read and write that
//! state without re-implementing the simulation. It sits below any tracking or
//! display layer:
//!
//! ```text
//! mimic-data (schemas + lookup tables)
//!        │
//!        ▼
//! mimic-state (battle buffer codec) ← THIS CRATE
//!        │
//!        └─> mimic-log (binary event log decoder)
//! ```
//!
//! # Main Types
//!
//! - [`Battle`], [`Side`], [`Pokemon`] - read-only views over a caller-owned
//!   buffer; cheap projections, never owners
//! - [`BattleData`] - an owned logical snapshot of a decoded battle
//! - [`create`] / [`restore`] - buffer encoders (fresh battle from team sets,
//!   or the structural inverse of decoding)
//! - [`Choice`] / [`Outcome`] - the engine's single-byte request/result codecs
//!
//! Reads never mutate the buffer. Encoding allocates a new buffer; callers are
//! responsible for not mutating a buffer while views into it are live (the
//! borrow checker enforces this within one process).
//!
//! # Example
//!
//! ```
//! use mimic_state::{Battle, Config, CreateOptions, PokemonSet, Seed, create};
//!
//! let config = Config { showdown: true, ..Config::default() };
//! let options = CreateOptions {
//!     p1: vec![PokemonSet::new("Tauros", &["Body Slam", "Earthquake"])],
//!     p2: vec![PokemonSet::new("Snorlax", &["Rest"])],
//!     seed: Seed::Showdown([1, 2, 3, 4]),
//!     config,
//! };
//! let buf = create(1, &options).unwrap();
//! let battle = Battle::new(1, &buf, &config).unwrap();
//! assert_eq!(battle.turn(), 0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod encode;
pub mod snapshot;
mod tests;
pub mod types;
pub mod view;

pub use encode::{CreateOptions, create, restore};
pub use snapshot::{BattleData, PokemonData, SideData, StoredData};
pub use types::choice::{Choice, ChoiceKind, Outcome, OutcomeKind};
pub use types::set::{Dvs, PokemonSet, StatExp};
pub use types::stats::{Boosts, Stats};
pub use types::status::{Status, StatusData};
pub use types::volatiles::Volatiles;
pub use types::{MoveSlot, Seed};
pub use view::{Battle, Pokemon, Side, Stored};

// Re-export the shared player identifier
pub use mimic_data::Player;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error(transparent)]
    Schema(#[from] mimic_data::SchemaError),

    #[error("buffer is {len} bytes but the gen {generation} battle layout is {expected}")]
    BufferSize { generation: u8, len: usize, expected: usize },

    #[error("inconsistent battle state: {0}")]
    Contract(String),

    #[error("unknown {kind} \"{id}\"")]
    UnknownId { kind: &'static str, id: String },

    #[error("invalid {what} ordinal {value} in battle buffer")]
    Corrupt { what: &'static str, value: u8 },
}

/// Compatibility configuration recognized by the codec.
///
/// `showdown` selects between the two incompatible physical sub-formats for
/// the RNG state and the last-move header region. `trace` is owned by the
/// harness driving the engine: it gates whether an event-log buffer exists at
/// all and never changes how this crate reads or writes battle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub showdown: bool,
    #[serde(default)]
    pub trace: bool,
}
