//! Decoder for the pkmn engine's binary event log.
//!
//! When tracing is enabled the engine appends variable-length tagged records
//! to a log buffer during each update; this crate turns one such buffer into
//! a lazy sequence of Pokemon Showdown protocol lines. Decoding is a strict
//! single forward pass: two reserved tag bytes retroactively modify the most
//! recent move line rather than starting a record of their own, so bytes can
//! never be interpreted out of stream order.
//!
//! ```
//! use mimic_log::{Log, Roster, SideRoster};
//! use mimic_state::PokemonSet;
//!
//! let roster = Roster::new(
//!     SideRoster::new("Player A", &[PokemonSet::new("Tauros", &[])]).unwrap(),
//!     SideRoster::new("Player B", &[PokemonSet::new("Chansey", &[])]).unwrap(),
//! );
//! let log = Log::new(1, &roster).unwrap();
//! // tag 6 = Faint, ident 0b1001 = p2 slot 1, tag 0 = end of log
//! let lines: Result<Vec<_>, _> = log.parse(&[6, 0b1001, 0]).collect();
//! assert_eq!(lines.unwrap()[0].to_string(), "|faint|p2a: Chansey");
//! ```

use thiserror::Error;

mod decode;
mod line;
mod roster;

pub use decode::{Lines, Log};
pub use line::{KwArgs, Line};
pub use roster::{Member, Roster, SideRoster};

use mimic_data::protocol::ArgType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown protocol tag {tag:#04x} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },

    #[error("truncated {tag:?} record at offset {offset}")]
    Truncated { tag: ArgType, offset: usize },

    #[error("{tag:?} modifier at offset {offset} with no buffered line to modify")]
    DanglingModifier { tag: ArgType, offset: usize },

    #[error("invalid {what} byte {value:#04x} in {tag:?} record at offset {offset}")]
    BadValue { what: &'static str, value: u8, tag: ArgType, offset: usize },

    #[error("unknown species \"{0}\" in roster")]
    UnknownSpecies(String),

    #[error(transparent)]
    Schema(#[from] mimic_data::SchemaError),
}
