//! Owned logical snapshots of a decoded battle.
//!
//! A snapshot is everything the buffer encodes, lifted out of the packed
//! representation: [`crate::Battle::snapshot`] produces one and
//! [`crate::restore`] consumes one. Restoring a snapshot and decoding the
//! result yields an equal snapshot (classic-mode seed bytes are re-written at
//! rotation index zero, so only the logical seed is preserved there).

use crate::types::{MoveSlot, Seed};
use crate::types::stats::{Boosts, Stats};
use crate::types::status::{Status, StatusData};
use crate::types::volatiles::Volatiles;
use mimic_data::Type;

/// The full logical battle state.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleData {
    pub turn: u16,
    pub last_damage: u16,
    pub prng: Seed,
    /// p1 then p2.
    pub sides: [SideData; 2],
}

/// One side, with its team in logical slot order (slot 1 first; slot 1 is
/// the active Pokemon once the battle has started).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideData {
    pub pokemon: Vec<PokemonData>,
    pub last_used_move: Option<&'static str>,
    pub last_selected_move: Option<&'static str>,
    /// Move slot (1-4) of the last selected move, for Counter bookkeeping.
    pub last_selected_index: Option<u8>,
    pub last_move_counterable: bool,
}

/// One Pokemon: the live layer (what the battle currently sees, which for the
/// active Pokemon may be temporarily modified) plus the stored layer beneath
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonData {
    pub species: &'static str,
    pub types: [Type; 2],
    pub level: u8,
    pub hp: u16,
    pub status: Option<Status>,
    pub status_data: StatusData,
    pub stats: Stats,
    pub boosts: Boosts,
    pub moves: Vec<MoveSlot>,
    pub volatiles: Volatiles,
    pub stored: StoredData,
    /// Logical slot (1-6).
    pub position: u8,
}

/// The stored layer: what persists regardless of which Pokemon is active.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredData {
    pub species: &'static str,
    pub types: [Type; 2],
    pub stats: Stats,
    pub moves: Vec<MoveSlot>,
}
