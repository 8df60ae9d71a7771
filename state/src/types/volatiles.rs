//! Volatile conditions of the active Pokemon.
//!
//! The engine packs these into an 8-byte block: 18 single-bit flags followed
//! by the payload fields (durations, Bide damage, Substitute HP, the
//! transform target, disable bookkeeping and the toxic counter). The bit
//! positions live in the layout descriptor; this module only models the
//! decoded shape.

use mimic_data::Player;

/// Bide: turns left and damage stored so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bide {
    pub duration: u8,
    pub damage: u16,
}

/// Thrash/Petal Dance lock: turns left and the overwritten accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thrashing {
    pub duration: u8,
    pub accuracy: u16,
}

/// Bind/Wrap/Clamp/Fire Spin: attacks left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub duration: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confusion {
    pub duration: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitute {
    pub hp: u8,
}

/// Rage: the overwritten accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rage {
    pub accuracy: u16,
}

/// Toxic counter (nonzero while badly poisoned).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toxic {
    pub stage: u8,
}

/// Transform target, resolved through the target side's order array to a
/// logical slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    pub player: Player,
    pub slot: u8,
}

/// The decoded volatile-condition set. Absent conditions are `None`/`false`;
/// payloads are decoded per condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Volatiles {
    pub bide: Option<Bide>,
    pub thrashing: Option<Thrashing>,
    pub multi_hit: bool,
    pub flinch: bool,
    pub charging: bool,
    pub binding: Option<Binding>,
    pub invulnerable: bool,
    pub confusion: Option<Confusion>,
    pub mist: bool,
    pub focus_energy: bool,
    pub substitute: Option<Substitute>,
    pub recharging: bool,
    pub rage: Option<Rage>,
    pub leech_seed: bool,
    pub toxic: Option<Toxic>,
    pub light_screen: bool,
    pub reflect: bool,
    pub transform: Option<Transform>,
}
