//! Ordinal tables for the engine's binary event log.
//!
//! The engine writes one tag byte per record followed by a tag-defined number
//! of argument bytes; several tags carry an extra "reason" byte drawn from a
//! per-tag table. The ordinals below are the engine's own, reproduced as
//! data. `LastStill` and `LastMiss` are not records: they retroactively flag
//! the move line that opened the current buffer group.

/// Event-record tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArgType {
    None = 0,
    LastStill = 1,
    LastMiss = 2,
    Move = 3,
    Switch = 4,
    Cant = 5,
    Faint = 6,
    Turn = 7,
    Win = 8,
    Tie = 9,
    Damage = 10,
    Heal = 11,
    Status = 12,
    CureStatus = 13,
    Boost = 14,
    Unboost = 15,
    ClearAllBoost = 16,
    Fail = 17,
    Miss = 18,
    HitCount = 19,
    Prepare = 20,
    MustRecharge = 21,
    Activate = 22,
    FieldActivate = 23,
    Start = 24,
    End = 25,
    OHKO = 26,
    Crit = 27,
    SuperEffective = 28,
    Resisted = 29,
    Immune = 30,
    Transform = 31,
}

macro_rules! ordinal_table {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Decodes a wire byte; ordinals are contiguous from zero.
            pub fn from_byte(byte: u8) -> Option<Self> {
                Self::ALL.get(byte as usize).copied()
            }
        }
    };
}

ordinal_table!(ArgType {
    None, LastStill, LastMiss, Move, Switch, Cant, Faint, Turn, Win, Tie,
    Damage, Heal, Status, CureStatus, Boost, Unboost, ClearAllBoost, Fail,
    Miss, HitCount, Prepare, MustRecharge, Activate, FieldActivate, Start,
    End, OHKO, Crit, SuperEffective, Resisted, Immune, Transform,
});

/// Reason byte of a `Move` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MoveReason {
    None = 0,
    Recharge = 1,
    From = 2,
}

ordinal_table!(MoveReason { None, Recharge, From });

/// Reason byte of a `Cant` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CantReason {
    Sleep = 0,
    Freeze = 1,
    Paralysis = 2,
    Bound = 3,
    Flinch = 4,
    Disable = 5,
    Recharge = 6,
    PP = 7,
}

ordinal_table!(CantReason { Sleep, Freeze, Paralysis, Bound, Flinch, Disable, Recharge, PP });

/// Reason byte of a `Damage` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DamageReason {
    None = 0,
    Poison = 1,
    Burn = 2,
    Confusion = 3,
    LeechSeed = 4,
    RecoilOf = 5,
}

ordinal_table!(DamageReason { None, Poison, Burn, Confusion, LeechSeed, RecoilOf });

/// Reason byte of a `Heal` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HealReason {
    None = 0,
    Drain = 1,
    Silent = 2,
}

ordinal_table!(HealReason { None, Drain, Silent });

/// Reason byte of a `Status` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StatusReason {
    None = 0,
    Silent = 1,
    From = 2,
}

ordinal_table!(StatusReason { None, Silent, From });

/// Reason byte of a `CureStatus` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CureStatusReason {
    Message = 0,
    Silent = 1,
}

ordinal_table!(CureStatusReason { Message, Silent });

/// Stat byte of a `Boost`/`Unboost` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BoostReason {
    Rage = 0,
    Attack = 1,
    Defense = 2,
    Speed = 3,
    SpecialAttack = 4,
    SpecialDefense = 5,
    Accuracy = 6,
    Evasion = 7,
}

ordinal_table!(BoostReason {
    Rage, Attack, Defense, Speed, SpecialAttack, SpecialDefense, Accuracy, Evasion,
});

/// Reason byte of a `Fail` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FailReason {
    None = 0,
    Sleep = 1,
    Poison = 2,
    Burn = 3,
    Freeze = 4,
    Paralysis = 5,
    Toxic = 6,
    Substitute = 7,
    Weak = 8,
}

ordinal_table!(FailReason { None, Sleep, Poison, Burn, Freeze, Paralysis, Toxic, Substitute, Weak });

/// Reason byte of an `Activate` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ActivateReason {
    Bide = 0,
    Confusion = 1,
    Haze = 2,
    Mist = 3,
    Struggle = 4,
    Substitute = 5,
    Splash = 6,
}

ordinal_table!(ActivateReason { Bide, Confusion, Haze, Mist, Struggle, Substitute, Splash });

/// Reason byte of an `Immune` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ImmuneReason {
    None = 0,
    OHKO = 1,
}

ordinal_table!(ImmuneReason { None, OHKO });

/// Reason byte of a `Start` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StartReason {
    Bide = 0,
    Confusion = 1,
    ConfusionSilent = 2,
    FocusEnergy = 3,
    LeechSeed = 4,
    LightScreen = 5,
    Mist = 6,
    Reflect = 7,
    Substitute = 8,
    TypeChange = 9,
    Disable = 10,
    Mimic = 11,
}

ordinal_table!(StartReason {
    Bide, Confusion, ConfusionSilent, FocusEnergy, LeechSeed, LightScreen,
    Mist, Reflect, Substitute, TypeChange, Disable, Mimic,
});

/// Reason byte of an `End` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EndReason {
    Disable = 0,
    Confusion = 1,
    Bide = 2,
    Substitute = 3,
    DisableSilent = 4,
    ConfusionSilent = 5,
    MistSilent = 6,
    FocusEnergySilent = 7,
    LeechSeedSilent = 8,
    ToxicSilent = 9,
    LightScreenSilent = 10,
    ReflectSilent = 11,
    BideSilent = 12,
}

ordinal_table!(EndReason {
    Disable, Confusion, Bide, Substitute, DisableSilent, ConfusionSilent,
    MistSilent, FocusEnergySilent, LeechSeedSilent, ToxicSilent,
    LightScreenSilent, ReflectSilent, BideSilent,
});

impl EndReason {
    /// Silent variants add `[silent]` to the decoded line.
    pub fn is_silent(&self) -> bool {
        *self as u8 >= EndReason::DisableSilent as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_type_from_byte() {
        assert_eq!(ArgType::from_byte(0), Some(ArgType::None));
        assert_eq!(ArgType::from_byte(3), Some(ArgType::Move));
        assert_eq!(ArgType::from_byte(31), Some(ArgType::Transform));
        assert_eq!(ArgType::from_byte(32), None);
        assert_eq!(ArgType::from_byte(0xFF), None);
    }

    #[test]
    fn test_ordinals_are_contiguous() {
        for (i, tag) in ArgType::ALL.iter().enumerate() {
            assert_eq!(*tag as usize, i);
        }
        for (i, reason) in EndReason::ALL.iter().enumerate() {
            assert_eq!(*reason as usize, i);
        }
    }

    #[test]
    fn test_end_reason_silence() {
        assert!(!EndReason::Bide.is_silent());
        assert!(EndReason::ToxicSilent.is_silent());
    }
}
