//! Non-volatile status conditions and their packed byte encoding.
//!
//! The status byte packs sleep turns remaining into the low 3 bits (0 = not
//! asleep), single-bit flags for poison/burn/freeze/paralysis in bits 3-6,
//! and a self-inflicted-sleep marker in bit 7. Toxic is not a distinct bit:
//! the active-volatiles toxic counter upgrades a poison display when nonzero.

use crate::StateError;

const PSN: u8 = 1 << 3;
const BRN: u8 = 1 << 4;
const FRZ: u8 = 1 << 5;
const PAR: u8 = 1 << 6;
const SELF: u8 = 1 << 7;
const SLP: u8 = 0b111;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Sleep,
    Poison,
    Burn,
    Freeze,
    Paralysis,
    /// Badly poisoned; only observable while the toxic counter is running.
    Toxic,
}

impl Status {
    /// Protocol abbreviation ("slp", "psn", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Sleep => "slp",
            Status::Poison => "psn",
            Status::Burn => "brn",
            Status::Freeze => "frz",
            Status::Paralysis => "par",
            Status::Toxic => "tox",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The sub-fields packed alongside the status itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusData {
    /// Sleep turns remaining (0 = not asleep).
    pub sleep: u8,
    /// Whether the sleep was self-inflicted (Rest).
    pub self_inflicted: bool,
    /// Toxic counter from the active volatiles (0 = plain poison).
    pub toxic: u8,
}

/// Decodes the status byte. `toxic` is the active toxic counter; it upgrades
/// poison to toxic when nonzero.
pub fn decode(byte: u8, toxic: u8) -> Option<Status> {
    if byte & SLP != 0 {
        return Some(Status::Sleep);
    }
    if byte & PSN != 0 {
        return Some(if toxic > 0 { Status::Toxic } else { Status::Poison });
    }
    if byte & BRN != 0 {
        return Some(Status::Burn);
    }
    if byte & FRZ != 0 {
        return Some(Status::Freeze);
    }
    if byte & PAR != 0 {
        return Some(Status::Paralysis);
    }
    None
}

/// Decodes the packed sub-fields of the status byte.
pub fn decode_data(byte: u8, toxic: u8) -> StatusData {
    StatusData {
        sleep: byte & SLP,
        self_inflicted: byte & SELF != 0,
        toxic,
    }
}

/// Encodes a status plus its sub-fields back into the packed byte.
///
/// Rejects logically inconsistent inputs outright: sleep bookkeeping without
/// a sleep status (and vice versa) cannot be represented in the byte and
/// would silently decode to something else.
pub fn encode(status: Option<Status>, data: &StatusData) -> Result<u8, StateError> {
    if data.sleep > 0 && status != Some(Status::Sleep) {
        return Err(StateError::Contract(format!(
            "{} sleep turns remaining but status is {status:?}",
            data.sleep
        )));
    }
    if data.self_inflicted && status != Some(Status::Sleep) {
        return Err(StateError::Contract("self-inflicted sleep flag without sleep".into()));
    }
    match status {
        None => Ok(0),
        Some(Status::Sleep) => {
            if data.sleep == 0 || data.sleep > 7 {
                return Err(StateError::Contract(format!(
                    "asleep with {} turns remaining",
                    data.sleep
                )));
            }
            Ok(data.sleep | if data.self_inflicted { SELF } else { 0 })
        }
        Some(Status::Poison) | Some(Status::Toxic) => Ok(PSN),
        Some(Status::Burn) => Ok(BRN),
        Some(Status::Freeze) => Ok(FRZ),
        Some(Status::Paralysis) => Ok(PAR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        let cases = [
            (None, StatusData::default()),
            (Some(Status::Poison), StatusData::default()),
            (Some(Status::Burn), StatusData::default()),
            (Some(Status::Freeze), StatusData::default()),
            (Some(Status::Paralysis), StatusData::default()),
            (Some(Status::Sleep), StatusData { sleep: 3, ..Default::default() }),
            (Some(Status::Sleep), StatusData { sleep: 7, self_inflicted: true, toxic: 0 }),
        ];
        for (status, data) in cases {
            let byte = encode(status, &data).unwrap();
            assert_eq!(decode(byte, data.toxic), status);
            assert_eq!(decode_data(byte, data.toxic), data);
        }
    }

    #[test]
    fn test_toxic_upgrades_poison() {
        let byte = encode(Some(Status::Poison), &StatusData::default()).unwrap();
        assert_eq!(decode(byte, 0), Some(Status::Poison));
        assert_eq!(decode(byte, 2), Some(Status::Toxic));
    }

    #[test]
    fn test_sleep_turns_without_sleep_status() {
        let data = StatusData { sleep: 2, ..Default::default() };
        assert!(matches!(
            encode(Some(Status::Burn), &data),
            Err(StateError::Contract(_))
        ));
        assert!(matches!(encode(None, &data), Err(StateError::Contract(_))));
    }

    #[test]
    fn test_sleep_without_turns() {
        assert!(encode(Some(Status::Sleep), &StatusData::default()).is_err());
    }
}
