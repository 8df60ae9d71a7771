//! The single-pass log decoder.

use std::collections::VecDeque;

use crate::line::Line;
use crate::roster::Roster;
use crate::DecodeError;
use mimic_data::protocol::{
    ActivateReason, ArgType, BoostReason, CantReason, CureStatusReason, DamageReason, EndReason,
    FailReason, HealReason, ImmuneReason, MoveReason, StartReason, StatusReason,
};
use mimic_data::{Lookup, Player, Type};

/// Decoder for one battle's event-log buffers.
///
/// Holds the name-resolution tables; [`Log::parse`] runs the actual state
/// machine over one buffer.
#[derive(Debug)]
pub struct Log<'r> {
    lookup: &'static Lookup,
    roster: &'r Roster,
}

impl<'r> Log<'r> {
    pub fn new(generation: u8, roster: &'r Roster) -> Result<Self, DecodeError> {
        Ok(Log { lookup: Lookup::get(generation)?, roster })
    }

    /// Decodes a log buffer into a lazy sequence of protocol lines.
    ///
    /// The sequence is finite and non-restartable: it ends at the first `0`
    /// tag byte (or the end of the buffer), and any malformed byte ends it
    /// with an error carrying the offending offset and tag.
    pub fn parse<'d>(&'d self, data: &'d [u8]) -> Lines<'d> {
        Lines {
            lookup: self.lookup,
            roster: self.roster,
            data,
            offset: 0,
            buffered: Vec::new(),
            emit: VecDeque::new(),
            done: false,
        }
    }
}

/// The decoding state machine.
///
/// Lines following a `Move` record are buffered rather than emitted so that a
/// later `LastMiss`/`LastStill` byte can still reach that move line; the
/// buffer flushes when the next `Move` arrives or the stream ends. Everything
/// else streams straight through.
#[derive(Debug)]
pub struct Lines<'d> {
    lookup: &'static Lookup,
    roster: &'d Roster,
    data: &'d [u8],
    offset: usize,
    buffered: Vec<Line>,
    emit: VecDeque<Line>,
    done: bool,
}

impl Iterator for Lines<'_> {
    type Item = Result<Line, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.emit.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }
            if self.offset >= self.data.len() {
                self.done = true;
                self.emit.extend(self.buffered.drain(..));
                continue;
            }

            let offset = self.offset;
            let byte = self.data[offset];
            self.offset += 1;
            let Some(tag) = ArgType::from_byte(byte) else {
                return Some(self.fail(DecodeError::UnknownTag { tag: byte, offset }));
            };

            match tag {
                ArgType::None => {
                    self.done = true;
                    self.emit.extend(self.buffered.drain(..));
                }
                ArgType::LastMiss | ArgType::LastStill => {
                    let Some(first) = self.buffered.first_mut() else {
                        return Some(self.fail(DecodeError::DanglingModifier { tag, offset }));
                    };
                    if tag == ArgType::LastMiss {
                        first.kwargs.miss = true;
                    } else {
                        first.kwargs.still = true;
                    }
                }
                _ => {
                    let line = match self.record(tag) {
                        Ok(line) => line,
                        Err(err) => return Some(self.fail(err)),
                    };
                    if tag == ArgType::Move {
                        self.emit.extend(self.buffered.drain(..));
                        self.buffered.push(line);
                    } else if self.buffered.is_empty() {
                        return Some(Ok(line));
                    } else {
                        self.buffered.push(line);
                    }
                }
            }
        }
    }
}

impl Lines<'_> {
    fn fail(&mut self, err: DecodeError) -> Result<Line, DecodeError> {
        self.done = true;
        self.buffered.clear();
        Err(err)
    }

    fn byte(&mut self, tag: ArgType) -> Result<u8, DecodeError> {
        let byte = *self
            .data
            .get(self.offset)
            .ok_or(DecodeError::Truncated { tag, offset: self.offset })?;
        self.offset += 1;
        Ok(byte)
    }

    fn word(&mut self, tag: ArgType) -> Result<u16, DecodeError> {
        let lo = self.byte(tag)?;
        let hi = self.byte(tag)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Reads and resolves an identity byte: bit 3 picks the player, bits 0-2
    /// the roster slot.
    fn ident(&mut self, tag: ArgType) -> Result<String, DecodeError> {
        let offset = self.offset;
        let byte = self.byte(tag)?;
        self.resolve(byte, tag, offset)
    }

    fn resolve(&self, byte: u8, tag: ArgType, offset: usize) -> Result<String, DecodeError> {
        let player = if byte >> 3 == 0 { Player::P1 } else { Player::P2 };
        let slot = (byte & 0b111) as usize;
        let member = slot
            .checked_sub(1)
            .and_then(|i| self.roster.side(player).team.get(i))
            .ok_or(DecodeError::BadValue { what: "ident", value: byte, tag, offset })?;
        Ok(format!("{player}a: {}", member.name))
    }

    /// Reads a move ordinal and resolves its display name.
    fn move_name(&mut self, tag: ArgType) -> Result<&'static str, DecodeError> {
        let offset = self.offset;
        let byte = self.byte(tag)?;
        let mv = self
            .lookup
            .move_by_num(byte)
            .ok_or(DecodeError::BadValue { what: "move", value: byte, tag, offset })?;
        Ok(mv.name)
    }

    /// Reads the 5-byte hp/maxhp/status group and renders it.
    fn hp_status(&mut self, tag: ArgType) -> Result<String, DecodeError> {
        let hp = self.word(tag)?;
        let max = self.word(tag)?;
        let status = self.byte(tag)?;
        if hp == 0 {
            return Ok("0 fnt".to_string());
        }
        Ok(match proto_status(status) {
            Some(status) => format!("{hp}/{max} {status}"),
            None => format!("{hp}/{max}"),
        })
    }

    /// Reads a status byte that must name an actual status.
    fn status(&mut self, tag: ArgType) -> Result<&'static str, DecodeError> {
        let offset = self.offset;
        let byte = self.byte(tag)?;
        proto_status(byte).ok_or(DecodeError::BadValue { what: "status", value: byte, tag, offset })
    }

    fn reason<T>(
        &mut self,
        tag: ArgType,
        from_byte: impl Fn(u8) -> Option<T>,
    ) -> Result<T, DecodeError> {
        let offset = self.offset;
        let byte = self.byte(tag)?;
        from_byte(byte).ok_or(DecodeError::BadValue { what: "reason", value: byte, tag, offset })
    }

    /// Decodes one tagged record; the tag byte has already been consumed.
    fn record(&mut self, tag: ArgType) -> Result<Line, DecodeError> {
        match tag {
            ArgType::Move => {
                let source = self.ident(tag)?;
                let move_offset = self.offset;
                let m = self.byte(tag)?;
                let target_offset = self.offset;
                let target_byte = self.byte(tag)?;
                let reason = self.reason(tag, MoveReason::from_byte)?;

                let target = if target_byte & 0b111 == 0 {
                    String::new()
                } else {
                    self.resolve(target_byte, tag, target_offset)?
                };
                let name = if reason == MoveReason::Recharge {
                    "recharge".to_string()
                } else {
                    self.lookup
                        .move_by_num(m)
                        .ok_or(DecodeError::BadValue {
                            what: "move",
                            value: m,
                            tag,
                            offset: move_offset,
                        })?
                        .name
                        .to_string()
                };
                let mut line = Line::new(["move", &source, &name, &target]);
                if reason == MoveReason::From {
                    line.kwargs.from = Some(self.move_name(tag)?.to_string());
                }
                Ok(line)
            }
            ArgType::Switch => {
                let ident = self.ident(tag)?;
                let species_offset = self.offset;
                let species = self.byte(tag)?;
                let specie = self.lookup.species_by_num(species).ok_or(DecodeError::BadValue {
                    what: "species",
                    value: species,
                    tag,
                    offset: species_offset,
                })?;
                let level = self.byte(tag)?;
                let hp_status = self.hp_status(tag)?;
                let details = if level == 100 {
                    specie.name.to_string()
                } else {
                    format!("{}, L{level}", specie.name)
                };
                Ok(Line::new(["switch", &ident, &details, &hp_status]))
            }
            ArgType::Cant => {
                let ident = self.ident(tag)?;
                let reason = self.reason(tag, CantReason::from_byte)?;
                if reason == CantReason::Disable {
                    let mv = self.move_name(tag)?;
                    return Ok(Line::new(["cant", &ident, "Disable", mv]));
                }
                let what = match reason {
                    CantReason::Sleep => "slp",
                    CantReason::Freeze => "frz",
                    CantReason::Paralysis => "par",
                    CantReason::Bound => "partiallytrapped",
                    CantReason::Flinch => "flinch",
                    CantReason::Recharge => "recharge",
                    CantReason::PP => "nopp",
                    CantReason::Disable => unreachable!(),
                };
                Ok(Line::new(["cant", &ident, what]))
            }
            ArgType::Faint => self.ident_line(tag, "faint"),
            ArgType::Turn => {
                let turn = self.word(tag)?;
                Ok(Line::new(["turn", &turn.to_string()]))
            }
            ArgType::Win => {
                let player = if self.byte(tag)? == 0 { Player::P1 } else { Player::P2 };
                Ok(Line::new(["win", &self.roster.side(player).name]))
            }
            ArgType::Tie => Ok(Line::new(["tie"])),
            ArgType::Damage => {
                let ident = self.ident(tag)?;
                let hp_status = self.hp_status(tag)?;
                let reason = self.reason(tag, DamageReason::from_byte)?;
                let mut line = Line::new(["-damage", &ident, &hp_status]);
                line.kwargs.from = match reason {
                    DamageReason::None => None,
                    DamageReason::Poison => Some("psn".into()),
                    DamageReason::Burn => Some("brn".into()),
                    DamageReason::Confusion => Some("confusion".into()),
                    DamageReason::LeechSeed => Some("Leech Seed".into()),
                    DamageReason::RecoilOf => Some("Recoil".into()),
                };
                if reason == DamageReason::RecoilOf {
                    line.kwargs.of = Some(self.ident(tag)?);
                }
                Ok(line)
            }
            ArgType::Heal => {
                let ident = self.ident(tag)?;
                let hp_status = self.hp_status(tag)?;
                let reason = self.reason(tag, HealReason::from_byte)?;
                let mut line = Line::new(["-heal", &ident, &hp_status]);
                match reason {
                    HealReason::None => {}
                    HealReason::Drain => {
                        line.kwargs.from = Some("drain".into());
                        line.kwargs.of = Some(self.ident(tag)?);
                    }
                    HealReason::Silent => line.kwargs.silent = true,
                }
                Ok(line)
            }
            ArgType::Status => {
                let ident = self.ident(tag)?;
                let status = self.status(tag)?;
                let reason = self.reason(tag, StatusReason::from_byte)?;
                let mut line = Line::new(["-status", &ident, status]);
                match reason {
                    StatusReason::None => {}
                    StatusReason::Silent => line.kwargs.silent = true,
                    StatusReason::From => {
                        line.kwargs.from = Some(format!("move: {}", self.move_name(tag)?));
                    }
                }
                Ok(line)
            }
            ArgType::CureStatus => {
                let ident = self.ident(tag)?;
                let status = self.status(tag)?;
                let reason = self.reason(tag, CureStatusReason::from_byte)?;
                let mut line = Line::new(["-curestatus", &ident, status]);
                match reason {
                    CureStatusReason::Message => line.kwargs.msg = true,
                    CureStatusReason::Silent => line.kwargs.silent = true,
                }
                Ok(line)
            }
            ArgType::Boost | ArgType::Unboost => {
                let ident = self.ident(tag)?;
                let reason = self.reason(tag, BoostReason::from_byte)?;
                let amount = self.byte(tag)?;
                let stat = match reason {
                    BoostReason::Rage | BoostReason::Attack => "atk",
                    BoostReason::Defense => "def",
                    BoostReason::Speed => "spe",
                    BoostReason::SpecialAttack => "spa",
                    BoostReason::SpecialDefense => "spd",
                    BoostReason::Accuracy => "accuracy",
                    BoostReason::Evasion => "evasion",
                };
                let name = if tag == ArgType::Boost { "-boost" } else { "-unboost" };
                let mut line = Line::new([name, &ident, stat, &amount.to_string()]);
                if tag == ArgType::Boost && reason == BoostReason::Rage {
                    line.kwargs.from = Some("Rage".into());
                }
                Ok(line)
            }
            ArgType::ClearAllBoost => {
                let mut line = Line::new(["-clearallboost"]);
                // gen 1 only clears boosts silently (Haze)
                line.kwargs.silent = true;
                Ok(line)
            }
            ArgType::Fail => {
                let ident = self.ident(tag)?;
                let reason = self.reason(tag, FailReason::from_byte)?;
                let mut line = match reason {
                    FailReason::None => Line::new(["-fail", &ident]),
                    FailReason::Substitute | FailReason::Weak => {
                        Line::new(["-fail", &ident, "move: Substitute"])
                    }
                    FailReason::Sleep => Line::new(["-fail", &ident, "slp"]),
                    FailReason::Poison => Line::new(["-fail", &ident, "psn"]),
                    FailReason::Burn => Line::new(["-fail", &ident, "brn"]),
                    FailReason::Freeze => Line::new(["-fail", &ident, "frz"]),
                    FailReason::Paralysis => Line::new(["-fail", &ident, "par"]),
                    FailReason::Toxic => Line::new(["-fail", &ident, "tox"]),
                };
                if reason == FailReason::Weak {
                    line.kwargs.weak = true;
                }
                Ok(line)
            }
            ArgType::Miss => self.ident_line(tag, "-miss"),
            ArgType::HitCount => {
                let ident = self.ident(tag)?;
                let count = self.byte(tag)?;
                Ok(Line::new(["-hitcount", &ident, &count.to_string()]))
            }
            ArgType::Prepare => {
                let ident = self.ident(tag)?;
                let mv = self.move_name(tag)?;
                Ok(Line::new(["-prepare", &ident, mv]))
            }
            ArgType::MustRecharge => self.ident_line(tag, "-mustrecharge"),
            ArgType::Activate => {
                let ident = self.ident(tag)?;
                let reason = self.reason(tag, ActivateReason::from_byte)?;
                let mut line = match reason {
                    ActivateReason::Bide => Line::new(["-activate", &ident, "Bide"]),
                    ActivateReason::Confusion => Line::new(["-activate", &ident, "confusion"]),
                    ActivateReason::Haze => Line::new(["-activate", &ident, "move: Haze"]),
                    // Mist blocks rather than activates
                    ActivateReason::Mist => Line::new(["-block", &ident, "move: Mist"]),
                    ActivateReason::Struggle => Line::new(["-activate", &ident, "move: Struggle"]),
                    ActivateReason::Substitute => Line::new(["-activate", &ident, "Substitute"]),
                    ActivateReason::Splash => Line::new(["-activate", "", "move: Splash"]),
                };
                if reason == ActivateReason::Substitute {
                    line.kwargs.damage = true;
                }
                Ok(line)
            }
            ArgType::FieldActivate => Ok(Line::new(["-fieldactivate", "move: Pay Day"])),
            ArgType::Start => {
                let ident = self.ident(tag)?;
                let reason = self.reason(tag, StartReason::from_byte)?;
                match reason {
                    StartReason::TypeChange => {
                        let types_offset = self.offset;
                        let byte = self.byte(tag)?;
                        let types =
                            Type::unpack_pair(byte).ok_or(DecodeError::BadValue {
                                what: "types",
                                value: byte,
                                tag,
                                offset: types_offset,
                            })?;
                        let shown = if types[0] == types[1] {
                            types[0].to_string()
                        } else {
                            format!("{}/{}", types[0], types[1])
                        };
                        let mut line = Line::new(["-start", &ident, "typechange", &shown]);
                        line.kwargs.from = Some("move: Conversion".into());
                        line.kwargs.of = Some(self.ident(tag)?);
                        Ok(line)
                    }
                    StartReason::Disable | StartReason::Mimic => {
                        let mv = self.move_name(tag)?;
                        let effect =
                            if reason == StartReason::Disable { "Disable" } else { "Mimic" };
                        Ok(Line::new(["-start", &ident, effect, mv]))
                    }
                    _ => {
                        let effect = match reason {
                            StartReason::Bide => "Bide",
                            StartReason::Confusion | StartReason::ConfusionSilent => "confusion",
                            StartReason::FocusEnergy => "move: Focus Energy",
                            StartReason::LeechSeed => "move: Leech Seed",
                            StartReason::LightScreen => "Light Screen",
                            StartReason::Mist => "Mist",
                            StartReason::Reflect => "Reflect",
                            StartReason::Substitute => "Substitute",
                            _ => unreachable!(),
                        };
                        let mut line = Line::new(["-start", &ident, effect]);
                        line.kwargs.silent = reason == StartReason::ConfusionSilent;
                        Ok(line)
                    }
                }
            }
            ArgType::End => {
                let ident = self.ident(tag)?;
                let reason = self.reason(tag, EndReason::from_byte)?;
                let effect = match reason {
                    EndReason::Disable | EndReason::DisableSilent => "Disable",
                    EndReason::Confusion | EndReason::ConfusionSilent => "confusion",
                    EndReason::Bide | EndReason::BideSilent => "move: Bide",
                    EndReason::Substitute => "Substitute",
                    EndReason::MistSilent => "Mist",
                    EndReason::FocusEnergySilent => "move: Focus Energy",
                    EndReason::LeechSeedSilent => "move: Leech Seed",
                    EndReason::ToxicSilent => "Toxic counter",
                    EndReason::LightScreenSilent => "Light Screen",
                    EndReason::ReflectSilent => "Reflect",
                };
                let mut line = Line::new(["-end", &ident, effect]);
                line.kwargs.silent = reason.is_silent();
                Ok(line)
            }
            ArgType::OHKO => Ok(Line::new(["-ohko"])),
            ArgType::Crit => self.ident_line(tag, "-crit"),
            ArgType::SuperEffective => self.ident_line(tag, "-supereffective"),
            ArgType::Resisted => self.ident_line(tag, "-resisted"),
            ArgType::Immune => {
                let ident = self.ident(tag)?;
                let reason = self.reason(tag, ImmuneReason::from_byte)?;
                let mut line = Line::new(["-immune", &ident]);
                line.kwargs.ohko = reason == ImmuneReason::OHKO;
                Ok(line)
            }
            ArgType::Transform => {
                let source = self.ident(tag)?;
                let target = self.ident(tag)?;
                Ok(Line::new(["-transform", &source, &target]))
            }
            // handled by the state machine before dispatch
            ArgType::None | ArgType::LastMiss | ArgType::LastStill => unreachable!(),
        }
    }

    fn ident_line(&mut self, tag: ArgType, name: &str) -> Result<Line, DecodeError> {
        let ident = self.ident(tag)?;
        Ok(Line::new([name, &ident]))
    }
}

/// Status rendering for log records. Unlike the battle buffer's status byte,
/// the log repurposes bit 7 as an explicit toxic marker.
fn proto_status(byte: u8) -> Option<&'static str> {
    if byte & 0b111 != 0 {
        return Some("slp");
    }
    if byte >> 7 & 1 != 0 {
        return Some("tox");
    }
    if byte >> 6 & 1 != 0 {
        return Some("par");
    }
    if byte >> 5 & 1 != 0 {
        return Some("frz");
    }
    if byte >> 4 & 1 != 0 {
        return Some("brn");
    }
    if byte >> 3 & 1 != 0 {
        return Some("psn");
    }
    None
}
