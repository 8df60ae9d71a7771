//! Single-byte codecs for the engine's choice/result boundary.
//!
//! The engine's `update` call takes one choice byte per player and returns
//! one result byte; these are the only values that cross that boundary
//! besides the battle buffer itself.

/// What kind of action a choice requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChoiceKind {
    Pass = 0,
    Move = 1,
    Switch = 2,
}

impl ChoiceKind {
    fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0b11 {
            0 => Some(ChoiceKind::Pass),
            1 => Some(ChoiceKind::Move),
            2 => Some(ChoiceKind::Switch),
            _ => None,
        }
    }
}

/// A player's choice: the kind in bits 0-1, the payload (move slot or switch
/// target) in bits 4-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub kind: ChoiceKind,
    pub data: u8,
}

impl Choice {
    pub fn pass() -> Self {
        Choice { kind: ChoiceKind::Pass, data: 0 }
    }

    pub fn mv(slot: u8) -> Self {
        Choice { kind: ChoiceKind::Move, data: slot }
    }

    pub fn switch(slot: u8) -> Self {
        Choice { kind: ChoiceKind::Switch, data: slot }
    }

    pub fn parse(byte: u8) -> Option<Self> {
        Some(Choice { kind: ChoiceKind::from_bits(byte)?, data: byte >> 4 })
    }

    pub fn encode(&self) -> u8 {
        self.data << 4 | self.kind as u8
    }
}

/// How an `update` call resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutcomeKind {
    None = 0,
    Win = 1,
    Lose = 2,
    Tie = 3,
    Error = 4,
}

impl OutcomeKind {
    fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0b1111 {
            0 => Some(OutcomeKind::None),
            1 => Some(OutcomeKind::Win),
            2 => Some(OutcomeKind::Lose),
            3 => Some(OutcomeKind::Tie),
            4 => Some(OutcomeKind::Error),
            _ => None,
        }
    }
}

/// The engine's result byte: outcome in bits 0-3, then the kind of choice
/// each player must answer with next (p1 bits 4-5, p2 bits 6-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub p1: ChoiceKind,
    pub p2: ChoiceKind,
}

impl Outcome {
    pub fn parse(byte: u8) -> Option<Self> {
        Some(Outcome {
            kind: OutcomeKind::from_bits(byte)?,
            p1: ChoiceKind::from_bits(byte >> 4)?,
            p2: ChoiceKind::from_bits(byte >> 6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse(0b0100_0001), Some(Choice::mv(4)));
        assert_eq!(Choice::parse(0b0101_0010), Some(Choice::switch(5)));
        assert_eq!(Choice::parse(0b0000_0011), None);
    }

    #[test]
    fn test_choice_encode() {
        assert_eq!(Choice::pass().encode(), 0);
        assert_eq!(Choice::mv(4).encode(), 0b0100_0001);
        assert_eq!(Choice::switch(5).encode(), 0b0101_0010);
    }

    #[test]
    fn test_outcome_parse() {
        let outcome = Outcome::parse(0b0101_0000).unwrap();
        assert_eq!(outcome.kind, OutcomeKind::None);
        assert_eq!(outcome.p1, ChoiceKind::Move);
        assert_eq!(outcome.p2, ChoiceKind::Move);

        let outcome = Outcome::parse(0b1000_0000).unwrap();
        assert_eq!(outcome.p1, ChoiceKind::Pass);
        assert_eq!(outcome.p2, ChoiceKind::Switch);
    }
}
