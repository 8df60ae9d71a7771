//! Translation tables between stable string identifiers and the 1-based
//! ordinals the engine uses on the wire.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::dex::{self, Move, Specie};
use crate::{SchemaError, Type};

/// Per-generation bidirectional id <-> ordinal map for types, species, moves
/// and items. Ordinals are 1-based; 0 always means "none".
///
/// Built once per generation and memoized process-wide via [`Lookup::get`].
#[derive(Debug)]
pub struct Lookup {
    generation: u8,
    species_by_id: HashMap<&'static str, u8>,
    moves_by_id: HashMap<&'static str, u8>,
}

static GEN1: OnceLock<Lookup> = OnceLock::new();

impl Lookup {
    /// Returns the lookup table for a generation, building and caching it on
    /// first use. Fails fast on generations without embedded tables.
    pub fn get(generation: u8) -> Result<&'static Lookup, SchemaError> {
        match generation {
            1 => Ok(GEN1.get_or_init(|| Lookup::build(1))),
            n => Err(SchemaError::UnsupportedGen(n)),
        }
    }

    fn build(generation: u8) -> Lookup {
        let mut species_by_id = HashMap::with_capacity(dex::SPECIES.len());
        for (i, specie) in dex::SPECIES.iter().enumerate() {
            species_by_id.insert(specie.id, (i + 1) as u8);
        }
        let mut moves_by_id = HashMap::with_capacity(dex::MOVES.len());
        for (i, mv) in dex::MOVES.iter().enumerate() {
            moves_by_id.insert(mv.id, (i + 1) as u8);
        }
        Lookup { generation, species_by_id, moves_by_id }
    }

    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Sizes of the backing tables.
    pub fn sizes(&self) -> (usize, usize, usize, usize) {
        (Type::COUNT, dex::SPECIES.len(), dex::MOVES.len(), 0)
    }

    pub fn type_by_num(&self, num: u8) -> Option<Type> {
        Type::from_num(num)
    }

    pub fn type_by_name(&self, name: &str) -> Option<u8> {
        Type::from_name(name).map(|t| t.num())
    }

    pub fn species_by_num(&self, num: u8) -> Option<&'static Specie> {
        dex::SPECIES.get(num.checked_sub(1)? as usize)
    }

    /// Resolves a species id (or display name) to its ordinal.
    pub fn species_by_id(&self, id: &str) -> Option<u8> {
        self.species_by_id.get(to_id(id).as_str()).copied()
    }

    /// Resolves a species id to its ordinal and table row in one step.
    pub fn species_entry(&self, id: &str) -> Option<(u8, &'static Specie)> {
        let num = self.species_by_id(id)?;
        Some((num, self.species_by_num(num)?))
    }

    pub fn move_by_num(&self, num: u8) -> Option<&'static Move> {
        dex::MOVES.get(num.checked_sub(1)? as usize)
    }

    /// Resolves a move id (or display name) to its ordinal.
    pub fn move_by_id(&self, id: &str) -> Option<u8> {
        self.moves_by_id.get(to_id(id).as_str()).copied()
    }

    /// Resolves a move id to its ordinal and table row in one step.
    pub fn move_entry(&self, id: &str) -> Option<(u8, &'static Move)> {
        let num = self.move_by_id(id)?;
        Some((num, self.move_by_num(num)?))
    }

    /// Gen 1 has no held items; the table exists but is empty.
    pub fn item_by_num(&self, _num: u8) -> Option<&'static str> {
        None
    }

    pub fn item_by_id(&self, _id: &str) -> Option<u8> {
        None
    }
}

/// Normalizes a display name to its stable id ("Mr. Mime" -> "mrmime").
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_type() {
        let lookup = Lookup::get(1).unwrap();
        assert_eq!(lookup.type_by_name("Rock"), Some(5));
        assert_eq!(lookup.type_by_num(14), Some(Type::Dragon));
    }

    #[test]
    fn test_lookup_species() -> anyhow::Result<()> {
        let lookup = Lookup::get(1)?;
        assert_eq!(lookup.species_by_id("gengar"), Some(94));
        assert_eq!(lookup.species_by_num(151).unwrap().id, "mew");
        assert_eq!(lookup.species_by_id("Mr. Mime"), Some(122));
        assert_eq!(lookup.species_by_num(0), None);
        assert_eq!(lookup.species_by_num(152), None);
        Ok(())
    }

    #[test]
    fn test_lookup_move() {
        let lookup = Lookup::get(1).unwrap();
        assert_eq!(lookup.move_by_id("lowkick"), Some(67));
        assert_eq!(lookup.move_by_num(133).unwrap().id, "amnesia");
        assert_eq!(lookup.move_by_id("Karate Chop"), Some(2));
    }

    #[test]
    fn test_lookup_items_empty_in_gen1() {
        let lookup = Lookup::get(1).unwrap();
        assert_eq!(lookup.item_by_num(1), None);
        assert_eq!(lookup.item_by_id("leftovers"), None);
    }

    #[test]
    fn test_lookup_memoized() {
        let a = Lookup::get(1).unwrap() as *const Lookup;
        let b = Lookup::get(1).unwrap() as *const Lookup;
        assert_eq!(a, b);
        assert_eq!(Lookup::get(3).unwrap_err(), SchemaError::UnsupportedGen(3));
    }
}
