//! Name-resolution tables for decoding identity bytes.
//!
//! The log only carries `(player, slot)` nibbles; everything displayable (a
//! player's name, a Pokemon's nickname) comes from the roster supplied by
//! whoever set the battle up.

use crate::DecodeError;
use mimic_data::{Lookup, Player};
use mimic_state::PokemonSet;

/// Both sides' display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub p1: SideRoster,
    pub p2: SideRoster,
}

impl Roster {
    pub fn new(p1: SideRoster, p2: SideRoster) -> Self {
        Roster { p1, p2 }
    }

    pub fn side(&self, player: Player) -> &SideRoster {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }
}

/// One side's player name and per-slot members, in team order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideRoster {
    pub name: String,
    pub team: Vec<Member>,
}

/// Display information for one team slot. The nickname falls back to the
/// species display name when the set has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub species: String,
}

impl SideRoster {
    /// Derives a side's roster from its team sets, resolving species display
    /// names through the gen 1 lookup table.
    pub fn new(name: &str, team: &[PokemonSet]) -> Result<Self, DecodeError> {
        // roster construction is gen 1 only, like the rest of this crate
        let lookup = Lookup::get(1)?;
        let team = team
            .iter()
            .map(|set| {
                let (_, specie) = lookup
                    .species_entry(&set.species)
                    .ok_or_else(|| DecodeError::UnknownSpecies(set.species.clone()))?;
                Ok(Member {
                    name: set.name.clone().unwrap_or_else(|| specie.name.to_string()),
                    species: specie.name.to_string(),
                })
            })
            .collect::<Result<Vec<_>, DecodeError>>()?;
        Ok(SideRoster { name: name.to_string(), team })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nickname_falls_back_to_species_name() -> anyhow::Result<()> {
        let mut set = PokemonSet::new("mrmime", &[]);
        let side = SideRoster::new("Player A", &[set.clone()])?;
        assert_eq!(side.team[0].name, "Mr. Mime");

        set.name = Some("Mimey".into());
        let side = SideRoster::new("Player A", &[set])?;
        assert_eq!(side.team[0].name, "Mimey");
        assert_eq!(side.team[0].species, "Mr. Mime");
        Ok(())
    }

    #[test]
    fn test_unknown_species_fails() {
        let err = SideRoster::new("Player A", &[PokemonSet::new("missingno", &[])]);
        assert_eq!(err, Err(DecodeError::UnknownSpecies("missingno".into())));
    }
}
