//! Team set types: what a caller supplies to build a fresh battle.

use serde::{Deserialize, Serialize};

/// Determinant values, 0-15 per stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dvs {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spe: u8,
    pub spc: u8,
}

impl Default for Dvs {
    fn default() -> Self {
        Dvs { hp: 15, atk: 15, def: 15, spe: 15, spc: 15 }
    }
}

/// Stat experience, 0-65535 per stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatExp {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spe: u16,
    pub spc: u16,
}

impl Default for StatExp {
    fn default() -> Self {
        StatExp { hp: 65535, atk: 65535, def: 65535, spe: 65535, spc: 65535 }
    }
}

/// One team member as supplied to [`crate::create`]. Species and moves are
/// stable ids or display names; the spread defaults to the maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSet {
    pub species: String,
    /// Nickname; display layers fall back to the species name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub dvs: Dvs,
    #[serde(default)]
    pub exp: StatExp,
    #[serde(default)]
    pub moves: Vec<String>,
}

fn default_level() -> u8 {
    100
}

impl PokemonSet {
    /// Convenience constructor for a max-spread L100 set.
    pub fn new(species: &str, moves: &[&str]) -> Self {
        PokemonSet {
            species: species.to_string(),
            name: None,
            level: 100,
            dvs: Dvs::default(),
            exp: StatExp::default(),
            moves: moves.iter().map(|m| m.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_json_round_trip() -> anyhow::Result<()> {
        let set = PokemonSet::new("Starmie", &["Surf", "Thunderbolt", "Recover"]);
        let json = serde_json::to_string(&set)?;
        assert_eq!(serde_json::from_str::<PokemonSet>(&json)?, set);
        Ok(())
    }

    #[test]
    fn test_set_defaults_from_sparse_json() -> anyhow::Result<()> {
        let set: PokemonSet =
            serde_json::from_str(r#"{"species": "snorlax", "moves": ["bodyslam"]}"#)?;
        assert_eq!(set.level, 100);
        assert_eq!(set.dvs, Dvs::default());
        assert_eq!(set.exp.spc, 65535);
        Ok(())
    }
}
