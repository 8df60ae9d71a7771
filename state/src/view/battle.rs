//! The top-level battle view.

use super::{Pokemon, Side, read_block, read_u16};
use crate::snapshot::BattleData;
use crate::types::Seed;
use crate::{Config, StateError};
use mimic_data::{Layout, Lookup, Player, layout};

/// A read-only view of a battle buffer.
///
/// Wraps a caller-owned buffer of exactly the generation's battle size; the
/// length is checked here once and never again.
#[derive(Debug, Clone, Copy)]
pub struct Battle<'b> {
    pub(crate) data: &'b [u8],
    pub(crate) layout: &'static Layout,
    pub(crate) lookup: &'static Lookup,
    pub(crate) showdown: bool,
}

impl<'b> Battle<'b> {
    pub fn new(generation: u8, data: &'b [u8], config: &Config) -> Result<Self, StateError> {
        let layout = layout(generation)?;
        let lookup = Lookup::get(generation)?;
        if data.len() != layout.sizes.battle {
            return Err(StateError::BufferSize {
                generation,
                len: data.len(),
                expected: layout.sizes.battle,
            });
        }
        Ok(Battle { data, layout, lookup, showdown: config.showdown })
    }

    pub fn turn(&self) -> u16 {
        read_u16(self.data, self.layout.battle.turn)
    }

    pub fn last_damage(&self) -> u16 {
        read_u16(self.data, self.layout.battle.last_damage)
    }

    /// The logical RNG seed, normalized from the mode's physical encoding.
    ///
    /// Classic mode stores 9 seed bytes plus a rotation index; rotating by
    /// `-index` here means callers always see a zero-indexed seed, at the
    /// cost of the physical index byte not round-tripping through
    /// [`crate::restore`].
    pub fn prng(&self) -> Seed {
        let offset = self.layout.rng(self.showdown);
        if self.showdown {
            let block = read_block(self.data, offset, 8);
            Seed::Showdown([
                (block >> 48) as u16,
                (block >> 32) as u16,
                (block >> 16) as u16,
                block as u16,
            ])
        } else {
            let index = (self.data[offset + 9] % 9) as usize;
            let mut seed = [0u8; 9];
            for (i, &byte) in self.data[offset..offset + 9].iter().enumerate() {
                seed[(i + 9 - index) % 9] = byte;
            }
            Seed::Classic(seed)
        }
    }

    pub fn side(&self, player: Player) -> Side<'b> {
        Side::new(self, player)
    }

    pub fn sides(&self) -> impl Iterator<Item = Side<'b>> + '_ {
        [Player::P1, Player::P2].into_iter().map(|p| self.side(p))
    }

    /// The player's active Pokemon. Not defined before the first turn.
    pub fn active(&self, player: Player) -> Option<Pokemon<'b>> {
        self.side(player).active()
    }

    /// Lifts the buffer into an owned logical snapshot.
    pub fn snapshot(&self) -> Result<BattleData, StateError> {
        Ok(BattleData {
            turn: self.turn(),
            last_damage: self.last_damage(),
            prng: self.prng(),
            sides: [
                self.side(Player::P1).snapshot()?,
                self.side(Player::P2).snapshot()?,
            ],
        })
    }
}
