//! One player's side of the battle buffer.

use super::{Battle, Pokemon, read_u16};
use crate::StateError;
use crate::snapshot::SideData;
use mimic_data::{Layout, Lookup, Player};

/// A read-only view of one side region.
///
/// The side's order array indirects logical slots to storage indexes: entry
/// `slot - 1` holds a 1-based storage index, or 0 for an empty slot. Slot 1
/// is the active Pokemon once the battle has started.
#[derive(Debug, Clone, Copy)]
pub struct Side<'b> {
    data: &'b [u8],
    layout: &'static Layout,
    lookup: &'static Lookup,
    showdown: bool,
    player: Player,
}

impl<'b> Side<'b> {
    pub(crate) fn new(battle: &Battle<'b>, player: Player) -> Self {
        Side {
            data: battle.data,
            layout: battle.layout,
            lookup: battle.lookup,
            showdown: battle.showdown,
            player,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    fn offset(&self) -> usize {
        self.layout.side_offset(self.player.index())
    }

    fn order(&self, slot: u8) -> u8 {
        self.data[self.offset() + self.layout.side.order + (slot - 1) as usize]
    }

    /// The Pokemon in a logical slot (1-6), or `None` for an empty slot.
    pub fn get(&self, slot: u8) -> Option<Pokemon<'b>> {
        if !(1..=6).contains(&slot) {
            return None;
        }
        let index = self.order(slot);
        if index == 0 || index > 6 {
            return None;
        }
        Some(Pokemon::new(
            self.data,
            self.layout,
            self.lookup,
            self.player,
            index as usize - 1,
        ))
    }

    /// The side's team in logical slot order.
    pub fn pokemon(&self) -> impl Iterator<Item = Pokemon<'b>> + '_ {
        (1..=6).map_while(|slot| self.get(slot))
    }

    /// The active Pokemon. Not defined before the first turn.
    pub fn active(&self) -> Option<Pokemon<'b>> {
        if read_u16(self.data, self.layout.battle.turn) == 0 {
            return None;
        }
        self.get(1)
    }

    pub fn last_used_move(&self) -> Option<&'static str> {
        let num = self.data[self.offset() + self.layout.side.last_used_move];
        Some(self.lookup.move_by_num(num)?.id)
    }

    pub fn last_selected_move(&self) -> Option<&'static str> {
        let num = self.data[self.offset() + self.layout.side.last_selected_move];
        Some(self.lookup.move_by_num(num)?.id)
    }

    fn last_moves_byte(&self) -> u8 {
        let width = self.layout.last_moves_width(self.showdown);
        self.data[self.layout.battle.last_moves + self.player.index() * width]
    }

    /// Move slot (1-4) of the last selected move, for Counter bookkeeping.
    pub fn last_selected_index(&self) -> Option<u8> {
        match self.last_moves_byte() & 0x0F {
            0 => None,
            index => Some(index),
        }
    }

    pub fn last_move_counterable(&self) -> bool {
        self.last_moves_byte() & 0x10 != 0
    }

    pub(crate) fn snapshot(&self) -> Result<SideData, StateError> {
        let mut pokemon = Vec::new();
        for p in self.pokemon() {
            pokemon.push(p.snapshot()?);
        }
        Ok(SideData {
            pokemon,
            last_used_move: self.last_used_move(),
            last_selected_move: self.last_selected_move(),
            last_selected_index: self.last_selected_index(),
            last_move_counterable: self.last_move_counterable(),
        })
    }
}
