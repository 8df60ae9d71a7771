//! The active/stored Pokemon facade.
//!
//! One logical Pokemon is backed by two overlapping layouts: the per-slot
//! stored region (species, stats, moves, HP, status, level) and the side's
//! single active region (live stats, boosts, volatiles, possibly transformed
//! species/types/moves). Accessors here pick the backing region by checking
//! whether this Pokemon currently heads the side's order array; the stored
//! projection is always reachable through [`Pokemon::stored`].

use super::{read_bits, read_block, read_stats, read_u16};
use crate::StateError;
use crate::snapshot::{PokemonData, StoredData};
use crate::types::MoveSlot;
use crate::types::stats::{Boosts, Stats, decode_boost};
use crate::types::status::{self, Status, StatusData};
use crate::types::volatiles::{
    Bide, Binding, Confusion, Rage, Substitute, Thrashing, Toxic, Transform, Volatiles,
};
use mimic_data::{Layout, Lookup, Player, Type};

/// A read-only view of one Pokemon, live fields first.
#[derive(Debug, Clone, Copy)]
pub struct Pokemon<'b> {
    data: &'b [u8],
    layout: &'static Layout,
    lookup: &'static Lookup,
    player: Player,
    /// 0-based storage index within the side.
    index: usize,
}

impl<'b> Pokemon<'b> {
    pub(crate) fn new(
        data: &'b [u8],
        layout: &'static Layout,
        lookup: &'static Lookup,
        player: Player,
        index: usize,
    ) -> Self {
        Pokemon { data, layout, lookup, player, index }
    }

    fn side_offset(&self) -> usize {
        self.layout.side_offset(self.player.index())
    }

    fn active_offset(&self) -> usize {
        self.side_offset() + self.layout.side.active
    }

    fn stored_offset(&self) -> usize {
        self.side_offset() + self.layout.side.pokemon + self.layout.sizes.pokemon * self.index
    }

    /// Logical slot (1-6) this Pokemon currently occupies, via the order
    /// array.
    pub fn position(&self) -> u8 {
        let order = &self.data[self.side_offset() + self.layout.side.order..][..6];
        match order.iter().position(|&v| v as usize == self.index + 1) {
            Some(p) => p as u8 + 1,
            None => 0,
        }
    }

    /// Whether the live accessors read the active region: this Pokemon heads
    /// the order array and the battle has started.
    pub fn is_active(&self) -> bool {
        read_u16(self.data, self.layout.battle.turn) != 0
            && self.data[self.side_offset() + self.layout.side.order] as usize == self.index + 1
    }

    /// The stored projection beneath the live fields.
    pub fn stored(&self) -> Stored<'b> {
        Stored {
            data: self.data,
            layout: self.layout,
            lookup: self.lookup,
            offset: self.stored_offset(),
        }
    }

    pub fn stats(&self) -> Stats {
        if self.is_active() {
            read_stats(self.data, self.active_offset() + self.layout.active.stats, self.layout)
        } else {
            self.stored().stats()
        }
    }

    pub fn boosts(&self) -> Boosts {
        if !self.is_active() {
            return Boosts::default();
        }
        let block = read_block(self.data, self.active_offset() + self.layout.active.boosts, 4);
        let bits = self.layout.boosts;
        let nibble = |bit| decode_boost(read_bits(block, bit, 4) as u8);
        Boosts {
            atk: nibble(bits.atk),
            def: nibble(bits.def),
            spe: nibble(bits.spe),
            spc: nibble(bits.spc),
            accuracy: nibble(bits.accuracy),
            evasion: nibble(bits.evasion),
        }
    }

    fn species_num(&self) -> u8 {
        if self.is_active() {
            self.data[self.active_offset() + self.layout.active.species]
        } else {
            self.data[self.stored_offset() + self.layout.pokemon.species]
        }
    }

    pub fn species(&self) -> Option<&'static str> {
        Some(self.lookup.species_by_num(self.species_num())?.id)
    }

    fn types_byte(&self) -> u8 {
        if self.is_active() {
            self.data[self.active_offset() + self.layout.active.types]
        } else {
            self.data[self.stored_offset() + self.layout.pokemon.types]
        }
    }

    pub fn types(&self) -> Option<[Type; 2]> {
        Type::unpack_pair(self.types_byte())
    }

    pub fn level(&self) -> u8 {
        self.data[self.stored_offset() + self.layout.pokemon.level]
    }

    pub fn hp(&self) -> u16 {
        read_u16(self.data, self.stored_offset() + self.layout.pokemon.hp)
    }

    fn status_byte(&self) -> u8 {
        self.data[self.stored_offset() + self.layout.pokemon.status]
    }

    fn toxic_counter(&self) -> u8 {
        if !self.is_active() {
            return 0;
        }
        let block = self.volatiles_block();
        read_bits(block, self.layout.volatile_data.toxic, 5) as u8
    }

    pub fn status(&self) -> Option<Status> {
        status::decode(self.status_byte(), self.toxic_counter())
    }

    pub fn status_data(&self) -> StatusData {
        status::decode_data(self.status_byte(), self.toxic_counter())
    }

    /// One move slot (1-4), with disable bookkeeping when active.
    pub fn move_slot(&self, slot: u8) -> Option<MoveSlot> {
        if !self.is_active() {
            return self.stored().move_slot(slot);
        }
        let offset = self.active_offset() + self.layout.active.moves + (slot as usize - 1) * 2;
        let num = self.data[offset];
        let mv = self.lookup.move_by_num(num)?;
        let block = self.volatiles_block();
        let disabled_move = read_bits(block, self.layout.volatile_data.disabled_move, 3) as u8;
        let disabled = (disabled_move == slot)
            .then(|| read_bits(block, self.layout.volatile_data.disabled_duration, 4) as u8);
        Some(MoveSlot { id: mv.id, pp: self.data[offset + 1], disabled })
    }

    pub fn moves(&self) -> impl Iterator<Item = MoveSlot> + '_ {
        (1..=4).map_while(|slot| self.move_slot(slot))
    }

    fn volatiles_block(&self) -> u64 {
        read_block(self.data, self.active_offset() + self.layout.active.volatiles, 8)
    }

    /// The decoded volatile-condition set; empty unless active.
    pub fn volatiles(&self) -> Volatiles {
        if !self.is_active() {
            return Volatiles::default();
        }
        let block = self.volatiles_block();
        let flags = self.layout.volatile_flags;
        let data = self.layout.volatile_data;
        let flag = |bit| read_bits(block, bit, 1) != 0;

        let attacks = read_bits(block, data.attacks, 3) as u8;
        let state = read_bits(block, data.state, 16) as u16;

        Volatiles {
            bide: flag(flags.bide).then_some(Bide { duration: attacks, damage: state }),
            thrashing: flag(flags.thrashing)
                .then_some(Thrashing { duration: attacks, accuracy: state }),
            multi_hit: flag(flags.multi_hit),
            flinch: flag(flags.flinch),
            charging: flag(flags.charging),
            binding: flag(flags.binding).then_some(Binding { duration: attacks }),
            invulnerable: flag(flags.invulnerable),
            confusion: flag(flags.confusion).then(|| Confusion {
                duration: read_bits(block, data.confusion, 3) as u8,
            }),
            mist: flag(flags.mist),
            focus_energy: flag(flags.focus_energy),
            substitute: flag(flags.substitute).then(|| Substitute {
                hp: read_bits(block, data.substitute, 8) as u8,
            }),
            recharging: flag(flags.recharging),
            rage: flag(flags.rage).then_some(Rage { accuracy: state }),
            leech_seed: flag(flags.leech_seed),
            toxic: flag(flags.toxic).then(|| Toxic {
                stage: read_bits(block, data.toxic, 5) as u8,
            }),
            light_screen: flag(flags.light_screen),
            reflect: flag(flags.reflect),
            transform: flag(flags.transform)
                .then(|| self.resolve_transform(read_bits(block, data.transform, 4) as u8))
                .flatten(),
        }
    }

    /// Resolves the packed transform ident (player bit + storage index)
    /// through the target side's order array.
    fn resolve_transform(&self, ident: u8) -> Option<Transform> {
        let player = if ident & 0b1000 != 0 { Player::P2 } else { Player::P1 };
        let index = ident & 0b111;
        if index == 0 {
            return None;
        }
        let order_offset = self.layout.side_offset(player.index()) + self.layout.side.order;
        let order = &self.data[order_offset..][..6];
        let slot = order.iter().position(|&v| v == index)? as u8 + 1;
        Some(Transform { player, slot })
    }

    pub(crate) fn snapshot(&self) -> Result<PokemonData, StateError> {
        let species = self.species().ok_or(StateError::Corrupt {
            what: "species",
            value: self.species_num(),
        })?;
        let types = self.types().ok_or(StateError::Corrupt {
            what: "types",
            value: self.types_byte(),
        })?;
        Ok(PokemonData {
            species,
            types,
            level: self.level(),
            hp: self.hp(),
            status: self.status(),
            status_data: self.status_data(),
            stats: self.stats(),
            boosts: self.boosts(),
            moves: self.moves().collect(),
            volatiles: self.volatiles(),
            stored: self.stored().snapshot()?,
            position: self.position(),
        })
    }
}

/// The stored projection: what the battle keeps for every team member
/// regardless of who is active.
#[derive(Debug, Clone, Copy)]
pub struct Stored<'b> {
    data: &'b [u8],
    layout: &'static Layout,
    lookup: &'static Lookup,
    offset: usize,
}

impl<'b> Stored<'b> {
    pub fn stats(&self) -> Stats {
        read_stats(self.data, self.offset + self.layout.pokemon.stats, self.layout)
    }

    fn species_num(&self) -> u8 {
        self.data[self.offset + self.layout.pokemon.species]
    }

    pub fn species(&self) -> Option<&'static str> {
        Some(self.lookup.species_by_num(self.species_num())?.id)
    }

    fn types_byte(&self) -> u8 {
        self.data[self.offset + self.layout.pokemon.types]
    }

    pub fn types(&self) -> Option<[Type; 2]> {
        Type::unpack_pair(self.types_byte())
    }

    pub fn move_slot(&self, slot: u8) -> Option<MoveSlot> {
        let offset = self.offset + self.layout.pokemon.moves + (slot as usize - 1) * 2;
        let mv = self.lookup.move_by_num(self.data[offset])?;
        Some(MoveSlot { id: mv.id, pp: self.data[offset + 1], disabled: None })
    }

    pub fn moves(&self) -> impl Iterator<Item = MoveSlot> + '_ {
        (1..=4).map_while(|slot| self.move_slot(slot))
    }

    pub(crate) fn snapshot(&self) -> Result<StoredData, StateError> {
        let species = self.species().ok_or(StateError::Corrupt {
            what: "species",
            value: self.species_num(),
        })?;
        let types = self.types().ok_or(StateError::Corrupt {
            what: "types",
            value: self.types_byte(),
        })?;
        Ok(StoredData { species, types, stats: self.stats(), moves: self.moves().collect() })
    }
}
