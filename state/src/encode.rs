//! Buffer encoders: fresh battles from team sets, and the structural inverse
//! of decoding.
//!
//! Encoding is all-or-nothing: a logically inconsistent input is rejected
//! with a [`StateError::Contract`] before any caller could mistake the output
//! for a valid engine buffer. Nothing here recovers, defaults, or skips.

use crate::snapshot::{BattleData, PokemonData};
use crate::types::set::PokemonSet;
use crate::types::stats::{Stats, calc_all, encode_boost};
use crate::types::status::{self, Status};
use crate::types::volatiles::Volatiles;
use crate::types::{MoveSlot, Seed};
use crate::{Config, StateError};
use mimic_data::{Layout, Lookup, Player, Type, layout};

/// Gen 1 caps PP at 61 regardless of a move's base PP.
const PP_MAX: u8 = 61;

/// Everything needed to build a fresh battle buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOptions {
    pub p1: Vec<PokemonSet>,
    pub p2: Vec<PokemonSet>,
    pub seed: Seed,
    pub config: Config,
}

/// Builds a battle buffer from scratch: zero-initialized, each side's stored
/// Pokemon written from its team set, the order array set to the identity,
/// and the PRNG seed encoded last. The battle starts at turn 0 with no
/// active Pokemon.
pub fn create(generation: u8, options: &CreateOptions) -> Result<Vec<u8>, StateError> {
    let layout = layout(generation)?;
    let lookup = Lookup::get(generation)?;
    check_seed(&options.seed, &options.config)?;

    let mut buf = vec![0u8; layout.sizes.battle];
    for (i, team) in [&options.p1, &options.p2].into_iter().enumerate() {
        if team.is_empty() || team.len() > 6 {
            return Err(StateError::Contract(format!(
                "side {} team has {} members, expected 1-6",
                i + 1,
                team.len()
            )));
        }
        let base = layout.side_offset(i);
        for (j, set) in team.iter().enumerate() {
            let offset = base + layout.side.pokemon + layout.sizes.pokemon * j;
            encode_set(&mut buf, layout, lookup, offset, set)?;
            buf[base + layout.side.order + j] = j as u8 + 1;
        }
    }
    encode_prng(&mut buf, layout, &options.seed);
    Ok(buf)
}

/// Re-encodes a decoded logical snapshot into a battle buffer.
///
/// Storage is normalized: Pokemon are written in logical slot order and the
/// order array becomes the identity, which leaves the decoded view of the
/// result equal to the input. Classic-mode seeds are re-encoded at rotation
/// index zero, so only the logical seed value survives the trip.
pub fn restore(generation: u8, battle: &BattleData, config: &Config) -> Result<Vec<u8>, StateError> {
    let layout = layout(generation)?;
    let lookup = Lookup::get(generation)?;
    check_seed(&battle.prng, config)?;

    let mut buf = vec![0u8; layout.sizes.battle];
    for (i, side) in battle.sides.iter().enumerate() {
        if side.pokemon.len() > 6 {
            return Err(StateError::Contract(format!(
                "side {} has {} Pokemon",
                i + 1,
                side.pokemon.len()
            )));
        }
        let base = layout.side_offset(i);
        for (j, p) in side.pokemon.iter().enumerate() {
            let active = battle.turn != 0 && j == 0;
            check_toxic(p, active)?;
            let offset = base + layout.side.pokemon + layout.sizes.pokemon * j;
            encode_stored(&mut buf, layout, lookup, offset, p)?;
            buf[base + layout.side.order + j] = j as u8 + 1;
        }
        if battle.turn != 0 {
            if let Some(p) = side.pokemon.first() {
                encode_active(&mut buf, layout, lookup, base + layout.side.active, p)?;
            }
        }

        buf[base + layout.side.last_selected_move] = move_num(lookup, side.last_selected_move)?;
        buf[base + layout.side.last_used_move] = move_num(lookup, side.last_used_move)?;

        let mut packed = match side.last_selected_index {
            None => 0,
            Some(index @ 1..=4) => index,
            Some(index) => {
                return Err(StateError::Contract(format!("last selected index {index}")));
            }
        };
        if side.last_move_counterable {
            packed |= 0x10;
        }
        let width = layout.last_moves_width(config.showdown);
        buf[layout.battle.last_moves + i * width] = packed;
    }

    write_u16(&mut buf, layout.battle.turn, battle.turn);
    write_u16(&mut buf, layout.battle.last_damage, battle.last_damage);
    encode_prng(&mut buf, layout, &battle.prng);
    Ok(buf)
}

fn check_seed(seed: &Seed, config: &Config) -> Result<(), StateError> {
    if !seed.matches(config.showdown) {
        return Err(StateError::Contract(format!(
            "seed {seed:?} does not match showdown={}",
            config.showdown
        )));
    }
    Ok(())
}

/// A toxic status is only representable while the active toxic counter runs.
fn check_toxic(p: &PokemonData, active: bool) -> Result<(), StateError> {
    if p.status == Some(Status::Toxic) {
        let stage = p.volatiles.toxic.map_or(0, |t| t.stage);
        if !active || stage == 0 {
            return Err(StateError::Contract(
                "toxic status without a running toxic counter".into(),
            ));
        }
    }
    Ok(())
}

fn move_num(lookup: &Lookup, id: Option<&str>) -> Result<u8, StateError> {
    match id {
        None => Ok(0),
        Some(id) => lookup
            .move_by_id(id)
            .ok_or_else(|| StateError::UnknownId { kind: "move", id: id.to_string() }),
    }
}

/// Writes one stored Pokemon from a team set: stat calculation, capped PP,
/// full HP, no status.
fn encode_set(
    buf: &mut [u8],
    layout: &Layout,
    lookup: &Lookup,
    offset: usize,
    set: &PokemonSet,
) -> Result<(), StateError> {
    let (num, specie) = lookup
        .species_entry(&set.species)
        .ok_or_else(|| StateError::UnknownId { kind: "species", id: set.species.clone() })?;
    if set.level == 0 || set.level > 100 {
        return Err(StateError::Contract(format!("level {} out of range", set.level)));
    }
    if set.moves.len() > 4 {
        return Err(StateError::Contract(format!("{} moves in one set", set.moves.len())));
    }

    let stats = calc_all(&specie.stats, &set.dvs, &set.exp, set.level);
    write_stats(buf, offset + layout.pokemon.stats, layout, &stats);

    let mut mo = offset + layout.pokemon.moves;
    for id in &set.moves {
        let (move_num, mv) = lookup
            .move_entry(id)
            .ok_or_else(|| StateError::UnknownId { kind: "move", id: id.clone() })?;
        buf[mo] = move_num;
        buf[mo + 1] = mv.pp.min(PP_MAX);
        mo += 2;
    }

    write_u16(buf, offset + layout.pokemon.hp, stats.hp);
    buf[offset + layout.pokemon.species] = num;
    buf[offset + layout.pokemon.types] = Type::pack_pair(specie.types);
    buf[offset + layout.pokemon.level] = set.level;
    Ok(())
}

/// Writes one stored Pokemon region from a snapshot.
fn encode_stored(
    buf: &mut [u8],
    layout: &Layout,
    lookup: &Lookup,
    offset: usize,
    p: &PokemonData,
) -> Result<(), StateError> {
    let num = lookup
        .species_by_id(p.stored.species)
        .ok_or_else(|| StateError::UnknownId { kind: "species", id: p.stored.species.into() })?;

    write_stats(buf, offset + layout.pokemon.stats, layout, &p.stored.stats);
    write_moves(buf, lookup, offset + layout.pokemon.moves, &p.stored.moves)?;
    write_u16(buf, offset + layout.pokemon.hp, p.hp);
    buf[offset + layout.pokemon.status] = status::encode(p.status, &p.status_data)?;
    buf[offset + layout.pokemon.species] = num;
    buf[offset + layout.pokemon.types] = Type::pack_pair(p.stored.types);
    buf[offset + layout.pokemon.level] = p.level;
    Ok(())
}

/// Writes the side's active region from the snapshot's live layer.
fn encode_active(
    buf: &mut [u8],
    layout: &Layout,
    lookup: &Lookup,
    offset: usize,
    p: &PokemonData,
) -> Result<(), StateError> {
    let num = lookup
        .species_by_id(p.species)
        .ok_or_else(|| StateError::UnknownId { kind: "species", id: p.species.into() })?;

    write_stats(buf, offset + layout.active.stats, layout, &p.stats);
    buf[offset + layout.active.species] = num;
    buf[offset + layout.active.types] = Type::pack_pair(p.types);

    let bits = layout.boosts;
    let mut boosts = 0u64;
    for (bit, stage) in [
        (bits.atk, p.boosts.atk),
        (bits.def, p.boosts.def),
        (bits.spe, p.boosts.spe),
        (bits.spc, p.boosts.spc),
        (bits.accuracy, p.boosts.accuracy),
        (bits.evasion, p.boosts.evasion),
    ] {
        boosts |= (encode_boost(stage)? as u64) << bit;
    }
    write_block(buf, offset + layout.active.boosts, 4, boosts);

    let block = encode_volatiles(layout, &p.volatiles, &p.moves)?;
    write_block(buf, offset + layout.active.volatiles, 8, block);

    write_moves(buf, lookup, offset + layout.active.moves, &p.moves)?;
    Ok(())
}

/// Packs the volatile-condition set (plus the disable bookkeeping carried on
/// the move slots) back into the 8-byte block. Field-sharing follows the
/// engine: bide/thrashing/binding share the attacks counter, and
/// bide damage / thrashing accuracy / rage accuracy share the state word.
fn encode_volatiles(
    layout: &Layout,
    v: &Volatiles,
    moves: &[MoveSlot],
) -> Result<u64, StateError> {
    let flags = layout.volatile_flags;
    let data = layout.volatile_data;
    let mut block = 0u64;
    let mut flag = |bit: usize, on: bool| {
        if on {
            block |= 1 << bit;
        }
    };

    flag(flags.bide, v.bide.is_some());
    flag(flags.thrashing, v.thrashing.is_some());
    flag(flags.multi_hit, v.multi_hit);
    flag(flags.flinch, v.flinch);
    flag(flags.charging, v.charging);
    flag(flags.binding, v.binding.is_some());
    flag(flags.invulnerable, v.invulnerable);
    flag(flags.confusion, v.confusion.is_some());
    flag(flags.mist, v.mist);
    flag(flags.focus_energy, v.focus_energy);
    flag(flags.substitute, v.substitute.is_some());
    flag(flags.recharging, v.recharging);
    flag(flags.rage, v.rage.is_some());
    flag(flags.leech_seed, v.leech_seed);
    flag(flags.toxic, v.toxic.is_some());
    flag(flags.light_screen, v.light_screen);
    flag(flags.reflect, v.reflect);
    flag(flags.transform, v.transform.is_some());

    if let Some(confusion) = v.confusion {
        block |= (field(confusion.duration as u64, 3, "confusion duration")?) << data.confusion;
    }

    let attacks = v
        .bide
        .map(|b| b.duration)
        .or(v.thrashing.map(|t| t.duration))
        .or(v.binding.map(|b| b.duration))
        .unwrap_or(0);
    block |= (field(attacks as u64, 3, "attack counter")?) << data.attacks;

    let state = v
        .bide
        .map(|b| b.damage)
        .or(v.thrashing.map(|t| t.accuracy))
        .or(v.rage.map(|r| r.accuracy))
        .unwrap_or(0);
    block |= (state as u64) << data.state;

    if let Some(substitute) = v.substitute {
        block |= (substitute.hp as u64) << data.substitute;
    }

    if let Some(transform) = v.transform {
        if !(1..=6).contains(&transform.slot) {
            return Err(StateError::Contract(format!("transform slot {}", transform.slot)));
        }
        // restore normalizes order to the identity, so slot == storage index
        let ident = (if transform.player == Player::P2 { 0b1000u8 } else { 0 }) | transform.slot;
        block |= (ident as u64) << data.transform;
    }

    let mut disabled = None;
    for (i, slot) in moves.iter().enumerate() {
        if let Some(duration) = slot.disabled {
            if disabled.is_some() {
                return Err(StateError::Contract("more than one disabled move".into()));
            }
            disabled = Some((i as u64 + 1, duration));
        }
    }
    if let Some((slot, duration)) = disabled {
        block |= slot << data.disabled_move;
        block |= (field(duration as u64, 4, "disable duration")?) << data.disabled_duration;
    }

    if let Some(toxic) = v.toxic {
        block |= (field(toxic.stage as u64, 5, "toxic counter")?) << data.toxic;
    }

    Ok(block)
}

fn field(value: u64, width: u32, what: &str) -> Result<u64, StateError> {
    if value >> width != 0 {
        return Err(StateError::Contract(format!("{what} {value} does not fit {width} bits")));
    }
    Ok(value)
}

fn write_moves(
    buf: &mut [u8],
    lookup: &Lookup,
    offset: usize,
    moves: &[MoveSlot],
) -> Result<(), StateError> {
    if moves.len() > 4 {
        return Err(StateError::Contract(format!("{} move slots", moves.len())));
    }
    for (i, slot) in moves.iter().enumerate() {
        let num = lookup
            .move_by_id(slot.id)
            .ok_or_else(|| StateError::UnknownId { kind: "move", id: slot.id.into() })?;
        buf[offset + i * 2] = num;
        buf[offset + i * 2 + 1] = slot.pp;
    }
    Ok(())
}

fn encode_prng(buf: &mut [u8], layout: &Layout, seed: &Seed) {
    match seed {
        Seed::Showdown(words) => {
            let block = (words[0] as u64) << 48
                | (words[1] as u64) << 32
                | (words[2] as u64) << 16
                | words[3] as u64;
            write_block(buf, layout.rng(true), 8, block);
        }
        Seed::Classic(bytes) => {
            let offset = layout.rng(false);
            buf[offset..offset + 9].copy_from_slice(bytes);
            // the rotation index byte stays zero: the seed is written
            // logically zero-indexed
        }
    }
}

fn write_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn write_block(buf: &mut [u8], offset: usize, len: usize, block: u64) {
    buf[offset..offset + len].copy_from_slice(&block.to_le_bytes()[..len]);
}

fn write_stats(buf: &mut [u8], offset: usize, layout: &Layout, stats: &Stats) {
    write_u16(buf, offset + layout.stats.hp, stats.hp);
    write_u16(buf, offset + layout.stats.atk, stats.atk);
    write_u16(buf, offset + layout.stats.def, stats.def);
    write_u16(buf, offset + layout.stats.spe, stats.spe);
    write_u16(buf, offset + layout.stats.spc, stats.spc);
}
