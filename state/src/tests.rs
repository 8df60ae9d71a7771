#[cfg(test)]
mod tests {
    use crate::types::volatiles::{Confusion, Substitute, Toxic, Transform};
    use crate::{
        Battle, Config, CreateOptions, PokemonSet, Seed, StateError, Status, create, restore,
    };
    use mimic_data::{Player, layout};

    fn config(showdown: bool) -> Config {
        Config { showdown, trace: false }
    }

    fn options(showdown: bool) -> CreateOptions {
        CreateOptions {
            p1: vec![
                PokemonSet::new("Tauros", &["Body Slam", "Hyper Beam", "Blizzard", "Earthquake"]),
                PokemonSet::new("Snorlax", &["Rest", "Body Slam"]),
            ],
            p2: vec![
                PokemonSet::new("Alakazam", &["Psychic", "Recover"]),
                PokemonSet::new("Chansey", &["Soft-Boiled", "Thunder Wave"]),
            ],
            seed: if showdown {
                Seed::Showdown([1, 2, 3, 4])
            } else {
                Seed::Classic([1, 2, 3, 4, 5, 6, 7, 8, 9])
            },
            config: config(showdown),
        }
    }

    #[test]
    fn test_create_fresh_battle() -> anyhow::Result<()> {
        let options = CreateOptions {
            p1: vec![PokemonSet::new("Tauros", &["Body Slam"])],
            p2: vec![PokemonSet::new("Snorlax", &["Rest"])],
            seed: Seed::Showdown([1, 2, 3, 4]),
            config: config(true),
        };
        let buf = create(1, &options)?;
        let battle = Battle::new(1, &buf, &options.config)?;

        assert_eq!(battle.turn(), 0);
        assert_eq!(battle.last_damage(), 0);
        assert_eq!(battle.prng(), Seed::Showdown([1, 2, 3, 4]));
        assert!(battle.active(Player::P1).is_none());
        assert!(battle.active(Player::P2).is_none());

        let p1 = battle.side(Player::P1).get(1).unwrap();
        assert_eq!(p1.stored().species(), Some("tauros"));
        assert_eq!(p1.species(), Some("tauros"));
        assert_eq!(p1.stored().stats().hp, 353);
        assert_eq!(p1.hp(), 353);
        assert_eq!(p1.level(), 100);
        let slam = p1.stored().move_slot(1).unwrap();
        assert_eq!((slam.id, slam.pp), ("bodyslam", 15));
        assert!(battle.side(Player::P1).get(2).is_none());

        let p2 = battle.side(Player::P2).get(1).unwrap();
        assert_eq!(p2.stored().species(), Some("snorlax"));
        Ok(())
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let base = options(true);

        let mut opts = base.clone();
        opts.p1[0].species = "missingno".into();
        assert!(matches!(create(1, &opts), Err(StateError::UnknownId { kind: "species", .. })));

        let mut opts = base.clone();
        opts.p2[0].moves.push("Softlock".into());
        assert!(matches!(create(1, &opts), Err(StateError::UnknownId { kind: "move", .. })));

        let mut opts = base.clone();
        opts.p1.clear();
        assert!(matches!(create(1, &opts), Err(StateError::Contract(_))));

        let mut opts = base.clone();
        opts.seed = Seed::Classic([0; 9]);
        assert!(matches!(create(1, &opts), Err(StateError::Contract(_))));

        let mut opts = base;
        opts.p1[0].level = 0;
        assert!(matches!(create(1, &opts), Err(StateError::Contract(_))));

        assert!(matches!(create(2, &options(true)), Err(StateError::Schema(_))));
    }

    #[test]
    fn test_buffer_size_checked_once() {
        let cfg = config(true);
        let buf = create(1, &options(true)).unwrap();
        assert!(Battle::new(1, &buf[..buf.len() - 1], &cfg).is_err());
        assert!(Battle::new(1, &[], &cfg).is_err());
        assert!(Battle::new(1, &buf, &cfg).is_ok());
    }

    #[test]
    fn test_round_trip_fresh() -> anyhow::Result<()> {
        for showdown in [true, false] {
            let opts = options(showdown);
            let buf = create(1, &opts)?;
            let snapshot = Battle::new(1, &buf, &opts.config)?.snapshot()?;
            let restored = restore(1, &snapshot, &opts.config)?;
            let again = Battle::new(1, &restored, &opts.config)?.snapshot()?;
            assert_eq!(again, snapshot);
            // a fresh battle also round-trips byte for byte
            assert_eq!(restored, buf);
        }
        Ok(())
    }

    /// Builds a mid-battle snapshot: overlays on both active Pokemon,
    /// statuses, disable/toxic bookkeeping, and last-move tracking.
    fn mid_battle_snapshot(showdown: bool) -> anyhow::Result<crate::BattleData> {
        let opts = options(showdown);
        let buf = create(1, &opts)?;
        let mut snapshot = Battle::new(1, &buf, &opts.config)?.snapshot()?;

        snapshot.turn = 12;
        snapshot.last_damage = 88;

        {
            let side = &mut snapshot.sides[0];
            side.last_used_move = Some("bodyslam");
            side.last_selected_move = Some("bodyslam");
            side.last_selected_index = Some(1);
            side.last_move_counterable = true;

            let tauros = &mut side.pokemon[0];
            tauros.status = Some(Status::Paralysis);
            tauros.stats.spe = 79;
            tauros.boosts.atk = 2;
            tauros.boosts.spe = -1;
            tauros.volatiles.substitute = Some(Substitute { hp: 88 });
            tauros.volatiles.confusion = Some(Confusion { duration: 3 });
            tauros.moves[0].disabled = Some(4);
            tauros.hp = 265;
        }
        {
            let side = &mut snapshot.sides[1];
            let alakazam = &mut side.pokemon[0];
            alakazam.status = Some(Status::Toxic);
            alakazam.status_data.toxic = 2;
            alakazam.volatiles.toxic = Some(Toxic { stage: 2 });
            alakazam.volatiles.transform = Some(Transform { player: Player::P1, slot: 1 });
            alakazam.hp = 180;

            let chansey = &mut side.pokemon[1];
            chansey.status = Some(Status::Sleep);
            chansey.status_data.sleep = 3;
            chansey.status_data.self_inflicted = true;
        }
        Ok(snapshot)
    }

    #[test]
    fn test_round_trip_mid_battle() -> anyhow::Result<()> {
        for showdown in [true, false] {
            let cfg = config(showdown);
            let snapshot = mid_battle_snapshot(showdown)?;
            let buf = restore(1, &snapshot, &cfg)?;
            let again = Battle::new(1, &buf, &cfg)?.snapshot()?;
            assert_eq!(again, snapshot);
        }
        Ok(())
    }

    #[test]
    fn test_mid_battle_views() -> anyhow::Result<()> {
        let cfg = config(true);
        let snapshot = mid_battle_snapshot(true)?;
        let buf = restore(1, &snapshot, &cfg)?;
        let battle = Battle::new(1, &buf, &cfg)?;

        let tauros = battle.active(Player::P1).unwrap();
        assert!(tauros.is_active());
        assert_eq!(tauros.stats().spe, 79);
        assert_eq!(tauros.boosts().atk, 2);
        assert_eq!(tauros.move_slot(1).unwrap().disabled, Some(4));
        assert_eq!(tauros.volatiles().substitute, Some(Substitute { hp: 88 }));

        let alakazam = battle.active(Player::P2).unwrap();
        assert_eq!(alakazam.status(), Some(Status::Toxic));
        assert_eq!(
            alakazam.volatiles().transform,
            Some(Transform { player: Player::P1, slot: 1 })
        );

        let side = battle.side(Player::P1);
        assert_eq!(side.last_selected_index(), Some(1));
        assert!(side.last_move_counterable());
        assert_eq!(side.last_used_move(), Some("bodyslam"));
        Ok(())
    }

    #[test]
    fn test_active_stored_isolation() -> anyhow::Result<()> {
        let cfg = config(true);
        let snapshot = mid_battle_snapshot(true)?;
        let mut buf = restore(1, &snapshot, &cfg)?;

        {
            let battle = Battle::new(1, &buf, &cfg)?;
            let tauros = battle.side(Player::P1).get(1).unwrap();
            assert_eq!(tauros.stats().spe, 79);
            assert_eq!(tauros.stored().stats().spe, 318);

            let snorlax = battle.side(Player::P1).get(2).unwrap();
            assert!(!snorlax.is_active());
            assert_eq!(snorlax.stats(), snorlax.stored().stats());
            assert_eq!(snorlax.boosts(), Default::default());
            assert_eq!(snorlax.volatiles(), Default::default());
        }

        // writing the whole active region leaves every stored layer untouched
        let l = layout(1)?;
        let before: Vec<_> = (0..2)
            .map(|i| {
                let base = l.side_offset(i) + l.side.pokemon;
                buf[base..base + 6 * l.sizes.pokemon].to_vec()
            })
            .collect();
        let active = l.side_offset(0) + l.side.active;
        for byte in &mut buf[active..active + l.sizes.active] {
            *byte = 0xAA;
        }
        for (i, stored) in before.iter().enumerate() {
            let base = l.side_offset(i) + l.side.pokemon;
            assert_eq!(&buf[base..base + 6 * l.sizes.pokemon], &stored[..]);
        }
        let battle = Battle::new(1, &buf, &cfg)?;
        let tauros = battle.side(Player::P1).get(1).unwrap();
        assert_eq!(tauros.stored().stats().spe, 318);
        Ok(())
    }

    #[test]
    fn test_restore_rejects_sleep_mismatch() -> anyhow::Result<()> {
        let cfg = config(true);
        let mut snapshot = mid_battle_snapshot(true)?;
        snapshot.sides[1].pokemon[1].status = Some(Status::Burn);
        // sleep turns are still 3
        assert!(matches!(restore(1, &snapshot, &cfg), Err(StateError::Contract(_))));
        Ok(())
    }

    #[test]
    fn test_restore_rejects_toxic_without_counter() -> anyhow::Result<()> {
        let cfg = config(true);
        let mut snapshot = mid_battle_snapshot(true)?;
        snapshot.sides[1].pokemon[0].volatiles.toxic = None;
        snapshot.sides[1].pokemon[0].status_data.toxic = 0;
        assert!(matches!(restore(1, &snapshot, &cfg), Err(StateError::Contract(_))));
        Ok(())
    }

    #[test]
    fn test_classic_seed_rotation() -> anyhow::Result<()> {
        let cfg = config(false);
        let seed = [10u8, 20, 30, 40, 50, 60, 70, 80, 90];
        let mut opts = options(false);
        opts.seed = Seed::Classic(seed);
        let mut buf = create(1, &opts)?;

        // rewrite the physical seed rotated to index 4; the logical seed is
        // unchanged
        let l = layout(1)?;
        let offset = l.rng(false);
        let index = 4usize;
        for (i, byte) in (0..9).map(|i| seed[(i + 9 - index) % 9]).enumerate() {
            buf[offset + i] = byte;
        }
        buf[offset + 9] = index as u8;

        let battle = Battle::new(1, &buf, &cfg)?;
        assert_eq!(battle.prng(), Seed::Classic(seed));

        // restore re-encodes at rotation index zero: logical equality only
        let restored = restore(1, &battle.snapshot()?, &cfg)?;
        assert_eq!(restored[offset + 9], 0);
        assert_eq!(Battle::new(1, &restored, &cfg)?.prng(), Seed::Classic(seed));
        assert_ne!(&restored[offset..offset + 10], &buf[offset..offset + 10]);
        Ok(())
    }

    #[test]
    fn test_last_move_region_differs_by_mode() -> anyhow::Result<()> {
        let l = layout(1)?;
        for showdown in [true, false] {
            let cfg = config(showdown);
            let mut snapshot = mid_battle_snapshot(showdown)?;
            snapshot.sides[1].last_selected_index = Some(3);
            let buf = restore(1, &snapshot, &cfg)?;
            let width = l.last_moves_width(showdown);
            assert_eq!(buf[l.battle.last_moves], 0x11);
            assert_eq!(buf[l.battle.last_moves + width], 0x03);
            let battle = Battle::new(1, &buf, &cfg)?;
            assert_eq!(battle.side(Player::P2).last_selected_index(), Some(3));
            assert!(!battle.side(Player::P2).last_move_counterable());
        }
        Ok(())
    }
}
