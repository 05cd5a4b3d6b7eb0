use leaguerank::cache::RankCache;
use leaguerank::config::League;
use leaguerank::error::LeagueRankError;
use leaguerank::species::{BaseStats, SpeciesNames, SpeciesRecord};
use std::sync::Arc;

fn record(pointer: &str, attack: i32, defense: i32, stamina: i32) -> SpeciesRecord {
    SpeciesRecord {
        pointer: pointer.to_string(),
        id: 1,
        form: "NORMAL".to_string(),
        names: SpeciesNames {
            en: pointer.to_string(),
            ko: String::new(),
        },
        aliases: vec![],
        stats: BaseStats {
            attack,
            defense,
            stamina,
        },
    }
}

#[test]
fn second_fetch_is_a_hit_not_a_rebuild() {
    let cache = RankCache::new(51.0).unwrap();
    let rec = record("198__NORMAL", 198, 189, 190);
    let league = League::new("Great League", 1500);

    let first = cache.get_or_build(&rec, &league).unwrap();
    let second = cache.get_or_build(&rec, &league).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.builds(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn keys_are_per_species_and_per_cap() {
    let cache = RankCache::new(51.0).unwrap();
    let a = record("184__NORMAL", 112, 152, 225);
    let b = record("308__NORMAL", 121, 152, 155);
    let great = League::new("Great League", 1500);
    let ultra = League::new("Ultra League", 2500);

    cache.get_or_build(&a, &great).unwrap();
    cache.get_or_build(&a, &ultra).unwrap();
    cache.get_or_build(&b, &great).unwrap();
    cache.get_or_build(&a, &great).unwrap(); // hit

    assert_eq!(cache.builds(), 3);
    assert_eq!(cache.len(), 3);
}

#[test]
fn clear_forces_a_rebuild() {
    let cache = RankCache::new(51.0).unwrap();
    let rec = record("184__NORMAL", 112, 152, 225);
    let league = League::new("Great League", 1500);

    cache.get_or_build(&rec, &league).unwrap();
    cache.clear();
    assert!(cache.is_empty());

    cache.get_or_build(&rec, &league).unwrap();
    assert_eq!(cache.builds(), 2);
}

#[test]
fn concurrent_first_requests_build_once() {
    let cache = Arc::new(RankCache::new(51.0).unwrap());
    let rec = record("198__NORMAL", 198, 189, 190);
    let league = League::new("Great League", 1500);

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let rec = rec.clone();
            let league = league.clone();
            scope.spawn(move || {
                let built = cache.get_or_build(&rec, &league).unwrap();
                assert!(!built.is_empty());
            });
        }
    });

    assert_eq!(cache.builds(), 1);
}

#[test]
fn ceiling_off_the_table_fails_at_construction() {
    let err = RankCache::new(70.0).unwrap_err();
    assert!(matches!(err, LeagueRankError::UnknownLevel { .. }));
    let err = RankCache::new(0.0).unwrap_err();
    assert!(matches!(err, LeagueRankError::UnknownLevel { .. }));
}
