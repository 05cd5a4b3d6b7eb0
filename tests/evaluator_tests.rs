use leaguerank::config::League;
use leaguerank::evaluator::{self, parse_iv_shorthand};
use leaguerank::formulas::cpm;
use leaguerank::ranker::{self, types::IvTriple};
use leaguerank::species::BaseStats;
use rstest::rstest;

#[rstest]
#[case("0/14/15", Some((0, 14, 15)))]
#[case("0.1.1", Some((0, 1, 1)))]
#[case("000805", Some((0, 8, 5)))]
#[case("15-15-15", Some((15, 15, 15)))]
#[case("0 14 15", Some((0, 14, 15)))]
#[case("  3 , 7 , 11 ", Some((3, 7, 11)))]
#[case("001500", Some((0, 15, 0)))]
#[case("16/0/0", None)] // out of range
#[case("0/14/16", None)]
#[case("123456", None)] // 2-digit pairs out of range
#[case("", None)]
#[case("   ", None)]
#[case("1/2", None)] // two tokens, not six digits
#[case("1/2/3/4", None)]
#[case("a/b/c", None)]
#[case("abcdef", None)]
#[case("0//14/15", Some((0, 14, 15)))] // repeated separators collapse
fn shorthand_parsing(#[case] input: &str, #[case] expected: Option<(u8, u8, u8)>) {
    let expected = expected.map(|(a, d, h)| IvTriple::new(a, d, h).unwrap());
    assert_eq!(parse_iv_shorthand(input), expected);
}

fn azumarill() -> BaseStats {
    BaseStats {
        attack: 112,
        defense: 152,
        stamina: 225,
    }
}

fn great() -> League {
    League::new("Great League", 1500)
}

#[test]
fn rows_get_ranked_and_the_best_is_flagged() {
    let base = azumarill();
    let league = great();
    let cache = ranker::build_species_cache(&base, &league, 51.0).unwrap();
    let best_iv = cache.optimal.unwrap();

    let rows = vec![
        Some(IvTriple::new(0, 0, 0).unwrap()),
        Some(best_iv),
        None, // unparseable input stays blank
        Some(IvTriple::new(15, 15, 15).unwrap()),
    ];
    let evals =
        evaluator::evaluate_rows(&base, &league, &cache, cpm::MAX_LEVEL_IDX, &rows).unwrap();

    assert_eq!(evals.len(), 4);
    assert!(evals[2].is_none());

    let best_row = evals[1].as_ref().unwrap();
    assert!(best_row.is_optimal);
    assert_eq!(best_row.rank_position, Some(1));
    assert!((best_row.rank_percent.unwrap() - 100.0).abs() <= 1e-6);

    for i in [0usize, 3] {
        let row = evals[i].as_ref().unwrap();
        assert!(!row.is_optimal);
        assert!(row.rank_position.unwrap() > 1);
        assert!(row.cp <= 1500);
    }
}

#[test]
fn duplicate_winners_are_all_flagged() {
    let base = azumarill();
    let league = great();
    let cache = ranker::build_species_cache(&base, &league, 51.0).unwrap();
    let best_iv = cache.optimal.unwrap();

    let rows = vec![Some(best_iv), Some(best_iv)];
    let evals =
        evaluator::evaluate_rows(&base, &league, &cache, cpm::MAX_LEVEL_IDX, &rows).unwrap();

    assert!(evals[0].as_ref().unwrap().is_optimal);
    assert!(evals[1].as_ref().unwrap().is_optimal);
}

#[test]
fn over_cap_rows_report_floor_values_without_rank() {
    // Giant stats against a 100 CP cap: nothing is feasible, but a valid row
    // still reports its level-1.0 CP so the caller can warn.
    let base = BaseStats {
        attack: 600,
        defense: 600,
        stamina: 600,
    };
    let league = League::new("tiny", 100);
    let cache = ranker::build_species_cache(&base, &league, 51.0).unwrap();
    assert!(cache.is_empty());

    let rows = vec![Some(IvTriple::new(0, 0, 0).unwrap())];
    let evals =
        evaluator::evaluate_rows(&base, &league, &cache, cpm::MAX_LEVEL_IDX, &rows).unwrap();

    let row = evals[0].as_ref().unwrap();
    assert_eq!(row.level, 1.0);
    assert!(row.cp > 100);
    assert_eq!(row.rank_position, None);
    assert_eq!(row.rank_percent, None);
    // Unranked rows never win the best-among-rows flag.
    assert!(!row.is_optimal);
}

#[test]
fn no_valid_rows_means_no_winner() {
    let base = azumarill();
    let league = great();
    let cache = ranker::build_species_cache(&base, &league, 51.0).unwrap();

    let rows = vec![None, None];
    let evals =
        evaluator::evaluate_rows(&base, &league, &cache, cpm::MAX_LEVEL_IDX, &rows).unwrap();
    assert!(evals.iter().all(|e| e.is_none()));
}

#[test]
fn winner_selection_prefers_higher_percent_then_lower_rank() {
    let base = azumarill();
    let league = great();
    let cache = ranker::build_species_cache(&base, &league, 51.0).unwrap();

    // Pick three distinct entries straight off the ranked list: the first is
    // the winner, the others are strictly worse.
    let picks: Vec<IvTriple> = cache.ranked.iter().map(|c| c.iv).take(3).collect();
    let rows: Vec<Option<IvTriple>> = picks.iter().copied().map(Some).collect();
    let evals =
        evaluator::evaluate_rows(&base, &league, &cache, cpm::MAX_LEVEL_IDX, &rows).unwrap();

    assert!(evals[0].as_ref().unwrap().is_optimal);
}
