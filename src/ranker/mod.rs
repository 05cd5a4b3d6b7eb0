pub mod search;
pub mod types;

use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::League;
use crate::error::LrResult;
use crate::formulas::cpm;
use crate::species::BaseStats;
use types::{ComboResult, IvTriple, RankedCombo, SpeciesComboCache};

/// Absolute tolerance absorbing floating-point noise from the sqrt/multiply
/// chain. Every comparison in sorting, ranking and row selection goes through
/// this; exact float equality is never used.
pub const FLOAT_EPSILON: f64 = 1e-6;

pub fn eps_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= FLOAT_EPSILON
}

pub fn eps_gt(a: f64, b: f64) -> bool {
    a - b > FLOAT_EPSILON
}

/// Sort order of the ranked list: stat product descending, then CP
/// descending, then level ascending (prefer the cheapest investment).
fn cmp_combos(a: &ComboResult, b: &ComboResult) -> Ordering {
    if !eps_eq(a.stat_product, b.stat_product) {
        return b
            .stat_product
            .partial_cmp(&a.stat_product)
            .unwrap_or(Ordering::Equal);
    }
    b.cp.cmp(&a.cp).then_with(|| a.level_idx.cmp(&b.level_idx))
}

/// True when two results land in the same dense-rank tie group, i.e. all
/// three sort keys match within epsilon.
fn same_rank_group(a: &ComboResult, b: &ComboResult) -> bool {
    eps_eq(a.stat_product, b.stat_product) && a.cp == b.cp && a.level_idx == b.level_idx
}

/// Enumerates all 4096 IV triples for one (species, league) pair, keeps the
/// ones that fit under the cap, and ranks them.
pub fn build_species_cache(
    base: &BaseStats,
    league: &League,
    max_level: f64,
) -> LrResult<SpeciesComboCache> {
    let max_level_idx = cpm::index_for_level(max_level)?;

    // The sweep is pure and CPU-bound: 4096 points, each scanning up to ~100
    // half-levels.
    let all: Vec<IvTriple> = IvTriple::all().collect();
    let results: Vec<(IvTriple, ComboResult)> = all
        .into_par_iter()
        .map(|iv| search::best_level_for_iv(base, league, iv, max_level_idx).map(|r| (iv, r)))
        .collect::<LrResult<Vec<_>>>()?;

    // Triples over the cap even at level 1.0 are infeasible for this league.
    let mut combos: Vec<(IvTriple, ComboResult)> = results
        .into_iter()
        .filter(|(_, r)| r.cp <= league.max_cp)
        .collect();

    if combos.is_empty() {
        return Ok(SpeciesComboCache::default());
    }

    combos.sort_by(|(_, a), (_, b)| cmp_combos(a, b));

    let mut combo_map = HashMap::with_capacity(combos.len());
    let mut rank_map = HashMap::with_capacity(combos.len());
    let mut max_stat_product = 0.0f64;
    let mut current_rank = 1u32;

    for (i, (iv, result)) in combos.iter().enumerate() {
        if i > 0 && !same_rank_group(&combos[i - 1].1, result) {
            current_rank = (i + 1) as u32;
        }
        combo_map.insert(*iv, *result);
        rank_map.insert(*iv, current_rank);
        if result.stat_product > max_stat_product {
            max_stat_product = result.stat_product;
        }
    }

    let optimal = combos.first().map(|(iv, _)| *iv);

    let ranked: Vec<RankedCombo> = combos
        .iter()
        .map(|(iv, result)| RankedCombo {
            iv: *iv,
            level: result.level(),
            cp: result.cp,
            stat_product: result.stat_product,
            rank_position: rank_map[iv],
            rank_percent: percent_of(result.stat_product, max_stat_product),
        })
        .collect();

    Ok(SpeciesComboCache {
        combo_map,
        rank_map,
        max_stat_product,
        optimal,
        ranked,
    })
}

/// Best combo for a (species, league) without building the full ranking.
/// `None` when no triple fits under the cap at any level.
pub fn optimal_combo(
    base: &BaseStats,
    league: &League,
    max_level: f64,
) -> LrResult<Option<(IvTriple, ComboResult)>> {
    let max_level_idx = cpm::index_for_level(max_level)?;

    let mut best: Option<(IvTriple, ComboResult)> = None;
    for iv in IvTriple::all() {
        let result = search::best_level_for_iv(base, league, iv, max_level_idx)?;
        if result.cp > league.max_cp {
            continue;
        }
        let replace = match &best {
            Some((_, b)) => result.stat_product > b.stat_product,
            None => true,
        };
        if replace {
            best = Some((iv, result));
        }
    }
    Ok(best)
}

fn percent_of(stat_product: f64, max_stat_product: f64) -> f64 {
    if max_stat_product <= 0.0 {
        return 0.0;
    }
    (stat_product / max_stat_product * 100.0).clamp(0.0, 100.0)
}
