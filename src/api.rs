// ===== leaguerank/src/api.rs =====
use serde::Serialize;
use std::sync::Mutex;

use crate::cache::RankCache;
use crate::config::League;
use crate::evaluator::{self, RowEvaluation};
use crate::formulas::cpm;
use crate::ranker::types::{IvTriple, RankedCombo};
use crate::species::SpeciesCatalog;

/// The global state required to run ranking services.
pub struct AppState {
    pub catalog: Mutex<Option<SpeciesCatalog>>,
    pub cache: RankCache,
}

impl AppState {
    pub fn new(max_level: f64) -> Result<Self, String> {
        Ok(Self {
            catalog: Mutex::new(None),
            cache: RankCache::new(max_level).map_err(|e| e.to_string())?,
        })
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RankingView {
    pub species: String,
    pub pointer: String,
    pub league: League,
    pub max_stat_product: f64,
    pub optimal: Option<IvTriple>,
    pub total_combos: usize,
    pub combos: Vec<RankedCombo>,
}

/// Service: load the species catalog from a JSON file.
pub fn load_catalog(state: &AppState, path: &str) -> Result<String, String> {
    let catalog = SpeciesCatalog::load_from_file(path).map_err(|e| e.to_string())?;
    let count = catalog.len();

    let mut guard = state.catalog.lock().map_err(|e| e.to_string())?;
    *guard = Some(catalog);

    // A new data version invalidates every ranking.
    state.cache.clear();

    Ok(format!("Loaded {} species entries", count))
}

/// Service: full ranking for a species/league, cache-gated. `top == 0` means
/// all surviving combos.
pub fn rank_species(
    state: &AppState,
    name: &str,
    league: &League,
    top: usize,
) -> Result<RankingView, String> {
    let guard = state.catalog.lock().map_err(|e| e.to_string())?;
    let catalog = guard
        .as_ref()
        .ok_or("Catalog not loaded. Load a dataset first.")?;
    let (record, display) = catalog
        .find_by_name(name)
        .ok_or_else(|| format!("Unknown species '{}'", name))?;

    let cache = state
        .cache
        .get_or_build(record, league)
        .map_err(|e| e.to_string())?;

    let combos = if top == 0 {
        cache.ranked.clone()
    } else {
        cache.ranked.iter().take(top).cloned().collect()
    };

    Ok(RankingView {
        species: display.to_string(),
        pointer: record.pointer.clone(),
        league: league.clone(),
        max_stat_product: cache.max_stat_product,
        optimal: cache.optimal,
        total_combos: cache.ranked.len(),
        combos,
    })
}

/// Service: evaluate user-entered shorthand rows against the cached ranking
/// and flag the best among them. Unparseable rows come back as `None`.
pub fn evaluate_rows(
    state: &AppState,
    name: &str,
    league: &League,
    raw_rows: &[String],
) -> Result<Vec<Option<RowEvaluation>>, String> {
    let guard = state.catalog.lock().map_err(|e| e.to_string())?;
    let catalog = guard
        .as_ref()
        .ok_or("Catalog not loaded. Load a dataset first.")?;
    let (record, _) = catalog
        .find_by_name(name)
        .ok_or_else(|| format!("Unknown species '{}'", name))?;

    let cache = state
        .cache
        .get_or_build(record, league)
        .map_err(|e| e.to_string())?;
    let max_level_idx =
        cpm::index_for_level(state.cache.max_level()).map_err(|e| e.to_string())?;

    let rows: Vec<Option<IvTriple>> = raw_rows
        .iter()
        .map(|raw| evaluator::parse_iv_shorthand(raw))
        .collect();

    evaluator::evaluate_rows(&record.stats, league, &cache, max_level_idx, &rows)
        .map_err(|e| e.to_string())
}
