use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::config::League;
use crate::error::{LeagueRankError, LrResult};
use crate::formulas::cpm;
use crate::ranker;
use crate::ranker::types::SpeciesComboCache;
use crate::species::SpeciesRecord;

/// Species/form identity plus the league cap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub pointer: String,
    pub max_cp: i32,
}

/// Process-scoped memo of per-(species, league) rankings.
///
/// Entries live for the process lifetime; the domain is bounded
/// (#species x #leagues, each O(4096)), so there is no eviction. `clear`
/// serves the external cold-reload trigger on data-version changes.
#[derive(Debug)]
pub struct RankCache {
    max_level: f64,
    entries: Mutex<HashMap<CacheKey, Arc<SpeciesComboCache>>>,
    builds: AtomicUsize,
}

impl RankCache {
    /// Fails with `UnknownLevel` when the ceiling falls off the multiplier
    /// table, so later builds cannot hit a table miss.
    pub fn new(max_level: f64) -> LrResult<Self> {
        cpm::index_for_level(max_level)?;
        Ok(Self {
            max_level,
            entries: Mutex::new(HashMap::new()),
            builds: AtomicUsize::new(0),
        })
    }

    pub fn max_level(&self) -> f64 {
        self.max_level
    }

    /// Ranking for (species, league), built synchronously on first request.
    ///
    /// The build runs while holding the map lock: concurrent callers for the
    /// same key block until the first build lands and then read the finished
    /// entry, so each key is computed at most once.
    pub fn get_or_build(
        &self,
        record: &SpeciesRecord,
        league: &League,
    ) -> LrResult<Arc<SpeciesComboCache>> {
        let key = CacheKey {
            pointer: record.pointer.clone(),
            max_cp: league.max_cp,
        };

        let mut entries = self.entries.lock().map_err(|_| LeagueRankError::Lock)?;
        if let Some(hit) = entries.get(&key) {
            return Ok(Arc::clone(hit));
        }

        debug!(pointer = %key.pointer, max_cp = key.max_cp, "building species ranking");
        let built = Arc::new(ranker::build_species_cache(
            &record.stats,
            league,
            self.max_level,
        )?);
        self.builds.fetch_add(1, Ordering::Relaxed);
        entries.insert(key, Arc::clone(&built));
        Ok(built)
    }

    /// Number of enumeration sweeps actually performed.
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry. Callers invoke this when the species data version
    /// changes; entries are rebuilt lazily afterwards.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}
