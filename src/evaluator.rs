use serde::Serialize;

use crate::config::League;
use crate::error::LrResult;
use crate::ranker::search;
use crate::ranker::types::{IvTriple, SpeciesComboCache};
use crate::ranker::{eps_eq, eps_gt};
use crate::species::BaseStats;

/// Parses compact IV shorthand: three tokens separated by `/ . , -` or
/// whitespace ("0/14/15", "0.1.1"), or a bare 6-digit run split into 2-digit
/// pairs ("000805" -> 0/8/5). Anything else, including out-of-range values,
/// is simply "no input", not an error.
pub fn parse_iv_shorthand(input: &str) -> Option<IvTriple> {
    const SEPARATORS: &[char] = &['/', '.', ',', '-'];

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed
        .split(|c: char| SEPARATORS.contains(&c) || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() == 3 {
        let mut values = [0u8; 3];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            *slot = token.parse().ok()?;
        }
        return IvTriple::new(values[0], values[1], values[2]);
    }

    if trimmed.len() == 6 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let pair = |i: usize| trimmed[i..i + 2].parse::<u8>().ok();
        return IvTriple::new(pair(0)?, pair(2)?, pair(4)?);
    }

    None
}

/// One user row mapped onto the cached ranking. A feasible triple carries its
/// rank; a triple over the cap even at level 1.0 still reports the floor-level
/// CP so the caller can render an over-cap warning, but has no rank.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowEvaluation {
    pub iv: IvTriple,
    pub level: f64,
    pub cp: i32,
    pub stat_product: f64,
    pub rank_position: Option<u32>,
    pub rank_percent: Option<f64>,
    /// Best among the rows the user entered, which is a different claim than
    /// best in the league.
    pub is_optimal: bool,
}

pub fn evaluate_row(
    base: &BaseStats,
    league: &League,
    cache: &SpeciesComboCache,
    max_level_idx: u16,
    iv: IvTriple,
) -> LrResult<RowEvaluation> {
    if let Some(combo) = cache.combo_map.get(&iv) {
        return Ok(RowEvaluation {
            iv,
            level: combo.level(),
            cp: combo.cp,
            stat_product: combo.stat_product,
            rank_position: cache.rank_map.get(&iv).copied(),
            rank_percent: Some(cache.rank_percent_of(combo.stat_product)),
            is_optimal: false,
        });
    }

    let result = search::best_level_for_iv(base, league, iv, max_level_idx)?;
    Ok(RowEvaluation {
        iv,
        level: result.level(),
        cp: result.cp,
        stat_product: result.stat_product,
        rank_position: None,
        rank_percent: None,
        is_optimal: false,
    })
}

/// Evaluates a set of user rows and flags the best one(s).
///
/// `rows` holds `None` for rows whose shorthand did not parse; those come
/// back as `None` untouched. Only ranked rows participate in the selection,
/// compared by rank percent descending, then rank position ascending, then
/// stat product descending (epsilon-aware). Every row tying with the winner
/// under the same comparisons is also flagged.
pub fn evaluate_rows(
    base: &BaseStats,
    league: &League,
    cache: &SpeciesComboCache,
    max_level_idx: u16,
    rows: &[Option<IvTriple>],
) -> LrResult<Vec<Option<RowEvaluation>>> {
    let mut evals: Vec<Option<RowEvaluation>> = Vec::with_capacity(rows.len());
    for row in rows {
        evals.push(match row {
            Some(iv) => Some(evaluate_row(base, league, cache, max_level_idx, *iv)?),
            None => None,
        });
    }

    let winner = evals
        .iter()
        .flatten()
        .filter(|e| e.rank_percent.is_some())
        .fold(None::<RowEvaluation>, |best, e| match best {
            Some(b) if !beats(e, &b) => Some(b),
            _ => Some(e.clone()),
        });

    if let Some(winner) = winner {
        for eval in evals.iter_mut().flatten() {
            eval.is_optimal = ties_with(eval, &winner);
        }
    }

    Ok(evals)
}

/// Strictly better under the row-selection chain. Note this chain differs
/// from the enumerator's sort order on purpose; unifying them could silently
/// change which row gets flagged.
fn beats(a: &RowEvaluation, b: &RowEvaluation) -> bool {
    let (pa, pb) = (a.rank_percent.unwrap_or(0.0), b.rank_percent.unwrap_or(0.0));
    if !eps_eq(pa, pb) {
        return eps_gt(pa, pb);
    }
    let (ra, rb) = (
        a.rank_position.unwrap_or(u32::MAX),
        b.rank_position.unwrap_or(u32::MAX),
    );
    if ra != rb {
        return ra < rb;
    }
    eps_gt(a.stat_product, b.stat_product)
}

fn ties_with(a: &RowEvaluation, b: &RowEvaluation) -> bool {
    a.rank_percent.is_some()
        && eps_eq(
            a.rank_percent.unwrap_or(0.0),
            b.rank_percent.unwrap_or(0.0),
        )
        && a.rank_position == b.rank_position
        && eps_eq(a.stat_product, b.stat_product)
}
