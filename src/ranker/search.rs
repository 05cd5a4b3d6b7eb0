use crate::config::League;
use crate::error::LrResult;
use crate::formulas::{self, cpm};
use crate::ranker::types::{ComboResult, IvTriple};
use crate::species::BaseStats;

/// Maximum half-level whose CP stays at or under the league cap.
///
/// CP is non-decreasing in level, so a forward scan that stops at the first
/// violation finds the maximum feasible level without backtracking. When even
/// level 1.0 exceeds the cap the level-1.0 result is returned as-is; deciding
/// that the triple is infeasible for the league is the enumerator's call, not
/// this function's.
pub fn best_level_for_iv(
    base: &BaseStats,
    league: &League,
    iv: IvTriple,
    max_level_idx: u16,
) -> LrResult<ComboResult> {
    let mut chosen_idx = cpm::MIN_LEVEL_IDX;
    let mut chosen_cp = formulas::cp(base, chosen_idx, iv)?;

    if chosen_cp <= league.max_cp {
        let mut idx = cpm::MIN_LEVEL_IDX + 1;
        while idx <= max_level_idx {
            let cp = formulas::cp(base, idx, iv)?;
            if cp > league.max_cp {
                break;
            }
            chosen_idx = idx;
            chosen_cp = cp;
            idx += 1;
        }
    }

    Ok(ComboResult {
        level_idx: chosen_idx,
        cp: chosen_cp,
        stat_product: formulas::stat_product(base, chosen_idx, iv)?,
    })
}
