pub mod cpm;

use crate::error::LrResult;
use crate::ranker::types::IvTriple;
use crate::species::BaseStats;

/// Combat Power at an exact half-level index. Floored to the game's minimum
/// displayable CP of 10.
pub fn cp(base: &BaseStats, level_idx: u16, iv: IvTriple) -> LrResult<i32> {
    let m = cpm::multiplier(level_idx)?;
    let atk = (base.attack + iv.attack as i32) as f64;
    let def = (base.defense + iv.defense as i32) as f64;
    let sta = (base.stamina + iv.hp as i32) as f64;
    let raw = atk * def.sqrt() * sta.sqrt() * m * m / 10.0;
    Ok((raw.floor() as i32).max(10))
}

/// Stat-product fitness score at an exact half-level index.
///
/// Attack and defense stay continuous while HP is floored: in-game HP is an
/// integer stat, the other two feed battle damage as continuous multipliers.
/// The asymmetry is the game's rule, not an approximation.
pub fn stat_product(base: &BaseStats, level_idx: u16, iv: IvTriple) -> LrResult<f64> {
    let m = cpm::multiplier(level_idx)?;
    let atk = (base.attack + iv.attack as i32) as f64 * m;
    let def = (base.defense + iv.defense as i32) as f64 * m;
    let hp = ((base.stamina + iv.hp as i32) as f64 * m).floor();
    Ok(atk * def * hp)
}
