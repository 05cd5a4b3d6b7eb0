use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::formulas::cpm;

pub const IV_MAX: u8 = 15;

/// One individual-value roll. Each stat is 0..=15, giving 4096 triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IvTriple {
    pub attack: u8,
    pub defense: u8,
    pub hp: u8,
}

impl IvTriple {
    /// Validating constructor; `None` when any stat is out of range.
    pub fn new(attack: u8, defense: u8, hp: u8) -> Option<Self> {
        if attack <= IV_MAX && defense <= IV_MAX && hp <= IV_MAX {
            Some(Self {
                attack,
                defense,
                hp,
            })
        } else {
            None
        }
    }

    /// All 4096 triples in (attack, defense, hp) lexicographic order.
    pub fn all() -> impl Iterator<Item = IvTriple> {
        (0..=IV_MAX).flat_map(|attack| {
            (0..=IV_MAX).flat_map(move |defense| {
                (0..=IV_MAX).map(move |hp| IvTriple {
                    attack,
                    defense,
                    hp,
                })
            })
        })
    }
}

impl fmt::Display for IvTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.attack, self.defense, self.hp)
    }
}

/// Optimal level for one IV triple under one league, and its derived values.
/// Invariant: stored results always satisfy `cp <= league.max_cp`; triples
/// that violate the cap even at level 1.0 are excluded, never stored.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComboResult {
    pub level_idx: u16,
    pub cp: i32,
    pub stat_product: f64,
}

impl ComboResult {
    pub fn level(&self) -> f64 {
        cpm::level_from_idx(self.level_idx)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCombo {
    pub iv: IvTriple,
    pub level: f64,
    pub cp: i32,
    pub stat_product: f64,
    /// 1-based dense competition rank: ties share a rank, the next distinct
    /// entry resumes at its list position (1,1,3 not 1,1,2).
    pub rank_position: u32,
    /// `stat_product / max_stat_product * 100`, clamped into [0, 100].
    pub rank_percent: f64,
}

/// Full per-(species, league) computation result. Built once, then read-only.
#[derive(Debug, Clone, Default)]
pub struct SpeciesComboCache {
    pub combo_map: HashMap<IvTriple, ComboResult>,
    pub rank_map: HashMap<IvTriple, u32>,
    pub max_stat_product: f64,
    /// Globally best triple; `None` when no triple fits under the cap.
    pub optimal: Option<IvTriple>,
    /// All surviving combos sorted best-to-worst.
    pub ranked: Vec<RankedCombo>,
}

impl SpeciesComboCache {
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn rank_percent_of(&self, stat_product: f64) -> f64 {
        if self.max_stat_product <= 0.0 {
            return 0.0;
        }
        (stat_product / self.max_stat_product * 100.0).clamp(0.0, 100.0)
    }
}
