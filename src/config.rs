use clap::Args;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Sentinel cap for the unlimited bracket.
pub const UNLIMITED_CP: i32 = 9999;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub leagues: LeagueParams,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Level ceiling for the half-level scan. 51.0 includes the best-buddy
    /// bonus levels.
    #[arg(long, default_value_t = 51.0)]
    pub max_level: f64,
}

#[derive(Args, Debug, Clone)]
pub struct LeagueParams {
    #[arg(long, default_value_t = 1500)]
    pub great_cap: i32,
    #[arg(long, default_value_t = 2500)]
    pub ultra_cap: i32,
    #[arg(long, default_value_t = UNLIMITED_CP)]
    pub master_cap: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchParams::default(),
            leagues: LeagueParams::default(),
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { max_level: 51.0 }
    }
}

impl Default for LeagueParams {
    fn default() -> Self {
        Self {
            great_cap: 1500,
            ultra_cap: 2500,
            master_cap: UNLIMITED_CP,
        }
    }
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum LeagueTier {
    Great,
    Ultra,
    Master,
}

impl LeagueTier {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Great => "Great League",
            Self::Ultra => "Ultra League",
            Self::Master => "Master League",
        }
    }
}

/// A competitive bracket's CP cap. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub name: String,
    pub max_cp: i32,
}

impl League {
    pub fn new(name: impl Into<String>, max_cp: i32) -> Self {
        Self {
            name: name.into(),
            max_cp,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_cp >= UNLIMITED_CP
    }
}

impl LeagueParams {
    pub fn league(&self, tier: LeagueTier) -> League {
        let cap = match tier {
            LeagueTier::Great => self.great_cap,
            LeagueTier::Ultra => self.ultra_cap,
            LeagueTier::Master => self.master_cap,
        };
        League::new(tier.display_name(), cap)
    }

    pub fn all(&self) -> Vec<League> {
        LeagueTier::iter().map(|tier| self.league(tier)).collect()
    }
}
