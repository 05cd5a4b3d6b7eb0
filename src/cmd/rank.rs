use crate::reports;
use clap::Args;
use leaguerank::api::{self, AppState};
use leaguerank::config::{Config, LeagueTier};

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub config: Config,

    /// Species name or alias.
    pub name: String,

    #[arg(short, long, default_value_t = LeagueTier::Great)]
    pub league: LeagueTier,

    /// Rows to print (0 = every surviving combo).
    #[arg(short, long, default_value_t = 25)]
    pub top: usize,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: RankArgs, state: &AppState) -> Result<(), String> {
    let league = args.config.leagues.league(args.league);
    let view = api::rank_species(state, &args.name, &league, args.top)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    if view.combos.is_empty() {
        println!(
            "\n⚠️  No IV combination of {} fits under {} (cap {}).",
            view.species, league.name, league.max_cp
        );
        return Ok(());
    }

    reports::print_ranking(&view);
    Ok(())
}
