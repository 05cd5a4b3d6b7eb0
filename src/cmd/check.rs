use crate::reports;
use clap::Args;
use leaguerank::api::{self, AppState};
use leaguerank::config::{Config, LeagueTier};

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: Config,

    /// Species name or alias.
    pub name: String,

    #[arg(short, long, default_value_t = LeagueTier::Great)]
    pub league: LeagueTier,

    /// IV rows in shorthand: "0/14/15", "0.1.1", or a 6-digit run "000805".
    #[arg(required = true)]
    pub ivs: Vec<String>,
}

pub fn run(args: CheckArgs, state: &AppState) -> Result<(), String> {
    let league = args.config.leagues.league(args.league);
    let rows = api::evaluate_rows(state, &args.name, &league, &args.ivs)?;

    println!("\n🔎 === {} — {} === 🔎", args.name, league.name);
    reports::print_rows(&args.ivs, &rows, &league);
    Ok(())
}
