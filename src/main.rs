// ===== leaguerank/src/main.rs =====
use clap::{Parser, Subcommand};
use leaguerank::api::{self, AppState};
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short = 'c', long, default_value = "data/species.json")]
    catalog: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Rank(cmd::rank::RankArgs),
    Check(cmd::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    println!("\n🚀 Initializing LeagueRank Core...");

    let max_level = match &cli.command {
        Commands::Rank(args) => args.config.search.max_level,
        Commands::Check(args) => args.config.search.max_level,
    };

    let state = match AppState::new(max_level) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("\n❌ FATAL: {}", e);
            process::exit(1);
        }
    };

    println!("📂 Loading Catalog: {}", cli.catalog);
    match api::load_catalog(&state, &cli.catalog) {
        Ok(msg) => println!("   {}", msg),
        Err(e) => {
            eprintln!("\n❌ FATAL: {}", e);
            process::exit(1);
        }
    }

    let outcome = match cli.command {
        Commands::Rank(args) => cmd::rank::run(args, &state),
        Commands::Check(args) => cmd::check::run(args, &state),
    };

    if let Err(e) = outcome {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
