use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "daystamp", version, about = "Daily check-in ledger")]
struct Cli {
    /// Directory holding the ledger file (defaults to the user data dir)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record today's check-in
    Checkin {
        #[command(flatten)]
        identity: commands::checkin::Identity,
    },
    /// Leaderboards
    Rank {
        #[command(subcommand)]
        action: commands::rank::RankAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Checkin { identity } => {
            commands::checkin::run(cli.data_dir.as_deref(), identity)
        }
        Commands::Rank { action } => commands::rank::run(cli.data_dir.as_deref(), action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
