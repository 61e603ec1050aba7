use std::path::Path;

use chrono::Local;
use clap::Subcommand;
use daystamp_core::rank::{self, DEFAULT_TOP_N};
use daystamp_core::Metric;

#[derive(Subcommand)]
pub enum RankAction {
    /// List the available leaderboards
    Menu,
    /// Top 10 by a metric
    Top {
        /// Context (group or private conversation) id
        #[arg(long)]
        context: String,
        /// Metric to rank by
        #[arg(long)]
        metric: Metric,
    },
    /// Users who checked in today, by streak length
    Today {
        /// Context (group or private conversation) id
        #[arg(long)]
        context: String,
    },
}

fn title_for(metric: Metric) -> &'static str {
    match metric {
        Metric::TotalDays => "All-time check-in days",
        Metric::ContinuousDays => "Longest current streaks",
        Metric::MonthDays => "Check-in days this month",
        Metric::TotalRewards => "All-time rewards",
        Metric::MonthRewards => "Rewards this month",
    }
}

pub fn run(data_dir: Option<&Path>, action: RankAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RankAction::Menu => {
            println!("📊 Leaderboards:");
            println!("  rank top --metric total-rewards   - all-time rewards");
            println!("  rank top --metric month-rewards   - rewards this month");
            println!("  rank top --metric total-days      - all-time check-in days");
            println!("  rank top --metric month-days      - check-in days this month");
            println!("  rank today                        - today's check-ins by streak");
        }
        RankAction::Top { context, metric } => {
            let ledger = super::open_store(data_dir)?.load();
            let ranked = rank::top_n(&ledger, &context, metric, DEFAULT_TOP_N);
            println!("{}", rank::format_rank(&ranked, title_for(metric), metric));
        }
        RankAction::Today { context } => {
            let ledger = super::open_store(data_dir)?.load();
            let today = Local::now().date_naive();
            let ranked = rank::today_rank(&ledger, &context, today, DEFAULT_TOP_N);
            println!(
                "{}",
                rank::format_rank(&ranked, "Today's check-ins", Metric::ContinuousDays)
            );
        }
    }
    Ok(())
}
