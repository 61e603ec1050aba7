use std::path::Path;

use chrono::Local;
use clap::Args;
use daystamp_core::{CheckInEngine, MessagePool, Outcome};

#[derive(Args)]
pub struct Identity {
    /// Context (group or private conversation) id
    #[arg(long)]
    pub context: String,

    /// Stable user id
    #[arg(long)]
    pub user: String,

    /// Display name shown on leaderboards
    #[arg(long, default_value = "")]
    pub name: String,
}

pub fn run(data_dir: Option<&Path>, identity: Identity) -> Result<(), Box<dyn std::error::Error>> {
    let store = match super::open_store(data_dir) {
        Ok(store) => store,
        Err(e) => {
            // The store is the only fallible collaborator; a user retry is
            // the recovery path, so degrade to a friendly line.
            tracing::error!(error = %e, "check-in unavailable: could not open ledger store");
            println!("🔧 Check-in is temporarily unavailable, please try again later");
            return Ok(());
        }
    };

    let mut engine = CheckInEngine::new(store);
    let today = Local::now().date_naive();

    match engine.process_check_in(&identity.context, &identity.user, &identity.name, today) {
        Outcome::Duplicate => {
            println!("⚠️ Already checked in today, come back tomorrow");
        }
        Outcome::Success {
            record,
            reward,
            date,
        } => {
            let message = MessagePool::default().pick().to_string();
            println!("✨ Check-in complete!");
            println!("🎉 Thanks for checking in, {}!", record.display_name);
            println!("📅 Date: {date}");
            println!("📈 Total days: {}", record.total_days);
            println!("📆 Days this month: {}", record.month_days);
            println!("💎 Total rewards: {}", record.total_rewards);
            println!("🌟 Rewards this month: {}", record.month_rewards);
            println!("🔥 Current streak: {} days", record.continuous_days);
            println!("🎁 Reward earned: {reward}");
            println!("💬 {message}");
        }
    }
    Ok(())
}
