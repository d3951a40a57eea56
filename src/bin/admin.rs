//! CLI administration tool for visit-dashboard.
//!
//! Works directly on the visit file, so it can be used while the server is
//! stopped. Running `visits reset` against a live server is overwritten by
//! the server's in-memory counters on the next visit.
//!
//! # Usage
//!
//! ```bash
//! # Show the counters and the last seven days
//! cargo run --bin admin -- visits show
//!
//! # Reset all counters
//! cargo run --bin admin -- visits reset
//!
//! # Produce an Argon2 hash for a password
//! cargo run --bin admin -- hash-password
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_FILE` (optional): visit file path (default: `data/visits.json`)

use visit_dashboard::domain::entities::VisitRecord;
use visit_dashboard::domain::repositories::VisitRepository;
use visit_dashboard::infrastructure::persistence::JsonVisitRepository;
use visit_dashboard::infrastructure::security::hash_password;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Password};
use std::path::PathBuf;

/// CLI tool for managing visit-dashboard.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Visit file to operate on (overrides `DATA_FILE`)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect or reset visit counters
    Visits {
        #[command(subcommand)]
        action: VisitsAction,
    },

    /// Print an Argon2 hash for a password read from the terminal
    HashPassword,
}

/// Visit counter subcommands.
#[derive(Subcommand)]
enum VisitsAction {
    /// Show total and last seven days
    Show,

    /// Reset all counters to zero
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let data_file = cli
        .data_file
        .or_else(|| std::env::var("DATA_FILE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data/visits.json"));

    match cli.command {
        Commands::Visits { action } => {
            let repo = JsonVisitRepository::new(data_file);
            match action {
                VisitsAction::Show => show_visits(&repo).await?,
                VisitsAction::Reset { yes } => reset_visits(&repo, yes).await?,
            }
        }
        Commands::HashPassword => print_password_hash()?,
    }

    Ok(())
}

/// Prints the counters as a seven-day table.
///
/// # Output Format
///
/// ```text
/// Visits (data/visits.json)
///
///   Total: 42
///
///   Date         Day      Visits
///   ──────────────────────────────
///   2026-10-11   dom 11   0
///   ...
/// ```
async fn show_visits(repo: &JsonVisitRepository) -> Result<()> {
    println!(
        "{} {}",
        "Visits".bright_blue().bold(),
        format!("({})", repo.path().display()).bright_black()
    );
    println!();

    let record = repo
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read visit file: {}", e))?;

    let weekly = record.weekly(Utc::now().date_naive());

    println!("  Total: {}", record.total.to_string().bright_white().bold());
    println!();
    println!(
        "  {:<12} {:<8} {}",
        "Date".bright_white().bold(),
        "Day".bright_white().bold(),
        "Visits".bright_white().bold()
    );
    println!("  {}", "─".repeat(30).bright_black());

    for day in &weekly.days {
        let count = if day.count == 0 {
            day.count.to_string().bright_black()
        } else {
            day.count.to_string().green()
        };

        println!("  {:<12} {:<8} {}", day.date.cyan(), day.label, count);
    }

    let week_total: u64 = weekly.days.iter().map(|d| d.count).sum();
    println!();
    println!(
        "  Last 7 days: {}",
        week_total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Rewrites the visit file with an empty record after confirmation.
async fn reset_visits(repo: &JsonVisitRepository, skip_confirm: bool) -> Result<()> {
    println!("{}", "Reset visit counters".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Erase all counters in {}?", repo.path().display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    repo.save(&VisitRecord::default())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write visit file: {}", e))?;

    println!("{}", "Counters reset".green().bold());
    println!();

    Ok(())
}

/// Prompts twice for a password and prints its salted hash.
fn print_password_hash() -> Result<()> {
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    let hash = hash_password(&password).map_err(|e| anyhow::anyhow!("Hashing failed: {}", e))?;

    println!();
    println!("{}", hash.bright_yellow());

    Ok(())
}
