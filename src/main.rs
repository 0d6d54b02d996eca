/// Command line entry point for the habit stats engine
///
/// Loads a JSON export of completion records, runs the stats facade over
/// them, and prints the composed report. Useful for inspecting what the
/// engine computes for a given ledger snapshot.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use habit_stats::{calendar, compute_user_stats_as_of, load_records, StatsError, UserId};

/// Command line arguments for the habit stats report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON file containing an array of completion records
    #[arg(long)]
    file: PathBuf,

    /// Only include completions belonging to this user ID
    #[arg(long)]
    user: Option<String>,

    /// Active habit count used as the gold-star and rate denominator
    /// (defaults to the number of distinct habits in the file)
    #[arg(long)]
    habits: Option<u32>,

    /// Compute relative to this day instead of today (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_stats={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    info!("Loading completion records from {}", args.file.display());

    let mut records = load_records(&args.file)?;

    if let Some(user_str) = &args.user {
        let user_id = UserId::from_string(user_str)
            .map_err(|e| format!("Invalid user ID '{}': {}", user_str, e))?;
        records.retain(|r| r.user_id == user_id);
        info!("{} records remain after filtering to user {}", records.len(), user_id);
    }

    let as_of = match &args.as_of {
        Some(day_str) => calendar::parse_day(day_str).map_err(StatsError::Domain)?,
        None => calendar::today(),
    };

    let habit_count = args.habits.unwrap_or_else(|| {
        records
            .iter()
            .map(|r| &r.habit_id)
            .collect::<HashSet<_>>()
            .len() as u32
    });

    let stats = compute_user_stats_as_of(&records, habit_count, as_of);

    println!("📊 Habit stats as of {}", as_of);
    println!();
    println!(
        "🔥 Streak: {} days (best: {} days)",
        stats.current_streak, stats.longest_streak
    );
    println!(
        "🎯 Today: {} of {} habits completed",
        stats.completed_today, stats.total_habits
    );
    println!("⭐ Gold star days: {}", stats.gold_star_days);
    println!(
        "📈 Weekly progress: {}% | Avg per active day: {:.2}",
        stats.weekly_progress, stats.avg_habits_per_day
    );
    println!(
        "🗓️  {} completions across {} active days",
        stats.total_completions, stats.total_active_days
    );

    Ok(())
}
