use std::path::Path;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nutrition_goals_rs::cli::{Cli, Command};
use nutrition_goals_rs::engine::{
    body_report, compute_daily_progress, compute_goals, meal_targets, today, tracking_stats,
};
use nutrition_goals_rs::error::{NutriError, Result};
use nutrition_goals_rs::input::{load_food_log, load_profile, save_profile};
use nutrition_goals_rs::interface::{
    collect_profile, display_body_report, display_goals, display_meal_targets, display_progress,
    display_tracking_stats, prompt_yes_no,
};
use nutrition_goals_rs::models::UserProfile;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG on top of an info default for this crate.
fn init_logging() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "nutrition_goals_rs=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let profile_path = cli.profile_path();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Goals { json, interactive } => cmd_goals(&profile_path, json, interactive),
        Command::Bmi { weight, height } => cmd_bmi(&profile_path, weight, height),
        Command::Progress { log, date } => cmd_progress(&profile_path, &log, date),
        Command::Meals => cmd_meals(&profile_path),
        Command::Stats { log } => cmd_stats(&log),
    }
}

/// Read the profile file, with a hint when it is missing.
fn require_profile(path: &Path) -> Result<UserProfile> {
    if !path.exists() {
        return Err(NutriError::InvalidInput(format!(
            "profile file not found: {} (run 'goals --interactive' to create one)",
            path.display()
        )));
    }
    load_profile(path)
}

/// Compute and show goals, collecting the profile interactively if needed.
fn cmd_goals(profile_path: &Path, json: bool, interactive: bool) -> Result<()> {
    let profile = if interactive || !profile_path.exists() {
        if !interactive {
            eprintln!("No profile at {}; let's set one up.", profile_path.display());
        }
        let profile = collect_profile()?;
        if prompt_yes_no(&format!("Save profile to {}?", profile_path.display()), true)? {
            save_profile(profile_path, &profile)?;
            info!(path = %profile_path.display(), "saved profile");
        }
        profile
    } else {
        load_profile(profile_path)?
    };

    let biometrics = profile.biometrics_on(today())?;
    let goals = compute_goals(&biometrics)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&goals)?);
        return Ok(());
    }

    if let Some(name) = &profile.name {
        println!("Hi {}!", name);
    }
    display_goals(&goals);
    display_body_report(&body_report(biometrics.weight_kg, biometrics.height_cm)?);
    Ok(())
}

fn cmd_bmi(profile_path: &Path, weight: Option<f64>, height: Option<f64>) -> Result<()> {
    let (weight_kg, height_cm) = match (weight, height) {
        (Some(w), Some(h)) => (w, h),
        (w, h) => {
            let profile = require_profile(profile_path)?;
            (w.unwrap_or(profile.weight_kg), h.unwrap_or(profile.height_cm))
        }
    };

    display_body_report(&body_report(weight_kg, height_cm)?);
    Ok(())
}

fn cmd_progress(
    profile_path: &Path,
    log_path: &Path,
    date: Option<chrono::NaiveDate>,
) -> Result<()> {
    let profile = require_profile(profile_path)?;
    let date = date.unwrap_or_else(today);

    let goals = compute_goals(&profile.biometrics_on(date)?)?;
    let entries = load_food_log(log_path)?;
    if !entries.iter().any(|e| e.logged_at.date() == date) {
        warn!(%date, "no food logged on this day");
    }

    let progress = compute_daily_progress(&goals, &entries, date)?;
    display_progress(&progress);
    Ok(())
}

fn cmd_meals(profile_path: &Path) -> Result<()> {
    let profile = require_profile(profile_path)?;
    let goals = compute_goals(&profile.biometrics_on(today())?)?;
    display_meal_targets(&meal_targets(&goals));
    Ok(())
}

fn cmd_stats(log_path: &Path) -> Result<()> {
    let entries = load_food_log(log_path)?;
    display_tracking_stats(&tracking_stats(&entries, today()));
    Ok(())
}
