use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Environment variable overriding the default profile path.
pub const PROFILE_ENV: &str = "NUTRITION_PROFILE";

pub const DEFAULT_PROFILE_PATH: &str = "profile.json";

/// Nutrition goals: daily calorie and macro targets, BMI, and progress tracking.
#[derive(Parser, Debug)]
#[command(name = "nutrition_goals")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the user profile JSON file [default: $NUTRITION_PROFILE or profile.json].
    #[arg(short, long, global = true)]
    pub profile: Option<PathBuf>,
}

impl Cli {
    /// Profile path from the flag, then the environment, then the default.
    pub fn profile_path(&self) -> PathBuf {
        resolve_profile_path(self.profile.clone(), std::env::var(PROFILE_ENV).ok())
    }
}

pub fn resolve_profile_path(flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
    flag.or_else(|| env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILE_PATH))
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute daily calorie and macro goals from the profile.
    Goals {
        /// Print the goals as JSON.
        #[arg(long)]
        json: bool,

        /// Answer the profile questions instead of reading the profile file.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Show BMI, its category and the healthy weight range.
    Bmi {
        /// Weight in kg (defaults to the profile's weight).
        #[arg(long)]
        weight: Option<f64>,

        /// Height in cm (defaults to the profile's height).
        #[arg(long)]
        height: Option<f64>,
    },

    /// Show progress toward today's goals from a food log.
    Progress {
        /// Food log file (.json or .csv).
        #[arg(short, long)]
        log: PathBuf,

        /// Day to report, YYYY-MM-DD (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Split the daily goals across meals.
    Meals,

    /// Show the logging streak, tracked days and tracked calories.
    Stats {
        /// Food log file (.json or .csv).
        #[arg(short, long)]
        log: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Goals {
            json: false,
            interactive: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_path_precedence() {
        let flag = Some(PathBuf::from("flag.json"));
        let env = Some("env.json".to_string());

        assert_eq!(
            resolve_profile_path(flag, env.clone()),
            PathBuf::from("flag.json")
        );
        assert_eq!(resolve_profile_path(None, env), PathBuf::from("env.json"));
        assert_eq!(
            resolve_profile_path(None, Some("  ".to_string())),
            PathBuf::from(DEFAULT_PROFILE_PATH)
        );
        assert_eq!(
            resolve_profile_path(None, None),
            PathBuf::from(DEFAULT_PROFILE_PATH)
        );
    }

    #[test]
    fn test_parse_progress_command() {
        let cli = Cli::parse_from([
            "nutrition_goals",
            "progress",
            "--log",
            "log.csv",
            "--date",
            "2026-10-16",
        ]);
        match cli.command {
            Some(Command::Progress { log, date }) => {
                assert_eq!(log, PathBuf::from("log.csv"));
                assert_eq!(date, NaiveDate::from_ymd_opt(2026, 10, 16));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_stats_command() {
        let cli = Cli::parse_from(["nutrition_goals", "stats", "-l", "log.json"]);
        match cli.command {
            Some(Command::Stats { log }) => assert_eq!(log, PathBuf::from("log.json")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
