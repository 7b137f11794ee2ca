use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};

/// Normalize a user-facing label to snake case.
///
/// "Very Active", "very-active" and " VERY_ACTIVE " all become "very_active".
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Closest known label, if the input looks like a typo of one.
fn closest_label<'a>(input: &str, known: &[&'a str]) -> Option<&'a str> {
    known
        .iter()
        .map(|label| (*label, jaro_winkler(label, input)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(label, _)| label)
}

/// Biological sex, selecting the Mifflin-St Jeor offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self> {
        let label = normalize_label(s);
        match label.as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => {
                let known: Vec<&str> = Sex::ALL.iter().map(Sex::as_str).collect();
                let hint = closest_label(&label, &known)
                    .map(|l| format!(" (did you mean '{}'?)", l))
                    .unwrap_or_default();
                Err(NutriError::InvalidInput(format!(
                    "unknown sex '{}'{}",
                    s.trim(),
                    hint
                )))
            }
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = NutriError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.as_str().to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported activity level.
///
/// Labels outside the known table parse to `Unrecognized`, which uses the
/// sedentary multiplier instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
    Unrecognized,
}

impl ActivityLevel {
    /// All recognized levels, least to most active.
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Parse a label, falling back to `Unrecognized`.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" | "lightly_active" => ActivityLevel::Light,
            "moderate" | "moderately_active" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::Unrecognized => "unrecognized",
        }
    }

    /// Short description shown in prompts.
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "little or no exercise",
            ActivityLevel::Light => "exercise 1-3 days a week",
            ActivityLevel::Moderate => "exercise 3-5 days a week",
            ActivityLevel::Active => "exercise 6-7 days a week",
            ActivityLevel::VeryActive => "hard training or a physical job",
            ActivityLevel::Unrecognized => "unknown level",
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        ActivityLevel::from_label(&value)
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary goal, selecting the calorie offset applied to TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    LoseWeight,
    GainWeight,
    BuildMuscle,
    MaintainWeight,
    ImproveHealth,
    Unrecognized,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::LoseWeight,
        Goal::GainWeight,
        Goal::BuildMuscle,
        Goal::MaintainWeight,
        Goal::ImproveHealth,
    ];

    /// Parse a label, falling back to `Unrecognized`.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "lose_weight" => Goal::LoseWeight,
            "gain_weight" => Goal::GainWeight,
            "build_muscle" => Goal::BuildMuscle,
            "maintain_weight" => Goal::MaintainWeight,
            "improve_health" => Goal::ImproveHealth,
            _ => Goal::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose_weight",
            Goal::GainWeight => "gain_weight",
            Goal::BuildMuscle => "build_muscle",
            Goal::MaintainWeight => "maintain_weight",
            Goal::ImproveHealth => "improve_health",
            Goal::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Goal::from_label(&value)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.as_str().to_string()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to a single goal calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBiometrics {
    /// Age in whole years.
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl UserBiometrics {
    /// Reject non-positive or non-finite age, weight and height.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(NutriError::InvalidInput(
                "age must be greater than zero".to_string(),
            ));
        }
        ensure_positive("weight_kg", self.weight_kg)?;
        ensure_positive("height_cm", self.height_cm)?;
        Ok(())
    }
}

/// Fail with `InvalidInput` unless `value` is finite and > 0.
pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NutriError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            field, value
        )))
    }
}
