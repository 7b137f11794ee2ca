use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};

use crate::engine::age::age_today;
use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, Goal, Sex, UserProfile};

/// Prompt for an optional display name.
pub fn prompt_name() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("What's your name? (optional)")
        .allow_empty(true)
        .interact_text()?;

    let name = input.trim();
    Ok(if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    })
}

/// Prompt for date of birth in YYYY-MM-DD form.
pub fn prompt_date_of_birth() -> Result<NaiveDate> {
    let input: String = Input::new()
        .with_prompt("Date of birth (YYYY-MM-DD)")
        .interact_text()?;

    let dob = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| NutriError::InvalidInput("Invalid date, expected YYYY-MM-DD".to_string()))?;

    if age_today(dob)? == 0 {
        return Err(NutriError::InvalidInput(
            "Age must be at least one year".to_string(),
        ));
    }

    Ok(dob)
}

/// Prompt for a positive measurement.
pub fn prompt_positive(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(NutriError::InvalidInput(
            "Value must be greater than zero".to_string(),
        ));
    }

    Ok(value)
}

pub fn prompt_sex() -> Result<Sex> {
    let options: Vec<&str> = vec!["Male", "Female"];
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Sex::ALL[selection])
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{} ({})", level, level.description()))
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

pub fn prompt_goal() -> Result<Goal> {
    let options: Vec<String> = Goal::ALL.iter().map(|goal| goal.to_string()).collect();

    let selection = Select::new()
        .with_prompt("Primary goal")
        .items(&options)
        .default(3) // maintain_weight
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the user through profile setup.
pub fn collect_profile() -> Result<UserProfile> {
    let name = prompt_name()?;
    let date_of_birth = prompt_date_of_birth()?;
    let weight_kg = prompt_positive("Weight (kg)", 70.0)?;
    let height_cm = prompt_positive("Height (cm)", 170.0)?;
    let sex = prompt_sex()?;
    let activity_level = prompt_activity_level()?;
    let goal = prompt_goal()?;

    Ok(UserProfile {
        name,
        date_of_birth: Some(date_of_birth),
        age: None,
        weight_kg,
        height_cm,
        sex,
        activity_level,
        goal,
    })
}
