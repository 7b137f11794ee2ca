use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{ActivityLevel, Goal};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per kg of body weight.
pub const BMR_WEIGHT_FACTOR: f64 = 10.0;

/// kcal per cm of height.
pub const BMR_HEIGHT_FACTOR: f64 = 6.25;

/// kcal subtracted per year of age.
pub const BMR_AGE_FACTOR: f64 = 5.0;

pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Multiplier used when the activity level is not in the table.
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.2;

// ─────────────────────────────────────────────────────────────────────────────
// Goal offsets and macro split
// ─────────────────────────────────────────────────────────────────────────────

/// About 0.5 kg a week.
pub const WEIGHT_LOSS_DEFICIT: f64 = -500.0;

pub const WEIGHT_GAIN_SURPLUS: f64 = 300.0;

/// Offset for maintenance and for unrecognized goals.
pub const DEFAULT_GOAL_OFFSET: f64 = 0.0;

/// Protein target, grams per kg of body weight.
pub const PROTEIN_GRAMS_PER_KG: f64 = 1.8;

/// Share of daily calories assigned to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.275;

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Body mass index
// ─────────────────────────────────────────────────────────────────────────────

/// Upper bound (exclusive) of the underweight band.
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;

/// Upper bound (exclusive) of the normal band.
pub const BMI_NORMAL_BELOW: f64 = 25.0;

/// Upper bound (exclusive) of the overweight band.
pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;

pub const HEALTHY_BMI_MIN: f64 = 18.5;
pub const HEALTHY_BMI_MAX: f64 = 24.9;

pub const KG_PER_POUND: f64 = 0.453_592_37;
pub const CM_PER_INCH: f64 = 2.54;

// ─────────────────────────────────────────────────────────────────────────────
// Progress and meal split
// ─────────────────────────────────────────────────────────────────────────────

/// Progress percentages are capped here for display.
pub const MAX_PROGRESS_PERCENT: f64 = 100.0;

pub const INSIGHT_BEHIND_RATIO: f64 = 0.5;
pub const INSIGHT_OVER_RATIO: f64 = 1.1;

pub const BREAKFAST_SHARE: f64 = 0.25;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.35;
pub const SNACK_SHARE: f64 = 0.05;

/// Map from activity level to TDEE multiplier.
pub static ACTIVITY_MULTIPLIERS: LazyLock<HashMap<ActivityLevel, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(ActivityLevel::Sedentary, 1.2);
    m.insert(ActivityLevel::Light, 1.375);
    m.insert(ActivityLevel::Moderate, 1.55);
    m.insert(ActivityLevel::Active, 1.725);
    m.insert(ActivityLevel::VeryActive, 1.9);
    m
});

/// Map from goal to the kcal offset applied to TDEE.
pub static GOAL_CALORIE_OFFSETS: LazyLock<HashMap<Goal, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(Goal::LoseWeight, WEIGHT_LOSS_DEFICIT);
    m.insert(Goal::GainWeight, WEIGHT_GAIN_SURPLUS);
    m.insert(Goal::BuildMuscle, WEIGHT_GAIN_SURPLUS);
    m.insert(Goal::MaintainWeight, 0.0);
    m.insert(Goal::ImproveHealth, 0.0);
    m
});

/// Get the TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    *ACTIVITY_MULTIPLIERS
        .get(&level)
        .unwrap_or(&DEFAULT_ACTIVITY_MULTIPLIER)
}

/// Get the TDEE multiplier for a raw label; unknown labels get 1.2.
pub fn activity_multiplier_for_label(label: &str) -> f64 {
    activity_multiplier(ActivityLevel::from_label(label))
}

/// Get the calorie offset for a goal.
pub fn goal_calorie_offset(goal: Goal) -> f64 {
    *GOAL_CALORIE_OFFSETS.get(&goal).unwrap_or(&DEFAULT_GOAL_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_table() {
        assert_eq!(activity_multiplier(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity_multiplier(ActivityLevel::Light), 1.375);
        assert_eq!(activity_multiplier(ActivityLevel::Moderate), 1.55);
        assert_eq!(activity_multiplier(ActivityLevel::Active), 1.725);
        assert_eq!(activity_multiplier(ActivityLevel::VeryActive), 1.9);
    }

    #[test]
    fn test_unrecognized_activity_defaults() {
        assert_eq!(activity_multiplier(ActivityLevel::Unrecognized), 1.2);
        assert_eq!(activity_multiplier_for_label("marathoner"), 1.2);
        assert_eq!(activity_multiplier_for_label(""), 1.2);
        assert_eq!(activity_multiplier_for_label("Very Active"), 1.9);
    }

    #[test]
    fn test_goal_offsets() {
        assert_eq!(goal_calorie_offset(Goal::LoseWeight), -500.0);
        assert_eq!(goal_calorie_offset(Goal::GainWeight), 300.0);
        assert_eq!(goal_calorie_offset(Goal::BuildMuscle), 300.0);
        assert_eq!(goal_calorie_offset(Goal::MaintainWeight), 0.0);
        assert_eq!(goal_calorie_offset(Goal::ImproveHealth), 0.0);
        assert_eq!(goal_calorie_offset(Goal::Unrecognized), 0.0);
    }

    #[test]
    fn test_meal_shares_cover_the_day() {
        let total = BREAKFAST_SHARE + LUNCH_SHARE + DINNER_SHARE + SNACK_SHARE;
        assert!((total - 1.0).abs() < 1e-9);
    }
}
