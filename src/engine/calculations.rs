use tracing::{debug, warn};

use crate::engine::constants::*;
use crate::error::{NutriError, Result};
use crate::models::{ActivityLevel, Goal, MacroTargets, NutritionGoals, Sex, UserBiometrics};

fn sex_offset(sex: Sex) -> f64 {
    match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    }
}

/// Round to a whole number, folding -0.0 into 0.0.
fn round_whole(value: f64) -> f64 {
    let rounded = value.round();
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Fail with `InvalidInput` when a derived value overflowed to infinity.
fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NutriError::InvalidInput(format!(
            "{} overflowed; weight and height are out of range",
            field
        )))
    }
}

/// Calculate basal metabolic rate (kcal/day) with the Mifflin-St Jeor equation.
///
/// Formula: 10 * weight_kg + 6.25 * height_cm - 5 * age + (5 male | -161 female)
///
/// Fails with `InvalidInput` for non-positive inputs, or when the inputs are
/// extreme enough to produce a non-positive or infinite BMR.
pub fn compute_bmr(biometrics: &UserBiometrics) -> Result<f64> {
    biometrics.validate()?;

    let bmr = BMR_WEIGHT_FACTOR * biometrics.weight_kg
        + BMR_HEIGHT_FACTOR * biometrics.height_cm
        - BMR_AGE_FACTOR * f64::from(biometrics.age)
        + sex_offset(biometrics.sex);

    ensure_finite("BMR", bmr)?;
    if bmr <= 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "BMR of {:.1} kcal is not positive; check age, weight and height",
            bmr
        )));
    }

    Ok(bmr)
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn compute_tdee(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(level)
}

/// Daily calorie target: TDEE shifted by the goal offset. Not clamped.
pub fn compute_daily_calories(tdee: f64, goal: Goal) -> f64 {
    tdee + goal_calorie_offset(goal)
}

/// Split a calorie target into macro grams.
///
/// Protein and fat are rounded first; carbs take the remaining calories, so
/// rounding error lands in carbs. Carbs go negative when protein and fat
/// alone exceed the target.
pub fn compute_macros(weight_kg: f64, daily_calories: f64) -> MacroTargets {
    let protein = round_whole(weight_kg * PROTEIN_GRAMS_PER_KG);
    let fat = round_whole(daily_calories * FAT_CALORIE_SHARE / FAT_KCAL_PER_GRAM);
    let remaining = daily_calories - protein * PROTEIN_KCAL_PER_GRAM - fat * FAT_KCAL_PER_GRAM;
    let carbs = round_whole(remaining / CARBS_KCAL_PER_GRAM);

    let macros = MacroTargets {
        protein_grams: protein,
        carbs_grams: carbs,
        fat_grams: fat,
    };

    if !macros.is_feasible() {
        warn!(
            weight_kg,
            daily_calories, carbs, "protein and fat exceed the calorie target"
        );
    }

    macros
}

/// Derive the full set of daily goals: BMR, TDEE, calorie target, macros.
///
/// Intermediate values stay unrounded; only the reported values are rounded.
pub fn compute_goals(biometrics: &UserBiometrics) -> Result<NutritionGoals> {
    let bmr = compute_bmr(biometrics)?;

    if biometrics.activity_level == ActivityLevel::Unrecognized {
        debug!(
            multiplier = DEFAULT_ACTIVITY_MULTIPLIER,
            "unrecognized activity level, using default multiplier"
        );
    }
    let tdee = compute_tdee(bmr, biometrics.activity_level);
    ensure_finite("TDEE", tdee)?;

    let daily_calories = compute_daily_calories(tdee, biometrics.goal);
    ensure_finite("calorie target", daily_calories)?;
    if daily_calories < 0.0 {
        warn!(daily_calories, "calorie target is negative");
    }

    let macros = compute_macros(biometrics.weight_kg, daily_calories);

    let goals = NutritionGoals {
        bmr: round_whole(bmr),
        tdee: round_whole(tdee),
        daily_calories: round_whole(daily_calories),
        daily_protein_grams: macros.protein_grams,
        daily_carbs_grams: macros.carbs_grams,
        daily_fat_grams: macros.fat_grams,
    };

    debug!(
        bmr = goals.bmr,
        tdee = goals.tdee,
        daily_calories = goals.daily_calories,
        "computed nutrition goals"
    );

    Ok(goals)
}
