use serde::{Deserialize, Serialize};

/// Daily macronutrient targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
}

impl MacroTargets {
    /// False when protein and fat already exceed the calorie target,
    /// which leaves a negative carbohydrate remainder.
    pub fn is_feasible(&self) -> bool {
        self.carbs_grams >= 0.0
    }
}

/// Derived daily targets, every value rounded to a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionGoals {
    /// Basal metabolic rate, kcal/day.
    pub bmr: f64,
    /// Total daily energy expenditure, kcal/day.
    pub tdee: f64,
    /// Calorie target after the goal offset, kcal/day.
    pub daily_calories: f64,
    pub daily_protein_grams: f64,
    pub daily_carbs_grams: f64,
    pub daily_fat_grams: f64,
}

impl NutritionGoals {
    pub fn macros(&self) -> MacroTargets {
        MacroTargets {
            protein_grams: self.daily_protein_grams,
            carbs_grams: self.daily_carbs_grams,
            fat_grams: self.daily_fat_grams,
        }
    }

    /// A deficit larger than TDEE yields a negative target; callers treat it as an error state.
    pub fn is_calorie_target_negative(&self) -> bool {
        self.daily_calories < 0.0
    }
}
