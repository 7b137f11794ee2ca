use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::constants::{INSIGHT_BEHIND_RATIO, INSIGHT_OVER_RATIO};

/// The four tracked nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Consumption of one nutrient against its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientProgress {
    pub current: f64,
    pub need: f64,
    /// `current / need * 100`, capped at 100.
    pub percentage: f64,
}

/// Coarse reading of the day's calorie intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressInsight {
    /// Under half of the calorie target.
    Behind,
    OnTrack,
    /// More than 110% of the calorie target.
    Over,
}

impl ProgressInsight {
    pub fn from_calories(calories: &NutrientProgress) -> Self {
        if calories.current < calories.need * INSIGHT_BEHIND_RATIO {
            ProgressInsight::Behind
        } else if calories.current > calories.need * INSIGHT_OVER_RATIO {
            ProgressInsight::Over
        } else {
            ProgressInsight::OnTrack
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ProgressInsight::Behind => {
                "You're doing great! Don't forget to eat enough through the rest of the day."
            }
            ProgressInsight::OnTrack => "You're on track with your nutrition targets. Keep it up!",
            ProgressInsight::Over => {
                "You've gone past today's calorie target. Consider lighter food for the rest of the day."
            }
        }
    }
}

/// Progress for every tracked nutrient on one day.
///
/// A nutrient whose target is not positive (an infeasible carb target, for
/// instance) has no meaningful percentage and is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub calories: Option<NutrientProgress>,
    pub protein: Option<NutrientProgress>,
    pub carbs: Option<NutrientProgress>,
    pub fat: Option<NutrientProgress>,
}

impl DailyProgress {
    pub fn get(&self, nutrient: Nutrient) -> Option<&NutrientProgress> {
        match nutrient {
            Nutrient::Calories => self.calories.as_ref(),
            Nutrient::Protein => self.protein.as_ref(),
            Nutrient::Carbs => self.carbs.as_ref(),
            Nutrient::Fat => self.fat.as_ref(),
        }
    }

    /// Insight from calorie progress; `None` without a positive calorie target.
    pub fn insight(&self) -> Option<ProgressInsight> {
        self.calories.as_ref().map(ProgressInsight::from_calories)
    }
}

/// Logging habits over a whole food log.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStats {
    /// Consecutive days with at least one entry, ending today (or yesterday
    /// while today is still empty).
    pub day_streak: u32,
    /// Distinct days with at least one entry.
    pub days_tracked: u32,
    /// Sum of calories over every entry.
    pub calories_tracked: f64,
}
