use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    BREAKFAST_SHARE, DINNER_SHARE, LUNCH_SHARE, SNACK_SHARE,
};

/// A meal in the daily split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Fraction of the daily targets assigned to this meal.
    pub fn share(&self) -> f64 {
        match self {
            MealSlot::Breakfast => BREAKFAST_SHARE,
            MealSlot::Lunch => LUNCH_SHARE,
            MealSlot::Dinner => DINNER_SHARE,
            MealSlot::Snack => SNACK_SHARE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-meal slice of the daily goals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealTarget {
    pub slot: MealSlot,
    pub calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fat_grams: f64,
}
