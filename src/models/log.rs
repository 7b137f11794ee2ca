use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

fn default_portions() -> f64 {
    1.0
}

/// One logged food or menu item.
///
/// Nutrient values are totals for the logged portions, not per portion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogEntry {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,

    #[serde(default = "default_portions")]
    pub portions: f64,

    pub logged_at: NaiveDateTime,
}

impl FoodLogEntry {
    /// Reject negative or non-finite nutrient amounts.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("portions", self.portions),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(NutriError::InvalidInput(format!(
                    "log entry '{}' has invalid {}: {}",
                    self.name, field, value
                )));
            }
        }
        Ok(())
    }
}

/// Summed intake over a set of log entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutrientTotals {
    pub fn add(&mut self, entry: &FoodLogEntry) {
        self.calories += entry.calories;
        self.protein += entry.protein;
        self.carbs += entry.carbs;
        self.fat += entry.fat;
    }
}
