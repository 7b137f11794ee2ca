use crate::models::{MealSlot, MealTarget, NutritionGoals};

/// Split the daily goals across breakfast, lunch, dinner and a snack.
///
/// Each value is rounded on its own, so the slots may not sum exactly to
/// the daily totals.
pub fn meal_targets(goals: &NutritionGoals) -> Vec<MealTarget> {
    MealSlot::ALL
        .iter()
        .map(|&slot| {
            let share = slot.share();
            MealTarget {
                slot,
                calories: (goals.daily_calories * share).round(),
                protein_grams: (goals.daily_protein_grams * share).round(),
                carbs_grams: (goals.daily_carbs_grams * share).round(),
                fat_grams: (goals.daily_fat_grams * share).round(),
            }
        })
        .collect()
}
