use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use crate::engine::constants::MAX_PROGRESS_PERCENT;
use crate::error::{NutriError, Result};
use crate::models::{
    DailyProgress, FoodLogEntry, Nutrient, NutrientProgress, NutrientTotals, NutritionGoals,
    TrackingStats,
};

/// Progress of `current` against `need`, as a percentage capped at 100.
///
/// A zero `need` fails with `DivisionUndefined` rather than reporting 0%.
/// Negative or non-finite amounts are `InvalidInput`.
pub fn compute_nutrient_progress(current: f64, need: f64) -> Result<NutrientProgress> {
    if !current.is_finite() || current < 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "consumed amount must be a non-negative number, got {}",
            current
        )));
    }
    if !need.is_finite() || need < 0.0 {
        return Err(NutriError::InvalidInput(format!(
            "target must be a non-negative number, got {}",
            need
        )));
    }
    if need == 0.0 {
        return Err(NutriError::DivisionUndefined(
            "progress against a zero target".to_string(),
        ));
    }

    let percentage = (current / need * 100.0).min(MAX_PROGRESS_PERCENT);
    Ok(NutrientProgress {
        current,
        need,
        percentage,
    })
}

/// Sum the entries logged on `date`.
pub fn daily_totals(entries: &[FoodLogEntry], date: NaiveDate) -> NutrientTotals {
    let mut totals = NutrientTotals::default();
    for entry in entries.iter().filter(|e| e.logged_at.date() == date) {
        totals.add(entry);
    }
    totals
}

/// Progress for one nutrient of a day, `None` when its target is not positive.
///
/// Infeasible profiles produce zero or negative macro targets; those nutrients
/// are reported as not applicable instead of failing the whole day.
fn progress_for(nutrient: Nutrient, current: f64, need: f64) -> Result<Option<NutrientProgress>> {
    if need <= 0.0 {
        warn!(%nutrient, need, "target is not positive, progress not applicable");
        return Ok(None);
    }
    compute_nutrient_progress(current, need)
        .map(Some)
        .map_err(|e| match e {
            NutriError::InvalidInput(msg) => {
                NutriError::InvalidInput(format!("{}: {}", nutrient, msg))
            }
            other => other,
        })
}

/// Progress for all four nutrients from the entries logged on `date`.
pub fn compute_daily_progress(
    goals: &NutritionGoals,
    entries: &[FoodLogEntry],
    date: NaiveDate,
) -> Result<DailyProgress> {
    let totals = daily_totals(entries, date);
    debug!(
        %date,
        calories = totals.calories,
        protein = totals.protein,
        carbs = totals.carbs,
        fat = totals.fat,
        "aggregated daily intake"
    );

    Ok(DailyProgress {
        date,
        calories: progress_for(Nutrient::Calories, totals.calories, goals.daily_calories)?,
        protein: progress_for(Nutrient::Protein, totals.protein, goals.daily_protein_grams)?,
        carbs: progress_for(Nutrient::Carbs, totals.carbs, goals.daily_carbs_grams)?,
        fat: progress_for(Nutrient::Fat, totals.fat, goals.daily_fat_grams)?,
    })
}

/// Streak, tracked days and tracked calories over a food log as of `today`.
///
/// Entries dated after `today` are ignored. The streak counts back from
/// today, or from yesterday when nothing has been logged today yet.
pub fn tracking_stats(entries: &[FoodLogEntry], today: NaiveDate) -> TrackingStats {
    let mut days = BTreeSet::new();
    let mut calories_tracked = 0.0;
    for entry in entries.iter().filter(|e| e.logged_at.date() <= today) {
        days.insert(entry.logged_at.date());
        calories_tracked += entry.calories;
    }

    let start = if days.contains(&today) {
        Some(today)
    } else {
        today.checked_sub_days(Days::new(1))
    };

    let mut day_streak = 0;
    let mut cursor = start;
    while let Some(day) = cursor.filter(|d| days.contains(d)) {
        day_streak += 1;
        cursor = day.checked_sub_days(Days::new(1));
    }

    TrackingStats {
        day_streak,
        days_tracked: days.len() as u32,
        calories_tracked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProgressInsight;

    fn entry(name: &str, calories: f64, stamp: &str) -> FoodLogEntry {
        FoodLogEntry {
            name: name.to_string(),
            calories,
            protein: calories / 20.0,
            carbs: calories / 10.0,
            fat: calories / 40.0,
            portions: 1.0,
            logged_at: stamp.parse().unwrap(),
        }
    }

    fn sample_goals() -> NutritionGoals {
        NutritionGoals {
            bmr: 1649.0,
            tdee: 2556.0,
            daily_calories: 2000.0,
            daily_protein_grams: 126.0,
            daily_carbs_grams: 250.0,
            daily_fat_grams: 60.0,
        }
    }

    #[test]
    fn test_progress_percentage() {
        let p = compute_nutrient_progress(50.0, 200.0).unwrap();
        assert!((p.percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_capped_at_100() {
        let p = compute_nutrient_progress(3000.0, 2000.0).unwrap();
        assert_eq!(p.percentage, 100.0);
        assert_eq!(p.current, 3000.0);
    }

    #[test]
    fn test_zero_need_is_division_undefined() {
        assert!(matches!(
            compute_nutrient_progress(10.0, 0.0),
            Err(NutriError::DivisionUndefined(_))
        ));
        assert!(matches!(
            compute_nutrient_progress(0.0, 0.0),
            Err(NutriError::DivisionUndefined(_))
        ));
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(matches!(
            compute_nutrient_progress(-1.0, 100.0),
            Err(NutriError::InvalidInput(_))
        ));
        assert!(matches!(
            compute_nutrient_progress(1.0, -100.0),
            Err(NutriError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_daily_totals_filters_by_date() {
        let entries = vec![
            entry("Oatmeal", 400.0, "2026-10-16T07:30:00"),
            entry("Salad", 600.0, "2026-10-16T12:15:00"),
            entry("Late snack", 300.0, "2026-10-15T23:59:00"),
        ];
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let totals = daily_totals(&entries, date);
        assert_eq!(totals.calories, 1000.0);
        assert_eq!(totals.carbs, 100.0);
    }

    #[test]
    fn test_daily_progress_and_insight() {
        let entries = vec![entry("Lunch", 1200.0, "2026-10-16T12:00:00")];
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let progress = compute_daily_progress(&sample_goals(), &entries, date).unwrap();
        let calories = progress.calories.unwrap();
        assert!((calories.percentage - 60.0).abs() < 1e-9);
        assert_eq!(progress.get(Nutrient::Fat).unwrap().current, 30.0);
        assert_eq!(progress.insight(), Some(ProgressInsight::OnTrack));
    }

    #[test]
    fn test_daily_progress_zero_target_is_not_applicable() {
        let goals = NutritionGoals {
            daily_carbs_grams: 0.0,
            ..sample_goals()
        };
        let entries = vec![entry("Lunch", 1200.0, "2026-10-16T12:00:00")];
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let progress = compute_daily_progress(&goals, &entries, date).unwrap();
        assert_eq!(progress.carbs, None);
        assert!(progress.calories.is_some());
        assert!(progress.protein.is_some());
        assert!(progress.fat.is_some());
    }

    #[test]
    fn test_daily_progress_negative_target_is_not_applicable() {
        let goals = NutritionGoals {
            daily_calories: -3.0,
            daily_carbs_grams: -73.0,
            daily_fat_grams: -0.0,
            ..sample_goals()
        };
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let progress = compute_daily_progress(&goals, &[], date).unwrap();
        assert_eq!(progress.calories, None);
        assert_eq!(progress.carbs, None);
        assert_eq!(progress.fat, None);
        assert_eq!(progress.get(Nutrient::Protein).unwrap().percentage, 0.0);
        assert_eq!(progress.insight(), None);
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_tracking_stats_streak_breaks_on_gap() {
        let entries = vec![
            entry("Oatmeal", 400.0, "2026-10-16T07:30:00"),
            entry("Salad", 600.0, "2026-10-15T12:15:00"),
            entry("Soup", 300.0, "2026-10-14T19:00:00"),
            // gap on the 13th
            entry("Pasta", 800.0, "2026-10-12T20:00:00"),
        ];
        let stats = tracking_stats(&entries, day(16));
        assert_eq!(stats.day_streak, 3);
        assert_eq!(stats.days_tracked, 4);
        assert_eq!(stats.calories_tracked, 2100.0);
    }

    #[test]
    fn test_tracking_stats_counts_each_day_once() {
        let entries = vec![
            entry("Breakfast", 400.0, "2026-10-16T07:30:00"),
            entry("Lunch", 700.0, "2026-10-16T12:30:00"),
            entry("Dinner", 900.0, "2026-10-16T19:45:00"),
        ];
        let stats = tracking_stats(&entries, day(16));
        assert_eq!(stats.day_streak, 1);
        assert_eq!(stats.days_tracked, 1);
        assert_eq!(stats.calories_tracked, 2000.0);
    }

    #[test]
    fn test_tracking_stats_streak_survives_empty_today() {
        let entries = vec![
            entry("Salad", 600.0, "2026-10-15T12:15:00"),
            entry("Soup", 300.0, "2026-10-14T19:00:00"),
        ];
        assert_eq!(tracking_stats(&entries, day(16)).day_streak, 2);
        assert_eq!(tracking_stats(&entries, day(17)).day_streak, 0);
    }

    #[test]
    fn test_tracking_stats_ignores_future_entries() {
        let entries = vec![
            entry("Salad", 600.0, "2026-10-15T12:15:00"),
            entry("Planned", 900.0, "2026-10-20T12:00:00"),
        ];
        let stats = tracking_stats(&entries, day(15));
        assert_eq!(stats.day_streak, 1);
        assert_eq!(stats.days_tracked, 1);
        assert_eq!(stats.calories_tracked, 600.0);
    }

    #[test]
    fn test_tracking_stats_empty_log() {
        assert_eq!(tracking_stats(&[], day(16)), TrackingStats::default());
    }
}
