use crate::models::{
    BodyReport, DailyProgress, MealTarget, Nutrient, NutritionGoals, TrackingStats,
};

/// Width of the progress bar in characters.
const BAR_WIDTH: usize = 20;

/// Render a percentage in [0, 100] as a fixed-width bar.
pub fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Format a whole amount, never as "-0".
pub fn format_whole(value: f64) -> String {
    let rounded = value.round();
    format!("{:.0}", if rounded == 0.0 { 0.0 } else { rounded })
}

/// Display the daily goals.
pub fn display_goals(goals: &NutritionGoals) {
    println!();
    println!("=== Daily Nutrition Goals ===");
    println!();
    println!("BMR:            {:>6} kcal", format_whole(goals.bmr));
    println!("TDEE:           {:>6} kcal", format_whole(goals.tdee));
    println!("Daily calories: {:>6} kcal", format_whole(goals.daily_calories));
    println!();
    println!("Protein: {:>5} g", format_whole(goals.daily_protein_grams));
    println!("Carbs:   {:>5} g", format_whole(goals.daily_carbs_grams));
    println!("Fat:     {:>5} g", format_whole(goals.daily_fat_grams));

    if goals.is_calorie_target_negative() {
        println!();
        println!("Warning: the calorie target is negative. Choose a less aggressive goal.");
    } else if !goals.macros().is_feasible() {
        println!();
        println!("Warning: protein and fat exceed the calorie target; carbs are negative.");
    }
    println!();
}

/// Display BMI, category and healthy weight range.
pub fn display_body_report(report: &BodyReport) {
    println!("BMI: {:.1} ({})", report.bmi, report.category);
    println!(
        "Healthy weight range: {:.0}-{:.0} kg",
        report.healthy_range.min, report.healthy_range.max
    );
    println!();
}

/// Display progress bars for every nutrient plus the day's insight.
pub fn display_progress(progress: &DailyProgress) {
    println!();
    println!("=== Progress for {} ===", progress.date);
    println!();

    for nutrient in Nutrient::ALL {
        match progress.get(nutrient) {
            Some(p) => println!(
                "{:<9} {} {:>3.0}%  {:.0}{} / {:.1}{}",
                nutrient.label(),
                progress_bar(p.percentage),
                p.percentage,
                p.current,
                nutrient.unit(),
                p.need,
                nutrient.unit()
            ),
            None => println!(
                "{:<9} n/a (no positive {} target)",
                nutrient.label(),
                nutrient.label().to_lowercase()
            ),
        }
    }

    println!();
    match progress.insight() {
        Some(insight) => println!("{}", insight.message()),
        None => println!("No calorie target to compare against. Review your goal settings."),
    }
    println!();
}

/// Display logging streak and totals.
pub fn display_tracking_stats(stats: &TrackingStats) {
    println!();
    println!("=== Tracking Stats ===");
    println!();
    println!("Day streak:       {:>6} days", stats.day_streak);
    println!("Days tracked:     {:>6} days", stats.days_tracked);
    println!("Calories tracked: {:>6} kcal", format_whole(stats.calories_tracked));
    println!();
}

/// Display the per-meal split.
pub fn display_meal_targets(targets: &[MealTarget]) {
    println!();
    println!("=== Meal Targets ===");
    println!();

    for target in targets {
        println!(
            "{:<10} {:>5.0} kcal | P {:>4.0} g  C {:>4.0} g  F {:>4.0} g",
            target.slot.label(),
            target.calories,
            target.protein_grams,
            target.carbs_grams,
            target.fat_grams
        );
    }

    println!();
}
