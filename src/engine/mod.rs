pub mod age;
pub mod body;
pub mod calculations;
pub mod constants;
pub mod meals;
pub mod progress;

pub use age::{age_on, age_today, today};
pub use body::{body_report, classify_bmi, compute_bmi, compute_bmi_imperial, healthy_weight_range};
pub use calculations::{
    compute_bmr, compute_daily_calories, compute_goals, compute_macros, compute_tdee,
};
pub use constants::{activity_multiplier, activity_multiplier_for_label, goal_calorie_offset};
pub use meals::meal_targets;
pub use progress::{
    compute_daily_progress, compute_nutrient_progress, daily_totals, tracking_stats,
};
