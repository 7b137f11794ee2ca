pub mod biometrics;
pub mod body;
pub mod goals;
pub mod log;
pub mod meal;
pub mod profile;
pub mod progress;

pub use biometrics::{normalize_label, ActivityLevel, Goal, Sex, UserBiometrics};
pub use body::{BmiCategory, BodyReport, WeightRange};
pub use goals::{MacroTargets, NutritionGoals};
pub use log::{FoodLogEntry, NutrientTotals};
pub use meal::{MealSlot, MealTarget};
pub use profile::UserProfile;
pub use progress::{DailyProgress, Nutrient, NutrientProgress, ProgressInsight, TrackingStats};
