pub mod cli;
pub mod engine;
pub mod error;
pub mod input;
pub mod interface;
pub mod models;

pub use engine::compute_goals;
pub use error::{NutriError, Result};
pub use models::{NutrientProgress, NutritionGoals, UserBiometrics};
