mod loader;

pub use loader::{load_food_log, load_profile, save_profile};
