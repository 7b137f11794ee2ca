pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_activity_level, prompt_date_of_birth, prompt_goal, prompt_name,
    prompt_positive, prompt_sex, prompt_yes_no,
};
pub use render::{
    display_body_report, display_goals, display_meal_targets, display_progress,
    display_tracking_stats, format_whole, progress_bar,
};
