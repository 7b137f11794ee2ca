use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{FoodLogEntry, UserProfile};

/// Load a user profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    Ok(profile)
}

/// Save a user profile as pretty-printed JSON.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &UserProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a food log from a `.csv` file or, for any other extension, JSON.
///
/// Every entry is validated; one bad entry fails the whole load.
pub fn load_food_log<P: AsRef<Path>>(path: P) -> Result<Vec<FoodLogEntry>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let entries = if is_csv {
        load_food_log_csv(path)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str::<Vec<FoodLogEntry>>(&content)?
    };

    for entry in &entries {
        entry.validate()?;
    }

    info!(count = entries.len(), path = %path.display(), "loaded food log");
    Ok(entries)
}

fn load_food_log_csv(path: &Path) -> Result<Vec<FoodLogEntry>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        let entry: FoodLogEntry = record?;
        entries.push(entry);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NutriError;
    use crate::models::{ActivityLevel, Goal, Sex};
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_save_and_load_profile() {
        let profile = UserProfile {
            name: Some("Sam".to_string()),
            date_of_birth: None,
            age: Some(30),
            weight_kg: 70.0,
            height_cm: 175.0,
            sex: Sex::Female,
            activity_level: ActivityLevel::Light,
            goal: Goal::BuildMuscle,
        };

        let file = NamedTempFile::new().unwrap();
        save_profile(file.path(), &profile).unwrap();

        let reloaded = load_profile(file.path()).unwrap();
        assert_eq!(reloaded, profile);
    }

    #[test]
    fn test_load_food_log_json() {
        let json = r#"[
            {"name": "Nasi Goreng", "calories": 650, "protein": 18, "carbs": 80, "fat": 25,
             "portions": 1, "loggedAt": "2026-10-16T12:30:00"},
            {"name": "Teh Manis", "calories": 120, "protein": 0, "carbs": 30, "fat": 0,
             "loggedAt": "2026-10-16T12:31:00"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let entries = load_food_log(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].portions, 1.0);
    }

    #[test]
    fn test_load_food_log_csv() {
        let csv = "name,calories,protein,carbs,fat,portions,loggedAt\n\
                   Oatmeal,350,12,60,6,1,2026-10-16T07:45:00\n\
                   Chicken breast,330,62,0,7,2,2026-10-16T19:00:00\n";

        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let entries = load_food_log(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "Chicken breast");
        assert_eq!(entries[1].portions, 2.0);
    }

    #[test]
    fn test_load_food_log_rejects_negative_values() {
        let json = r#"[{"name": "Typo", "calories": -100, "protein": 0, "carbs": 0, "fat": 0,
            "loggedAt": "2026-10-16T08:00:00"}]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_food_log(file.path()),
            Err(NutriError::InvalidInput(_))
        ));
    }
}
