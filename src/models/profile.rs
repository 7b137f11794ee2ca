use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::age::age_on;
use crate::error::{NutriError, Result};
use crate::models::biometrics::{ActivityLevel, Goal, Sex, UserBiometrics};

/// What the onboarding flow collects about a user.
///
/// Age comes from `date_of_birth` when present, otherwise from `age`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl UserProfile {
    /// Resolve the profile into calculation inputs as of `today`.
    pub fn biometrics_on(&self, today: NaiveDate) -> Result<UserBiometrics> {
        let age = match (self.date_of_birth, self.age) {
            (Some(dob), _) => age_on(dob, today)?,
            (None, Some(age)) => age,
            (None, None) => {
                return Err(NutriError::InvalidInput(
                    "profile needs either dateOfBirth or age".to_string(),
                ));
            }
        };

        let biometrics = UserBiometrics {
            age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            sex: self.sex,
            activity_level: self.activity_level,
            goal: self.goal,
        };
        biometrics.validate()?;
        Ok(biometrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: Some("Sam".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1996, 5, 20),
            age: None,
            weight_kg: 70.0,
            height_cm: 175.0,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::MaintainWeight,
        }
    }

    #[test]
    fn test_age_from_date_of_birth() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 19).unwrap();
        let b = sample_profile().biometrics_on(today).unwrap();
        assert_eq!(b.age, 29);

        let birthday = NaiveDate::from_ymd_opt(2026, 5, 20).unwrap();
        assert_eq!(sample_profile().biometrics_on(birthday).unwrap().age, 30);
    }

    #[test]
    fn test_date_of_birth_wins_over_age() {
        let mut profile = sample_profile();
        profile.age = Some(99);
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert_eq!(profile.biometrics_on(today).unwrap().age, 30);
    }

    #[test]
    fn test_missing_age_is_invalid() {
        let mut profile = sample_profile();
        profile.date_of_birth = None;
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert!(matches!(
            profile.biometrics_on(today),
            Err(NutriError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_deserialize_title_case_labels() {
        let json = r#"{"name": "Sam", "dateOfBirth": "1996-05-20", "weightKg": 70,
            "heightCm": 175, "sex": "Male", "activityLevel": "Very Active", "goal": "Lose Weight"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.goal, Goal::LoseWeight);
        assert_eq!(profile.age, None);
    }
}
