use crate::engine::constants::*;
use crate::error::{NutriError, Result};
use crate::models::biometrics::ensure_positive;
use crate::models::{BmiCategory, BodyReport, WeightRange};

fn height_m_squared(height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    height_m * height_m
}

/// Body mass index, rounded to one decimal place.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    ensure_positive("weight_kg", weight_kg)?;
    ensure_positive("height_cm", height_cm)?;

    let bmi = (weight_kg / height_m_squared(height_cm) * 10.0).round() / 10.0;
    if !bmi.is_finite() {
        return Err(NutriError::InvalidInput(format!(
            "BMI of {} kg at {} cm is out of range",
            weight_kg, height_cm
        )));
    }
    Ok(bmi)
}

/// BMI from pounds and inches, converted to metric first.
pub fn compute_bmi_imperial(weight_lb: f64, height_in: f64) -> Result<f64> {
    compute_bmi(weight_lb * KG_PER_POUND, height_in * CM_PER_INCH)
}

/// Classify a BMI into its band.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < BMI_OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Whole-kg weight range that keeps BMI between 18.5 and 24.9.
pub fn healthy_weight_range(height_cm: f64) -> Result<WeightRange> {
    ensure_positive("height_cm", height_cm)?;

    let h2 = height_m_squared(height_cm);
    if !h2.is_finite() {
        return Err(NutriError::InvalidInput(format!(
            "height_cm of {} is out of range",
            height_cm
        )));
    }
    Ok(WeightRange {
        min: (HEALTHY_BMI_MIN * h2).round(),
        max: (HEALTHY_BMI_MAX * h2).round(),
    })
}

/// BMI, its category and the healthy range in one go.
pub fn body_report(weight_kg: f64, height_cm: f64) -> Result<BodyReport> {
    let bmi = compute_bmi(weight_kg, height_cm)?;
    Ok(BodyReport {
        bmi,
        category: classify_bmi(bmi),
        healthy_range: healthy_weight_range(height_cm)?,
    })
}
