use serde::Serialize;

use crate::analytics::round_tenth;
use crate::models::WeightSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Weight in kg, height in cm. The value is rounded to one decimal before it
/// is categorised.
pub fn bmi(weight: f64, height: f64) -> Option<BmiReading> {
    if weight <= 0.0 || height <= 0.0 {
        return None;
    }
    let metres = height / 100.0;
    let bmi = round_tenth(weight / (metres * metres));
    Some(BmiReading {
        bmi,
        category: bmi_category(bmi),
    })
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

pub fn latest_bmi(samples: &[WeightSample]) -> Option<BmiReading> {
    samples.last().and_then(|s| bmi(s.weight, s.height))
}
