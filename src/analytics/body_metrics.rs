use serde::Serialize;

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 24.0;
const OVERWEIGHT_BELOW: f64 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Unknown,
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Sex as far as the Mifflin-St Jeor formula is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmrSex {
    Male,
    /// Anything that is not "male", compared case-insensitively.
    Other,
}

impl BmrSex {
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("male") {
            BmrSex::Male
        } else {
            BmrSex::Other
        }
    }

    fn offset(&self) -> f64 {
        match self {
            BmrSex::Male => 5.0,
            BmrSex::Other => -161.0,
        }
    }
}

/// Body mass index, `weight / (height in m)^2`.
pub fn compute_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    match (height_cm, weight_kg) {
        (Some(height), Some(weight)) if height > 0.0 => {
            let meters = height / 100.0;
            Some(weight / (meters * meters))
        }
        _ => None,
    }
}

pub fn categorize_bmi(bmi: Option<f64>) -> BmiCategory {
    match bmi {
        None => BmiCategory::Unknown,
        Some(v) if v < UNDERWEIGHT_BELOW => BmiCategory::Underweight,
        Some(v) if v < NORMAL_BELOW => BmiCategory::Normal,
        Some(v) if v < OVERWEIGHT_BELOW => BmiCategory::Overweight,
        Some(_) => BmiCategory::Obese,
    }
}

/// Basal metabolic rate in kcal/day using Mifflin-St Jeor:
/// `10*weight + 6.25*height - 5*age + s` with `s = 5` for male and `-161`
/// for every other value.
pub fn compute_bmr(
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    age_years: Option<i32>,
    sex: Option<&str>,
) -> Option<f64> {
    let (height, weight, age, sex) = (height_cm?, weight_kg?, age_years?, sex?);
    let sex = BmrSex::from_label(sex);
    Some(10.0 * weight + 6.25 * height - 5.0 * f64::from(age) + sex.offset())
}
