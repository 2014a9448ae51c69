use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;
use crate::analytics::body_metrics::{self, BmiCategory};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    /// Unique, immutable after registration.
    pub handle: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub age_years: Option<i32>,
    /// Only consulted to pick the BMR formula.
    pub sex: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_active_at: Option<DateTime<Utc>>,
}

impl FromSqliteRow for Profile {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            handle: row.get("handle")?,
            email: row.get("email")?,
            nickname: row.get("nickname")?,
            height_cm: row.get("height_cm")?,
            weight_kg: row.get("weight_kg")?,
            age_years: row.get("age_years")?,
            sex: row.get("sex")?,
            created_at: row.get("created_at")?,
            last_active_at: row.get("last_active_at")?,
        })
    }
}

impl Profile {
    pub fn bmi(&self) -> Option<f64> {
        body_metrics::compute_bmi(self.height_cm, self.weight_kg)
    }

    pub fn bmi_category(&self) -> BmiCategory {
        body_metrics::categorize_bmi(self.bmi())
    }

    pub fn bmr(&self) -> Option<f64> {
        body_metrics::compute_bmr(
            self.height_cm,
            self.weight_kg,
            self.age_years,
            self.sex.as_deref(),
        )
    }

    pub fn view(&self) -> ProfileView {
        ProfileView {
            handle: self.handle.clone(),
            nickname: self.nickname.clone(),
            email: self.email.clone(),
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            age_years: self.age_years,
            sex: self.sex.clone(),
            bmi: self.bmi(),
            bmi_category: self.bmi_category(),
            bmr: self.bmr(),
            created_at: self.created_at,
            last_active_at: self.last_active_at,
        }
    }

    /// Overwrites only the fields the patch carries. The handle is untouched.
    pub fn apply(&mut self, patch: UpdateProfile) {
        if let Some(nickname) = patch.nickname {
            self.nickname = Some(nickname);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(height) = patch.height_cm {
            self.height_cm = Some(height);
        }
        if let Some(weight) = patch.weight_kg {
            self.weight_kg = Some(weight);
        }
        if let Some(age) = patch.age_years {
            self.age_years = Some(age);
        }
        if let Some(sex) = patch.sex {
            self.sex = Some(sex);
        }
    }
}

/// Profile snapshot with derived body metrics, as returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub handle: String,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub age_years: Option<i32>,
    pub sex: Option<String>,
    pub bmi: Option<f64>,
    pub bmi_category: BmiCategory,
    pub bmr: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub last_active_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterProfile {
    #[serde(default)]
    pub handle: String,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub age_years: Option<i32>,
    pub sex: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub age_years: Option<i32>,
    pub sex: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn profile() -> Profile {
        Profile {
            id: "p1".to_string(),
            handle: "alice".to_string(),
            email: None,
            nickname: Some("Al".to_string()),
            height_cm: Some(180.0),
            weight_kg: Some(81.0),
            age_years: Some(30),
            sex: Some("Male".to_string()),
            created_at: Utc::now(),
            last_active_at: None,
        }
    }

    #[test]
    fn test_view_carries_derived_metrics() {
        let view = profile().view();

        assert_approx_eq!(view.bmi.unwrap(), 25.0, 1e-9);
        assert_eq!(view.bmi_category, BmiCategory::Overweight);
        // 10*81 + 6.25*180 - 5*30 + 5
        assert_approx_eq!(view.bmr.unwrap(), 1790.0, 1e-9);
    }

    #[test]
    fn test_apply_only_overwrites_present_fields() {
        let mut p = profile();
        p.apply(UpdateProfile {
            weight_kg: Some(75.0),
            sex: Some("female".to_string()),
            ..Default::default()
        });

        assert_eq!(p.handle, "alice");
        assert_eq!(p.nickname.as_deref(), Some("Al"));
        assert_eq!(p.height_cm, Some(180.0));
        assert_eq!(p.weight_kg, Some(75.0));
        assert_eq!(p.sex.as_deref(), Some("female"));
    }

    #[test]
    fn test_view_without_height_is_unknown() {
        let mut p = profile();
        p.height_cm = None;
        let view = p.view();

        assert!(view.bmi.is_none());
        assert!(view.bmr.is_none());
        assert_eq!(view.bmi_category, BmiCategory::Unknown);
    }
}
