use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// One recorded set. The PR flag is decided once at insert time and is
/// never recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedSet {
    pub id: String,
    pub profile_id: String,
    pub exercise_id: i64,
    pub weight: f64,
    pub reps: i32,
    pub rest_seconds: i32,
    pub duration_seconds: Option<i32>,
    pub is_personal_record: bool,
    pub logged_at: DateTime<Utc>,
}

impl FromSqliteRow for LoggedSet {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            profile_id: row.get("profile_id")?,
            exercise_id: row.get("exercise_id")?,
            weight: row.get("weight")?,
            reps: row.get("reps")?,
            rest_seconds: row.get("rest_seconds")?,
            duration_seconds: row.get("duration_seconds")?,
            is_personal_record: row.get("is_personal_record")?,
            logged_at: row.get("logged_at")?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggedSetWithExercise {
    pub id: String,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub category: String,
    pub weight: f64,
    pub reps: i32,
    pub rest_seconds: i32,
    pub is_personal_record: bool,
    pub logged_at: DateTime<Utc>,
}

impl FromSqliteRow for LoggedSetWithExercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            exercise_id: row.get("exercise_id")?,
            exercise_name: row.get("exercise_name")?,
            category: row.get("category")?,
            weight: row.get("weight")?,
            reps: row.get("reps")?,
            rest_seconds: row.get("rest_seconds")?,
            is_personal_record: row.get("is_personal_record")?,
            logged_at: row.get("logged_at")?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSetRequest {
    pub handle: String,
    pub exercise_id: i64,
    pub weight: f64,
    pub reps: i32,
    #[serde(default)]
    pub rest_seconds: i32,
}
