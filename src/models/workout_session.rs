use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// Write-once summary of a completed workout. Never updated after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: String,
    pub profile_id: String,
    /// Duration exactly as the client sent it, e.g. `00:35:12`.
    pub duration_text: Option<String>,
    /// `None` when `duration_text` could not be parsed.
    pub duration_seconds: Option<i64>,
    pub total_sets: i32,
    pub total_volume: f64,
    pub total_reps: i32,
    pub pr_count: i32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for WorkoutSession {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            profile_id: row.get("profile_id")?,
            duration_text: row.get("duration_text")?,
            duration_seconds: row.get("duration_seconds")?,
            total_sets: row.get("total_sets")?,
            total_volume: row.get("total_volume")?,
            total_reps: row.get("total_reps")?,
            pr_count: row.get("pr_count")?,
            start_time: row.get("start_time")?,
            end_time: row.get("end_time")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// Session summary as submitted by the client. Start and end are epoch
/// milliseconds where zero or negative means "not provided".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveSessionRequest {
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub total_sets: i32,
    #[serde(default)]
    pub total_volume: f64,
    #[serde(default)]
    pub total_reps: i32,
    #[serde(default)]
    pub pr_count: i32,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub end_time: i64,
}
