use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::analytics::duration::normalize_duration;
use crate::error::{AppError, Result};
use crate::models::{SaveSessionRequest, WorkoutSession};
use crate::repositories::{ProfileRepository, SessionRepository};
use crate::services::workout_logger::PROFILE_NOT_FOUND;

/// Persists the aggregate summary of a finished workout. The summary is
/// stored as submitted; it is not reconciled against logged sets.
#[derive(Clone)]
pub struct SessionSummarizer {
    profile_repo: ProfileRepository,
    session_repo: SessionRepository,
}

impl SessionSummarizer {
    pub fn new(profile_repo: ProfileRepository, session_repo: SessionRepository) -> Self {
        Self {
            profile_repo,
            session_repo,
        }
    }

    pub async fn save_session(&self, request: SaveSessionRequest) -> Result<WorkoutSession> {
        if request.handle.trim().is_empty() {
            return Err(AppError::validation("handle required"));
        }

        let profile = self
            .profile_repo
            .find_by_handle(&request.handle)
            .await?
            .ok_or_else(|| AppError::not_found(PROFILE_NOT_FOUND))?;

        let start_time = epoch_millis_to_time(request.start_time, "start_time")?;
        let end_time = epoch_millis_to_time(request.end_time, "end_time")?;
        let duration_seconds = normalize_duration(request.duration.as_deref());

        let session = WorkoutSession {
            id: Uuid::new_v4().to_string(),
            profile_id: profile.id,
            duration_text: request.duration,
            duration_seconds,
            total_sets: request.total_sets,
            total_volume: request.total_volume,
            total_reps: request.total_reps,
            pr_count: request.pr_count,
            start_time,
            end_time,
            created_at: Utc::now(),
        };

        let session = self.session_repo.insert(session).await?;
        tracing::info!(
            "Saved workout session {} for {} ({} sets, {} PRs)",
            session.id,
            request.handle,
            session.total_sets,
            session.pr_count
        );
        Ok(session)
    }

    pub async fn sessions_for(&self, handle: &str) -> Result<Vec<WorkoutSession>> {
        let profile = self
            .profile_repo
            .find_by_handle(handle)
            .await?
            .ok_or_else(|| AppError::not_found(PROFILE_NOT_FOUND))?;
        self.session_repo.find_by_profile(&profile.id).await
    }
}

/// Zero or negative means the client did not provide the instant. A
/// positive value outside chrono's range is rejected.
fn epoch_millis_to_time(millis: i64, field: &str) -> Result<Option<DateTime<Utc>>> {
    if millis <= 0 {
        return Ok(None);
    }
    DateTime::from_timestamp_millis(millis)
        .map(Some)
        .ok_or_else(|| AppError::validation(format!("{field} out of range")))
}
