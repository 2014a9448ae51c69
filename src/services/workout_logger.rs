use std::sync::Arc;

use crate::catalog::ExerciseCatalog;
use crate::error::{AppError, Result};
use crate::models::{LogSetRequest, LoggedSet, LoggedSetWithExercise, Profile};
use crate::repositories::{NewLoggedSet, ProfileRepository, SetRepository};

pub const EXERCISE_NOT_FOUND: &str = "exercise not found";
pub const PROFILE_NOT_FOUND: &str = "profile not found: registration required";

/// Records individual sets, deciding the personal-record flag as each one
/// is stored.
#[derive(Clone)]
pub struct WorkoutLogger {
    catalog: Arc<ExerciseCatalog>,
    profile_repo: ProfileRepository,
    set_repo: SetRepository,
}

impl WorkoutLogger {
    pub fn new(
        catalog: Arc<ExerciseCatalog>,
        profile_repo: ProfileRepository,
        set_repo: SetRepository,
    ) -> Self {
        Self {
            catalog,
            profile_repo,
            set_repo,
        }
    }

    /// Logs one set. The exercise is resolved before the profile, and a
    /// missing profile is never created implicitly.
    pub async fn log_set(&self, request: LogSetRequest) -> Result<LoggedSet> {
        tracing::debug!(
            "Log set request: handle={}, exercise_id={}, weight={}, reps={}",
            request.handle,
            request.exercise_id,
            request.weight,
            request.reps
        );

        let exercise = self
            .catalog
            .find_by_id(request.exercise_id)
            .ok_or_else(|| AppError::not_found(EXERCISE_NOT_FOUND))?;

        let profile = self.require_profile(&request.handle).await?;

        let set = self
            .set_repo
            .insert_with_pr_check(NewLoggedSet {
                profile_id: profile.id,
                exercise_id: exercise.id,
                weight: request.weight,
                reps: request.reps,
                rest_seconds: request.rest_seconds,
            })
            .await?;

        tracing::info!(
            "Logged set {} for {}: {} {}x{} (pr={})",
            set.id,
            request.handle,
            exercise.name,
            set.weight,
            set.reps,
            set.is_personal_record
        );
        Ok(set)
    }

    /// A profile's history: one exercise heaviest first, or everything most
    /// recent first.
    pub async fn history(
        &self,
        handle: &str,
        exercise_id: Option<i64>,
    ) -> Result<Vec<LoggedSetWithExercise>> {
        let profile = self.require_profile(handle).await?;

        match exercise_id {
            Some(id) => {
                let exercise = self
                    .catalog
                    .find_by_id(id)
                    .ok_or_else(|| AppError::not_found(EXERCISE_NOT_FOUND))?;
                self.set_repo
                    .find_history_for_exercise(&profile.id, exercise.id)
                    .await
            }
            None => self.set_repo.find_history(&profile.id).await,
        }
    }

    async fn require_profile(&self, handle: &str) -> Result<Profile> {
        self.profile_repo
            .find_by_handle(handle)
            .await?
            .ok_or_else(|| AppError::not_found(PROFILE_NOT_FOUND))
    }
}
