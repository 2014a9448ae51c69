use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::Result;
use crate::repositories::ProfileRepository;
use crate::version::GIT_VERSION;

#[derive(Clone)]
pub struct HealthState {
    pub profile_repo: ProfileRepository,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    git_version: &'static str,
    profiles: i64,
}

/// Liveness plus a cheap round trip through the database pool.
pub async fn health_check(State(state): State<HealthState>) -> Result<Json<HealthResponse>> {
    let profiles = state.profile_repo.count().await?;
    Ok(Json(HealthResponse {
        status: "ok",
        git_version: GIT_VERSION,
        profiles,
    }))
}
