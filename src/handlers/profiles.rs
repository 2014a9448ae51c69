use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, Result};
use crate::models::{ProfileView, RegisterProfile, UpdateProfile};
use crate::repositories::ProfileRepository;
use crate::services::workout_logger::PROFILE_NOT_FOUND;

#[derive(Clone)]
pub struct ProfilesState {
    pub profile_repo: ProfileRepository,
}

pub async fn register(
    State(state): State<ProfilesState>,
    Json(input): Json<RegisterProfile>,
) -> Result<(StatusCode, Json<ProfileView>)> {
    let profile = state.profile_repo.create(input).await?;
    Ok((StatusCode::CREATED, Json(profile.view())))
}

pub async fn show(
    State(state): State<ProfilesState>,
    Path(handle): Path<String>,
) -> Result<Json<ProfileView>> {
    let profile = state
        .profile_repo
        .find_by_handle(&handle)
        .await?
        .ok_or_else(|| AppError::not_found(PROFILE_NOT_FOUND))?;

    Ok(Json(profile.view()))
}

pub async fn update(
    State(state): State<ProfilesState>,
    Path(handle): Path<String>,
    Json(patch): Json<UpdateProfile>,
) -> Result<Json<ProfileView>> {
    let profile = state
        .profile_repo
        .update(&handle, patch)
        .await?
        .ok_or_else(|| AppError::not_found(PROFILE_NOT_FOUND))?;

    Ok(Json(profile.view()))
}

pub async fn touch_last_active(
    State(state): State<ProfilesState>,
    Path(handle): Path<String>,
) -> Result<StatusCode> {
    if state.profile_repo.touch_last_active(&handle).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(PROFILE_NOT_FOUND))
    }
}
