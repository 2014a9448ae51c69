use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{
    Exercise, LogSetRequest, LoggedSet, LoggedSetWithExercise, SaveSessionRequest, WorkoutSession,
};
use crate::services::{ExerciseRanker, SessionSummarizer, WorkoutLogger};

#[derive(Clone)]
pub struct WorkoutsState {
    pub logger: WorkoutLogger,
    pub summarizer: SessionSummarizer,
    pub ranker: ExerciseRanker,
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    handle: Option<String>,
    exercise_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct HandleQuery {
    handle: Option<String>,
}

#[derive(Deserialize)]
pub struct RankingQuery {
    category: Option<String>,
    handle: Option<String>,
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::validation(format!("{name} required")))
}

fn required_handle(handle: Option<String>) -> Result<String> {
    required(handle, "handle")
}

pub async fn log_set(
    State(state): State<WorkoutsState>,
    Json(request): Json<LogSetRequest>,
) -> Result<(StatusCode, Json<LoggedSet>)> {
    let set = state.logger.log_set(request).await?;
    Ok((StatusCode::CREATED, Json(set)))
}

pub async fn history(
    State(state): State<WorkoutsState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<LoggedSetWithExercise>>> {
    let handle = required_handle(query.handle)?;
    let sets = state.logger.history(&handle, query.exercise_id).await?;
    Ok(Json(sets))
}

pub async fn most_used(
    State(state): State<WorkoutsState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Vec<Exercise>>> {
    let handle = required_handle(query.handle)?;
    let category = required(query.category, "category")?;
    let ranked = state.ranker.most_used_by(&handle, &category).await?;
    Ok(Json(ranked))
}

pub async fn popular(
    State(state): State<WorkoutsState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Vec<Exercise>>> {
    let category = required(query.category, "category")?;
    let ranked = state.ranker.popular(&category).await?;
    Ok(Json(ranked))
}

pub async fn popular_excluding_self(
    State(state): State<WorkoutsState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Vec<Exercise>>> {
    let handle = required_handle(query.handle)?;
    let category = required(query.category, "category")?;
    let ranked = state.ranker.popular_excluding(&category, &handle).await?;
    Ok(Json(ranked))
}

pub async fn save_session(
    State(state): State<WorkoutsState>,
    Json(request): Json<SaveSessionRequest>,
) -> Result<(StatusCode, Json<WorkoutSession>)> {
    let session = state.summarizer.save_session(request).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn sessions(
    State(state): State<WorkoutsState>,
    Query(query): Query<HandleQuery>,
) -> Result<Json<Vec<WorkoutSession>>> {
    let handle = required_handle(query.handle)?;
    let sessions = state.summarizer.sessions_for(&handle).await?;
    Ok(Json(sessions))
}
