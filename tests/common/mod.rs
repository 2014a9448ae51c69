#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ironlog::catalog::ExerciseCatalog;
use ironlog::db::{create_memory_pool, create_pool, DbPool};
use ironlog::handlers::{exercises, health, profiles, workouts};
use ironlog::migrations::{run_migrations, run_migrations_for_tests};
use ironlog::models::{LogSetRequest, LoggedSet, Profile, RegisterProfile};
use ironlog::repositories::{
    ExerciseRepository, ProfileRepository, SessionRepository, SetRepository,
};
use ironlog::services::{ExerciseRanker, SessionSummarizer, WorkoutLogger};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

/// File-backed database with a multi-connection pool, for tests that need
/// real contention between connections.
pub fn setup_file_db(dir: &Path, pool_size: u32) -> DbPool {
    let path = dir.join("ironlog-test.db");
    let pool = create_pool(path.to_str().unwrap(), pool_size).expect("Failed to create test database");
    run_migrations(&pool).expect("Failed to run migrations");
    pool
}

pub async fn load_catalog(pool: &DbPool) -> Arc<ExerciseCatalog> {
    let exercise_repo = ExerciseRepository::new(pool.clone());
    Arc::new(
        ExerciseCatalog::load(&exercise_repo)
            .await
            .expect("Failed to load catalog"),
    )
}

pub async fn create_test_app(pool: DbPool) -> Router {
    let catalog = load_catalog(&pool).await;

    // Create repositories
    let profile_repo = ProfileRepository::new(pool.clone());
    let set_repo = SetRepository::new(pool.clone());
    let session_repo = SessionRepository::new(pool.clone());

    // Create handler states
    let health_state = health::HealthState {
        profile_repo: profile_repo.clone(),
    };
    let profiles_state = profiles::ProfilesState {
        profile_repo: profile_repo.clone(),
    };
    let exercises_state = exercises::ExercisesState {
        catalog: catalog.clone(),
    };
    let workouts_state = workouts::WorkoutsState {
        logger: WorkoutLogger::new(catalog, profile_repo.clone(), set_repo.clone()),
        summarizer: SessionSummarizer::new(profile_repo, session_repo),
        ranker: ExerciseRanker::new(set_repo),
    };

    ironlog::routes::create_router(health_state, profiles_state, exercises_state, workouts_state)
}

// Test data creation helpers
pub async fn create_test_profile(pool: &DbPool, handle: &str) -> Profile {
    let profile_repo = ProfileRepository::new(pool.clone());
    profile_repo
        .create(RegisterProfile {
            handle: handle.to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
}

pub async fn log_test_set(
    pool: &DbPool,
    handle: &str,
    exercise_id: i64,
    weight: f64,
    reps: i32,
) -> LoggedSet {
    let catalog = load_catalog(pool).await;
    let logger = WorkoutLogger::new(
        catalog,
        ProfileRepository::new(pool.clone()),
        SetRepository::new(pool.clone()),
    );
    logger
        .log_set(LogSetRequest {
            handle: handle.to_string(),
            exercise_id,
            weight,
            reps,
            rest_seconds: 0,
        })
        .await
        .unwrap()
}

// Request helpers
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub fn json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body is not JSON")
}

pub fn text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Exercise ids of a ranking response, in order.
pub fn ids(body: &[u8]) -> Vec<i64> {
    json(body)
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}
