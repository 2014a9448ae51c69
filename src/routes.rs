use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{exercises, health, profiles, workouts};

pub fn create_router(
    health_state: health::HealthState,
    profiles_state: profiles::ProfilesState,
    exercises_state: exercises::ExercisesState,
    workouts_state: workouts::WorkoutsState,
) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state)
        // Profile routes
        .route("/api/profiles", post(profiles::register))
        .route(
            "/api/profiles/{handle}",
            get(profiles::show).put(profiles::update),
        )
        .route(
            "/api/profiles/{handle}/last-active",
            put(profiles::touch_last_active),
        )
        .with_state(profiles_state)
        // Exercise catalog
        .route("/api/exercises", get(exercises::list))
        .route("/api/exercises/categories", get(exercises::categories))
        .with_state(exercises_state)
        // Workout routes
        .route("/api/workouts/log", post(workouts::log_set))
        .route("/api/workouts/history", get(workouts::history))
        .route("/api/workouts/most-used", get(workouts::most_used))
        .route("/api/workouts/popular", get(workouts::popular))
        .route(
            "/api/workouts/popular-exclude-self",
            get(workouts::popular_excluding_self),
        )
        .route("/api/workouts/session", post(workouts::save_session))
        .route("/api/workouts/sessions", get(workouts::sessions))
        .with_state(workouts_state)
        .layer(TraceLayer::new_for_http())
}
