use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ironlog::catalog::ExerciseCatalog;
use ironlog::config::Config;
use ironlog::handlers::{exercises, health, profiles, workouts};
use ironlog::repositories::{
    ExerciseRepository, ProfileRepository, SessionRepository, SetRepository,
};
use ironlog::services::{ExerciseRanker, SessionSummarizer, WorkoutLogger};
use ironlog::version::GIT_VERSION;
use ironlog::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ironlog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing::info!("ironlog {}", GIT_VERSION);
    tracing::info!("Connecting to database: {}", config.database_url);

    let pool = db::create_pool(&config.database_url, config.pool_size)?;

    migrations::run_migrations(&pool)?;

    // Repositories
    let profile_repo = ProfileRepository::new(pool.clone());
    let exercise_repo = ExerciseRepository::new(pool.clone());
    let set_repo = SetRepository::new(pool.clone());
    let session_repo = SessionRepository::new(pool.clone());

    let catalog = Arc::new(ExerciseCatalog::load(&exercise_repo).await?);

    // Handler states
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

    let app = routes::create_router(health_state, profiles_state, exercises_state, workouts_state);

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
