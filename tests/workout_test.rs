mod common;

use axum::http::StatusCode;
use ironlog::models::LogSetRequest;
use ironlog::repositories::{ProfileRepository, SetRepository};
use ironlog::services::WorkoutLogger;
use serde_json::json;

async fn log(app: &axum::Router, handle: &str, exercise_id: i64, weight: f64) -> (StatusCode, Vec<u8>) {
    common::send_json(
        app,
        "POST",
        "/api/workouts/log",
        json!({ "handle": handle, "exercise_id": exercise_id, "weight": weight, "reps": 5, "rest_seconds": 90 }),
    )
    .await
}

#[tokio::test]
async fn test_log_flags_strictly_heavier_sets_as_records() {
    let pool = common::setup_test_db();
    common::create_test_profile(&pool, "alice").await;
    let app = common::create_test_app(pool).await;

    let mut flags = Vec::new();
    for weight in [50.0, 60.0, 60.0, 55.0] {
        let (status, body) = log(&app, "alice", 1, weight).await;
        assert_eq!(status, StatusCode::CREATED);
        let set = common::json(&body);
        assert_eq!(set["weight"], weight);
        assert_eq!(set["rest_seconds"], 90);
        assert_eq!(set["duration_seconds"], 0);
        flags.push(set["is_personal_record"].as_bool().unwrap());
    }

    assert_eq!(flags, vec![true, true, false, false]);
}

#[tokio::test]
async fn test_records_are_per_exercise_and_profile() {
    let pool = common::setup_test_db();
    common::create_test_profile(&pool, "alice").await;
    common::create_test_profile(&pool, "bob").await;
    let app = common::create_test_app(pool).await;

    log(&app, "alice", 1, 100.0).await;

    let (_, body) = log(&app, "alice", 2, 20.0).await;
    assert_eq!(common::json(&body)["is_personal_record"], true);

    let (_, body) = log(&app, "bob", 1, 40.0).await;
    assert_eq!(common::json(&body)["is_personal_record"], true);
}

#[tokio::test]
async fn test_log_unknown_exercise_is_not_found() {
    let pool = common::setup_test_db();
    common::create_test_profile(&pool, "alice").await;
    let app = common::create_test_app(pool).await;

    let (status, body) = log(&app, "alice", 999, 50.0).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(common::text(&body), "exercise not found");
}

#[tokio::test]
async fn test_log_checks_exercise_before_profile() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool).await;

    let (status, body) = log(&app, "ghost", 999, 50.0).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(common::text(&body), "exercise not found");

    let (status, body) = log(&app, "ghost", 1, 50.0).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(common::text(&body), "profile not found: registration required");
}

#[tokio::test]
async fn test_rejected_log_persists_nothing() {
    let pool = common::setup_test_db();
    common::create_test_profile(&pool, "alice").await;
    let app = common::create_test_app(pool).await;

    log(&app, "ghost", 1, 50.0).await;
    log(&app, "alice", 999, 50.0).await;

    let (status, body) = common::get(&app, "/api/workouts/history?handle=alice").await;
    assert_eq!(status, StatusCode::OK);
    assert!(common::json(&body).as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_history_for_exercise_is_heaviest_first() {
    let pool = common::setup_test_db();
    common::create_test_profile(&pool, "alice").await;
    common::log_test_set(&pool, "alice", 1, 50.0, 5).await;
    common::log_test_set(&pool, "alice", 1, 70.0, 3).await;
    common::log_test_set(&pool, "alice", 1, 60.0, 4).await;
    common::log_test_set(&pool, "alice", 16, 120.0, 5).await;
    let app = common::create_test_app(pool).await;

    let (status, body) =
        common::get(&app, "/api/workouts/history?handle=alice&exercise_id=1").await;

    assert_eq!(status, StatusCode::OK);
    let sets = common::json(&body);
    let weights: Vec<f64> = sets
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["weight"].as_f64().unwrap())
        .collect();
    assert_eq!(weights, vec![70.0, 60.0, 50.0]);
    assert_eq!(sets[0]["exercise_name"], "Barbell Bench Press");
    assert_eq!(sets[0]["category"], "chest");
}

#[tokio::test]
async fn test_full_history_is_most_recent_first() {
    let pool = common::setup_test_db();
    common::create_test_profile(&pool, "alice").await;
    common::log_test_set(&pool, "alice", 1, 50.0, 5).await;
    common::log_test_set(&pool, "alice", 16, 120.0, 5).await;
    let app = common::create_test_app(pool).await;

    let (status, body) = common::get(&app, "/api/workouts/history?handle=alice").await;

    assert_eq!(status, StatusCode::OK);
    let sets = common::json(&body);
    assert_eq!(sets.as_array().unwrap().len(), 2);
    assert_eq!(sets[0]["exercise_id"], 16);
    assert_eq!(sets[1]["exercise_id"], 1);
}

#[tokio::test]
async fn test_history_requires_known_profile() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool).await;

    let (status, _) = common::get(&app, "/api/workouts/history?handle=ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = common::get(&app, "/api/workouts/history").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::text(&body), "handle required");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_equal_maximum_yields_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let pool = common::setup_file_db(dir.path(), 8);
    common::create_test_profile(&pool, "alice").await;

    let logger = WorkoutLogger::new(
        common::load_catalog(&pool).await,
        ProfileRepository::new(pool.clone()),
        SetRepository::new(pool.clone()),
    );

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let logger = logger.clone();
            tokio::spawn(async move {
                logger
                    .log_set(LogSetRequest {
                        handle: "alice".to_string(),
                        exercise_id: 1,
                        weight: 100.0,
                        reps: 5,
                        rest_seconds: 0,
                    })
                    .await
            })
        })
        .collect();

    let mut records = 0;
    for task in tasks {
        let set = task.await.unwrap().expect("concurrent log failed");
        if set.is_personal_record {
            records += 1;
        }
    }
    assert_eq!(records, 1);

    let history = logger.history("alice", Some(1)).await.unwrap();
    assert_eq!(history.len(), 16);
    assert_eq!(history.iter().filter(|s| s.is_personal_record).count(), 1);
}
