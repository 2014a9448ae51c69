use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, WorkoutSession};

/// Storage for completed workout session summaries. Rows are write-once:
/// there is no update path.
#[derive(Clone)]
pub struct SessionRepository {
    pool: DbPool,
}

impl SessionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, session: WorkoutSession) -> Result<WorkoutSession> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO workout_sessions
                    (id, profile_id, duration_text, duration_seconds, total_sets, total_volume,
                     total_reps, pr_count, start_time, end_time, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    session.id,
                    session.profile_id,
                    session.duration_text,
                    session.duration_seconds,
                    session.total_sets,
                    session.total_volume,
                    session.total_reps,
                    session.pr_count,
                    session.start_time,
                    session.end_time,
                    session.created_at
                ],
            )?;
            Ok(session)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Sessions of one profile, newest first.
    pub async fn find_by_profile(&self, profile_id: &str) -> Result<Vec<WorkoutSession>> {
        let pool = self.pool.clone();
        let profile_id = profile_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM workout_sessions WHERE profile_id = ? ORDER BY created_at DESC, rowid DESC",
            )?;
            let sessions = stmt
                .query_map([&profile_id], WorkoutSession::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(sessions)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations_for_tests;
    use chrono::{DateTime, Utc};

    fn setup_test_db() -> DbPool {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO profiles (id, handle, created_at) VALUES ('p1', 'alice', datetime('now'))",
            [],
        )
        .unwrap();
        drop(conn);
        pool
    }

    fn session(id: &str, start: Option<DateTime<Utc>>) -> WorkoutSession {
        WorkoutSession {
            id: id.to_string(),
            profile_id: "p1".to_string(),
            duration_text: Some("00:45:00".to_string()),
            duration_seconds: Some(2700),
            total_sets: 12,
            total_volume: 5400.0,
            total_reps: 96,
            pr_count: 2,
            start_time: start,
            end_time: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_round_trips_optional_fields() {
        let repo = SessionRepository::new(setup_test_db());
        let start = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();

        repo.insert(session("s1", Some(start))).await.unwrap();

        let stored = repo.find_by_profile("p1").await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].start_time, Some(start));
        assert_eq!(stored[0].end_time, None);
        assert_eq!(stored[0].duration_seconds, Some(2700));
        assert_eq!(stored[0].total_volume, 5400.0);
    }

    #[tokio::test]
    async fn test_find_by_profile_newest_first() {
        let repo = SessionRepository::new(setup_test_db());

        repo.insert(session("s1", None)).await.unwrap();
        repo.insert(session("s2", None)).await.unwrap();

        let ids: Vec<String> = repo
            .find_by_profile("p1")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["s2", "s1"]);
        assert!(repo.find_by_profile("nobody").await.unwrap().is_empty());
    }
}
