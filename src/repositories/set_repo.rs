use chrono::Utc;
use rusqlite::{Connection, TransactionBehavior};
use uuid::Uuid;

use crate::analytics::personal_record::is_personal_record;
use crate::analytics::popularity::{ExerciseUsage, RankingScope};
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, FromSqliteRow, LoggedSet, LoggedSetWithExercise};

/// A set about to be logged. Identity, timestamp and PR flag are assigned
/// on insert.
#[derive(Debug, Clone)]
pub struct NewLoggedSet {
    pub profile_id: String,
    pub exercise_id: i64,
    pub weight: f64,
    pub reps: i32,
    pub rest_seconds: i32,
}

#[derive(Clone)]
pub struct SetRepository {
    pool: DbPool,
}

impl SetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// History for one exercise, heaviest first, with exercise names.
    pub async fn find_history_for_exercise(
        &self,
        profile_id: &str,
        exercise_id: i64,
    ) -> Result<Vec<LoggedSetWithExercise>> {
        let pool = self.pool.clone();
        let profile_id = profile_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT s.id, s.exercise_id, e.name AS exercise_name, e.category,
                        s.weight, s.reps, s.rest_seconds, s.is_personal_record, s.logged_at
                 FROM logged_sets s
                 JOIN exercises e ON e.id = s.exercise_id
                 WHERE s.profile_id = ? AND s.exercise_id = ?
                 ORDER BY s.weight DESC, s.rowid ASC",
            )?;
            let sets = stmt
                .query_map(rusqlite::params![profile_id, exercise_id], LoggedSetWithExercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(sets)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Every set of a profile, most recent first.
    pub async fn find_history(&self, profile_id: &str) -> Result<Vec<LoggedSetWithExercise>> {
        let pool = self.pool.clone();
        let profile_id = profile_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT s.id, s.exercise_id, e.name AS exercise_name, e.category,
                        s.weight, s.reps, s.rest_seconds, s.is_personal_record, s.logged_at
                 FROM logged_sets s
                 JOIN exercises e ON e.id = s.exercise_id
                 WHERE s.profile_id = ?
                 ORDER BY s.logged_at DESC, s.rowid DESC",
            )?;
            let sets = stmt
                .query_map([&profile_id], LoggedSetWithExercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(sets)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Decides the PR flag and stores the set in one IMMEDIATE transaction.
    ///
    /// The write lock is taken before history is read, so two loggers racing
    /// on the same profile and exercise are serialised: the second one sees
    /// the first one's row and at most one of them can claim a new maximum.
    pub async fn insert_with_pr_check(&self, new_set: NewLoggedSet) -> Result<LoggedSet> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let history = query_sets_by_weight(&tx, &new_set.profile_id, new_set.exercise_id)?;
            let set = LoggedSet {
                id: Uuid::new_v4().to_string(),
                profile_id: new_set.profile_id,
                exercise_id: new_set.exercise_id,
                weight: new_set.weight,
                reps: new_set.reps,
                rest_seconds: new_set.rest_seconds,
                // per-set duration is not tracked; sessions carry the real one
                duration_seconds: Some(0),
                is_personal_record: is_personal_record(&history, new_set.weight),
                logged_at: Utc::now(),
            };
            insert_set(&tx, &set)?;

            tx.commit()?;
            Ok(set)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Logged-set counts per exercise within one category, filtered by
    /// `scope`. Exercises without a matching set are not returned.
    pub async fn count_grouped_by_exercise(
        &self,
        category: &str,
        scope: RankingScope<'_>,
    ) -> Result<Vec<ExerciseUsage>> {
        let pool = self.pool.clone();
        let category = category.to_string();
        let include = scope.include_handle().map(str::to_string);
        let exclude = scope.exclude_handle().map(str::to_string);
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT e.id, e.name, e.category, COUNT(*) AS usage_count
                 FROM logged_sets s
                 JOIN exercises e ON e.id = s.exercise_id
                 JOIN profiles p ON p.id = s.profile_id
                 WHERE e.category = ?1
                   AND (?2 IS NULL OR p.handle = ?2)
                   AND (?3 IS NULL OR p.handle <> ?3)
                 GROUP BY e.id, e.name, e.category
                 ORDER BY usage_count DESC, e.id ASC",
            )?;
            let usages = stmt
                .query_map(rusqlite::params![category, include, exclude], |row| {
                    Ok(ExerciseUsage {
                        exercise: Exercise::from_row(row)?,
                        count: row.get("usage_count")?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(usages)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

fn query_sets_by_weight(
    conn: &Connection,
    profile_id: &str,
    exercise_id: i64,
) -> rusqlite::Result<Vec<LoggedSet>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM logged_sets
         WHERE profile_id = ? AND exercise_id = ?
         ORDER BY weight DESC, rowid ASC",
    )?;
    let sets = stmt
        .query_map(rusqlite::params![profile_id, exercise_id], LoggedSet::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(sets)
}

fn insert_set(conn: &Connection, set: &LoggedSet) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO logged_sets
            (id, profile_id, exercise_id, weight, reps, rest_seconds, duration_seconds, is_personal_record, logged_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        rusqlite::params![
            set.id,
            set.profile_id,
            set.exercise_id,
            set.weight,
            set.reps,
            set.rest_seconds,
            set.duration_seconds,
            set.is_personal_record,
            set.logged_at
        ],
    )?;
    Ok(())
}
