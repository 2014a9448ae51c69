use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, FromSqliteRow};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM exercises ORDER BY id")?;
            let exercises = stmt
                .query_map([], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Inserts exercises whose id is not stored yet. Existing rows are never
    /// rewritten. Returns how many rows were added.
    pub async fn seed(&self, exercises: Vec<Exercise>) -> Result<usize> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;
            let mut inserted = 0;
            {
                let mut stmt = tx.prepare(
                    "INSERT OR IGNORE INTO exercises (id, name, category) VALUES (?, ?, ?)",
                )?;
                for exercise in &exercises {
                    inserted += stmt.execute(rusqlite::params![
                        exercise.id,
                        exercise.name,
                        exercise.category
                    ])?;
                }
            }
            tx.commit()?;
            Ok(inserted)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
