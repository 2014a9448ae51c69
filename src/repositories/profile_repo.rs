use chrono::Utc;
use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, Profile, RegisterProfile, UpdateProfile};

#[derive(Clone)]
pub struct ProfileRepository {
    pool: DbPool,
}

impl ProfileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM profiles", [], |row| row.get(0))?;
            Ok(count)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_handle(&self, handle: &str) -> Result<Option<Profile>> {
        let pool = self.pool.clone();
        let handle = handle.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM profiles WHERE handle = ?")?;
            let result = stmt.query_row([&handle], Profile::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Registers a new profile. The handle must be non-blank and unused.
    pub async fn create(&self, input: RegisterProfile) -> Result<Profile> {
        if input.handle.trim().is_empty() {
            return Err(AppError::validation("handle required"));
        }

        let now = Utc::now();
        let profile = Profile {
            id: Uuid::new_v4().to_string(),
            handle: input.handle,
            email: input.email,
            nickname: input.nickname,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            age_years: input.age_years,
            sex: input.sex,
            created_at: now,
            last_active_at: Some(now),
        };
        let p = profile.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            let taken: bool = conn.query_row(
                "SELECT COUNT(*) > 0 FROM profiles WHERE handle = ?",
                [&p.handle],
                |row| row.get(0),
            )?;
            if taken {
                return Err(AppError::validation("handle already exists"));
            }

            conn.execute(
                "INSERT INTO profiles (id, handle, email, nickname, height_cm, weight_kg, age_years, sex, created_at, last_active_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    p.id,
                    p.handle,
                    p.email,
                    p.nickname,
                    p.height_cm,
                    p.weight_kg,
                    p.age_years,
                    p.sex,
                    p.created_at,
                    p.last_active_at
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    AppError::validation("handle already exists")
                }
                other => AppError::Database(other),
            })?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        tracing::info!("Registered profile {}", profile.handle);
        Ok(profile)
    }

    /// Applies a partial update. Returns `None` when the handle is unknown.
    pub async fn update(&self, handle: &str, patch: UpdateProfile) -> Result<Option<Profile>> {
        let Some(mut profile) = self.find_by_handle(handle).await? else {
            return Ok(None);
        };
        profile.apply(patch);
        let p = profile.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "UPDATE profiles
                 SET email = ?, nickname = ?, height_cm = ?, weight_kg = ?, age_years = ?, sex = ?
                 WHERE id = ?",
                rusqlite::params![
                    p.email,
                    p.nickname,
                    p.height_cm,
                    p.weight_kg,
                    p.age_years,
                    p.sex,
                    p.id
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(Some(profile))
    }

    /// Stamps the last-activity time. Returns false when the handle is unknown.
    pub async fn touch_last_active(&self, handle: &str) -> Result<bool> {
        let pool = self.pool.clone();
        let handle = handle.to_string();
        let now = Utc::now();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE profiles SET last_active_at = ? WHERE handle = ?",
                rusqlite::params![now, handle],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
