use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// Shared reference data. Exercises belong to the catalog, never to a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub category: String,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            category: row.get("category")?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseCategory {
    pub name: &'static str,
    pub display_name: &'static str,
}

/// Categories of the built-in library. Other tags are accepted as free-form.
pub const CATEGORIES: &[ExerciseCategory] = &[
    ExerciseCategory { name: "chest", display_name: "Chest" },
    ExerciseCategory { name: "back", display_name: "Back" },
    ExerciseCategory { name: "shoulder", display_name: "Shoulder" },
    ExerciseCategory { name: "legs", display_name: "Legs" },
    ExerciseCategory { name: "arms", display_name: "Arms" },
];
