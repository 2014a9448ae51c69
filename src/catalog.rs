//! Built-in exercise library and the immutable in-memory catalog built from
//! it at start-up.

use std::collections::HashMap;

use crate::error::Result;
use crate::models::Exercise;
use crate::repositories::ExerciseRepository;

/// (id, name, category). Ids are stable and double as the ranking tiebreak.
const LIBRARY: &[(i64, &str, &str)] = &[
    (1, "Barbell Bench Press", "chest"),
    (2, "Incline Dumbbell Press", "chest"),
    (3, "Decline Barbell Press", "chest"),
    (4, "Dumbbell Fly", "chest"),
    (5, "Pec Deck Machine", "chest"),
    (6, "Pull-up", "back"),
    (7, "Barbell Row", "back"),
    (8, "Dumbbell Row", "back"),
    (9, "Seated Cable Row", "back"),
    (10, "Lat Pulldown", "back"),
    (11, "Dumbbell Shoulder Press", "shoulder"),
    (12, "Lateral Raise", "shoulder"),
    (13, "Front Raise", "shoulder"),
    (14, "Bent-over Reverse Fly", "shoulder"),
    (15, "Shrug", "shoulder"),
    (16, "Barbell Squat", "legs"),
    (17, "Leg Press", "legs"),
    (18, "Leg Curl", "legs"),
    (19, "Leg Extension", "legs"),
    (20, "Deadlift", "legs"),
    (21, "Barbell Curl", "arms"),
    (22, "Dumbbell Curl", "arms"),
    (23, "Close Grip Bench Press", "arms"),
    (24, "Cable Pushdown", "arms"),
    (25, "Hammer Curl", "arms"),
];

pub fn builtin_exercises() -> Vec<Exercise> {
    LIBRARY
        .iter()
        .map(|&(id, name, category)| Exercise {
            id,
            name: name.to_string(),
            category: category.to_string(),
        })
        .collect()
}

/// Read-only snapshot of every exercise, looked up by id. Built once and
/// shared behind an `Arc`; there is no way to mutate it afterwards.
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
    by_id: HashMap<i64, usize>,
}

impl ExerciseCatalog {
    pub fn new(mut exercises: Vec<Exercise>) -> Self {
        exercises.sort_by_key(|e| e.id);
        exercises.dedup_by_key(|e| e.id);
        let by_id = exercises
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.id, idx))
            .collect();
        Self { exercises, by_id }
    }

    /// Seeds the built-in library (existing rows are left alone) and loads
    /// every stored exercise.
    pub async fn load(repo: &ExerciseRepository) -> Result<Self> {
        let inserted = repo.seed(builtin_exercises()).await?;
        let catalog = Self::new(repo.find_all().await?);
        if catalog.is_empty() {
            tracing::warn!("Exercise catalog is empty, every log request will be rejected");
        }
        tracing::info!(
            "Exercise catalog loaded: {} exercises ({} newly seeded)",
            catalog.len(),
            inserted
        );
        Ok(catalog)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Exercise> {
        self.by_id.get(&id).map(|&idx| &self.exercises[idx])
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Exercise> + 'a {
        self.exercises.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
