use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::ExerciseCatalog;
use crate::models::{Exercise, ExerciseCategory, CATEGORIES};

#[derive(Clone)]
pub struct ExercisesState {
    pub catalog: Arc<ExerciseCatalog>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    category: Option<String>,
}

pub async fn list(
    State(state): State<ExercisesState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Exercise>> {
    let exercises = match query.category.as_deref() {
        Some(category) => state.catalog.by_category(category).cloned().collect(),
        None => state.catalog.all().to_vec(),
    };
    Json(exercises)
}

#[derive(Serialize)]
pub struct CategoryEntry {
    #[serde(flatten)]
    category: ExerciseCategory,
    exercise_count: usize,
}

pub async fn categories(State(state): State<ExercisesState>) -> Json<Vec<CategoryEntry>> {
    let entries = CATEGORIES
        .iter()
        .map(|c| CategoryEntry {
            category: c.clone(),
            exercise_count: state.catalog.by_category(c.name).count(),
        })
        .collect();
    Json(entries)
}
