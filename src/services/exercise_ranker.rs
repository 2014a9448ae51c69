use crate::analytics::popularity::{rank_by_usage, RankingScope};
use crate::error::Result;
use crate::models::Exercise;
use crate::repositories::SetRepository;

/// Ranks exercises of a category by how often sets were logged for them.
#[derive(Clone)]
pub struct ExerciseRanker {
    set_repo: SetRepository,
}

impl ExerciseRanker {
    pub fn new(set_repo: SetRepository) -> Self {
        Self { set_repo }
    }

    pub async fn rank(&self, category: &str, scope: RankingScope<'_>) -> Result<Vec<Exercise>> {
        let usages = self.set_repo.count_grouped_by_exercise(category, scope).await?;
        Ok(rank_by_usage(usages))
    }

    /// The profile's own most used exercises in `category`.
    pub async fn most_used_by(&self, handle: &str, category: &str) -> Result<Vec<Exercise>> {
        self.rank(category, RankingScope::Profile(handle)).await
    }

    pub async fn popular(&self, category: &str) -> Result<Vec<Exercise>> {
        self.rank(category, RankingScope::Global).await
    }

    /// What everyone else uses in `category`.
    pub async fn popular_excluding(&self, category: &str, handle: &str) -> Result<Vec<Exercise>> {
        self.rank(category, RankingScope::ExcludingProfile(handle)).await
    }
}
