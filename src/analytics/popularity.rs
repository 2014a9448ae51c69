use crate::models::Exercise;

/// Which logged sets count towards an exercise's usage. The three ranking
/// queries differ only in this filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingScope<'a> {
    /// Only sets logged by this profile handle.
    Profile(&'a str),
    /// Every profile.
    Global,
    /// Every profile except this handle.
    ExcludingProfile(&'a str),
}

impl<'a> RankingScope<'a> {
    pub fn include_handle(&self) -> Option<&'a str> {
        match self {
            RankingScope::Profile(handle) => Some(*handle),
            _ => None,
        }
    }

    pub fn exclude_handle(&self) -> Option<&'a str> {
        match self {
            RankingScope::ExcludingProfile(handle) => Some(*handle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseUsage {
    pub exercise: Exercise,
    pub count: i64,
}

/// Orders exercises by usage count descending. Ties go to the lower
/// exercise id. Zero counts are dropped; the counts themselves are not
/// returned.
pub fn rank_by_usage(mut usages: Vec<ExerciseUsage>) -> Vec<Exercise> {
    usages.retain(|u| u.count > 0);
    usages.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.exercise.id.cmp(&b.exercise.id))
    });
    usages.into_iter().map(|u| u.exercise).collect()
}
