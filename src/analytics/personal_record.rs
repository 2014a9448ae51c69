use crate::models::LoggedSet;

/// Decides whether `candidate_weight` is a personal record given the prior
/// history for one profile and exercise, ordered by weight descending.
///
/// Empty history is always a record. Otherwise the candidate must beat the
/// best prior weight strictly; a tie is not a record. No weight validation
/// is applied, so zero or negative weights take part like any other value.
/// The history must not contain the candidate itself.
pub fn is_personal_record(history_by_weight_desc: &[LoggedSet], candidate_weight: f64) -> bool {
    beats_best(
        history_by_weight_desc.first().map(|set| set.weight),
        candidate_weight,
    )
}

pub fn beats_best(best_prior_weight: Option<f64>, candidate_weight: f64) -> bool {
    match best_prior_weight {
        None => true,
        Some(best) => candidate_weight > best,
    }
}
