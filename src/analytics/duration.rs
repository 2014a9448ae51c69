use thiserror::Error;

/// Why a duration string could not be turned into seconds. Never fatal:
/// callers keep the raw text and leave the numeric value empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("duration is empty")]
    Empty,

    #[error("expected HH:MM:SS or MM:SS, got {0} component(s)")]
    Shape(usize),

    #[error("non-numeric component {0:?}")]
    NonNumeric(String),

    #[error("duration out of range")]
    Overflow,
}

/// Parses `HH:MM:SS` or `MM:SS` into total seconds.
///
/// Components are plain integers (an explicit sign is accepted, whitespace is
/// not) and are not range-checked, so `"00:75"` is 75 seconds.
pub fn parse_clock_duration(text: &str) -> Result<i64, DurationParseError> {
    if text.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let components: Vec<&str> = text.split(':').collect();
    let (hours, minutes, seconds) = match components.as_slice() {
        [h, m, s] => (parse_component(h)?, parse_component(m)?, parse_component(s)?),
        [m, s] => (0, parse_component(m)?, parse_component(s)?),
        other => return Err(DurationParseError::Shape(other.len())),
    };

    hours
        .checked_mul(3600)
        .zip(minutes.checked_mul(60))
        .and_then(|(h, m)| h.checked_add(m))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or(DurationParseError::Overflow)
}

fn parse_component(part: &str) -> Result<i64, DurationParseError> {
    part.parse()
        .map_err(|_| DurationParseError::NonNumeric(part.to_string()))
}

/// Total-function wrapper: absent or unparseable text yields `None`.
pub fn normalize_duration(text: Option<&str>) -> Option<i64> {
    let text = text?;
    match parse_clock_duration(text) {
        Ok(seconds) => Some(seconds),
        Err(e) => {
            tracing::debug!("Unparseable duration {:?}: {}", text, e);
            None
        }
    }
}
