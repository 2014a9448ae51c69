//! Pure decision logic: body metrics, duration parsing, personal-record
//! detection, and exercise popularity ordering. Nothing in here touches the
//! database.

pub mod body_metrics;
pub mod duration;
pub mod personal_record;
pub mod popularity;
