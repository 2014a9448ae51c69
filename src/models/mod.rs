pub mod exercise;
pub mod from_row;
pub mod logged_set;
pub mod profile;
pub mod workout_session;

pub use exercise::{Exercise, ExerciseCategory, CATEGORIES};
pub use from_row::FromSqliteRow;
pub use logged_set::{LogSetRequest, LoggedSet, LoggedSetWithExercise};
pub use profile::{Profile, ProfileView, RegisterProfile, UpdateProfile};
pub use workout_session::{SaveSessionRequest, WorkoutSession};
