pub mod exercise_repo;
pub mod profile_repo;
pub mod session_repo;
pub mod set_repo;

pub use exercise_repo::ExerciseRepository;
pub use profile_repo::ProfileRepository;
pub use session_repo::SessionRepository;
pub use set_repo::{NewLoggedSet, SetRepository};
