pub mod exercises;
pub mod health;
pub mod profiles;
pub mod workouts;
