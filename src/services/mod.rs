pub mod exercise_ranker;
pub mod session_summarizer;
pub mod workout_logger;

pub use exercise_ranker::ExerciseRanker;
pub use session_summarizer::SessionSummarizer;
pub use workout_logger::WorkoutLogger;
