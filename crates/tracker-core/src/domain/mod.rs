//! Domain entities - the core business objects.

mod user;
mod workout;

pub use user::{User, UserProfile};
pub use workout::{Exercise, ExerciseInput, Workout, WorkoutDraft, WorkoutInput};
