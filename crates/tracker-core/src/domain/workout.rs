use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// A single exercise inside a workout. Has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<f64>,
}

/// Workout entity - owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Workout {
    /// Create a new workout for `user_id` from validated input.
    pub fn new(user_id: Uuid, draft: WorkoutDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: draft.name,
            exercises: draft.exercises,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Replace name and the whole exercise list. Nothing from the previous
    /// exercise list survives.
    pub fn replace(&mut self, draft: WorkoutDraft) {
        self.name = draft.name;
        self.exercises = draft.exercises;
        self.updated_at = Some(Utc::now());
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Unvalidated exercise as received from a client.
#[derive(Debug, Clone, Default)]
pub struct ExerciseInput {
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: Option<f64>,
}

/// Unvalidated workout as received from a client.
#[derive(Debug, Clone, Default)]
pub struct WorkoutInput {
    pub name: String,
    pub exercises: Vec<ExerciseInput>,
}

/// Workout content that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    name: String,
    exercises: Vec<Exercise>,
}

impl WorkoutDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}

impl WorkoutInput {
    /// Check the workout and every exercise, trimming names.
    ///
    /// Exercise positions in error messages are 1-based.
    pub fn validate(self) -> Result<WorkoutDraft, DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("Workout name is required".into()));
        }
        if self.exercises.is_empty() {
            return Err(DomainError::Validation(
                "At least one exercise is required".into(),
            ));
        }

        let exercises = self
            .exercises
            .into_iter()
            .enumerate()
            .map(|(i, ex)| ex.validate(i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WorkoutDraft {
            name: name.to_string(),
            exercises,
        })
    }
}

impl ExerciseInput {
    fn validate(self, position: usize) -> Result<Exercise, DomainError> {
        let invalid = |msg: &str| DomainError::Validation(format!("Exercise {position}: {msg}"));

        let name = self.name.trim();
        if name.is_empty() {
            return Err(invalid("name is required"));
        }
        let sets = count(self.sets, "sets").map_err(|msg| invalid(&msg))?;
        let reps = count(self.reps, "reps").map_err(|msg| invalid(&msg))?;

        if let Some(weight) = self.weight {
            if !weight.is_finite() {
                return Err(invalid("weight must be a number"));
            }
            if weight < 0.0 {
                return Err(invalid("weight cannot be negative"));
            }
        }

        Ok(Exercise {
            name: name.to_string(),
            sets,
            reps,
            weight: self.weight,
        })
    }
}

fn count(value: i64, field: &str) -> Result<u32, String> {
    if value < 1 {
        return Err(format!("{field} must be at least 1"));
    }
    u32::try_from(value).map_err(|_| format!("{field} is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squat() -> ExerciseInput {
        ExerciseInput {
            name: "Squat".into(),
            sets: 3,
            reps: 8,
            weight: Some(60.0),
        }
    }

    fn input(name: &str, exercises: Vec<ExerciseInput>) -> WorkoutInput {
        WorkoutInput {
            name: name.into(),
            exercises,
        }
    }

    fn message(err: DomainError) -> String {
        match err {
            DomainError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_input_keeps_exercise_order() {
        let bench = ExerciseInput {
            name: "Bench".into(),
            sets: 5,
            reps: 5,
            weight: None,
        };
        let draft = input("  Leg Day ", vec![squat(), bench]).validate().unwrap();

        assert_eq!(draft.name(), "Leg Day");
        let names: Vec<_> = draft.exercises().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Squat", "Bench"]);
        assert_eq!(draft.exercises()[1].weight, None);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = input("   ", vec![squat()]).validate().unwrap_err();
        assert_eq!(message(err), "Workout name is required");
    }

    #[test]
    fn test_empty_exercise_list_is_rejected() {
        let err = input("Leg Day", vec![]).validate().unwrap_err();
        assert_eq!(message(err), "At least one exercise is required");
    }

    #[test]
    fn test_exercise_field_bounds() {
        let cases = [
            (ExerciseInput { name: " ".into(), ..squat() }, "Exercise 1: name is required"),
            (ExerciseInput { sets: 0, ..squat() }, "Exercise 1: sets must be at least 1"),
            (ExerciseInput { reps: -2, ..squat() }, "Exercise 1: reps must be at least 1"),
            (
                ExerciseInput { sets: 5_000_000_000, ..squat() },
                "Exercise 1: sets is too large",
            ),
            (
                ExerciseInput { reps: i64::from(u32::MAX) + 1, ..squat() },
                "Exercise 1: reps is too large",
            ),
            (
                ExerciseInput { weight: Some(-0.5), ..squat() },
                "Exercise 1: weight cannot be negative",
            ),
        ];

        for (exercise, expected) in cases {
            let err = input("Leg Day", vec![exercise]).validate().unwrap_err();
            assert_eq!(message(err), expected);
        }
    }

    #[test]
    fn test_error_names_the_failing_position() {
        let err = input("Leg Day", vec![squat(), ExerciseInput { sets: 0, ..squat() }])
            .validate()
            .unwrap_err();
        assert_eq!(message(err), "Exercise 2: sets must be at least 1");
    }

    #[test]
    fn test_zero_weight_is_allowed() {
        let draft = input("Bodyweight", vec![ExerciseInput { weight: Some(0.0), ..squat() }])
            .validate()
            .unwrap();
        assert_eq!(draft.exercises()[0].weight, Some(0.0));
    }

    #[test]
    fn test_replace_discards_previous_exercises() {
        let owner = Uuid::new_v4();
        let three = input("Full", vec![squat(), squat(), squat()]).validate().unwrap();
        let mut workout = Workout::new(owner, three);
        assert!(workout.updated_at.is_none());

        let one = input("Short", vec![squat()]).validate().unwrap();
        workout.replace(one);

        assert_eq!(workout.name, "Short");
        assert_eq!(workout.exercises.len(), 1);
        assert!(workout.updated_at.is_some());
        assert!(workout.is_owned_by(owner));
    }
}
