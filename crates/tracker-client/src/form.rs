//! Editable workout form state.
//!
//! Inputs are kept as the strings a user typed; parsing happens once in
//! [`WorkoutForm::to_request`]. Range checks (sets >= 1 and so on) stay with
//! the server so there is a single source of validation messages.

use thiserror::Error;
use tracker_shared::dto::{ExerciseRequest, WorkoutRequest, WorkoutResponse};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Exercise {row}: {field} must be a whole number")]
    NotAWholeNumber { row: usize, field: &'static str },

    #[error("Exercise {row}: weight must be a number")]
    InvalidWeight { row: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseRow {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutForm {
    pub name: String,
    exercises: Vec<ExerciseRow>,
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            exercises: vec![ExerciseRow::default()],
        }
    }
}

impl WorkoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill for editing an existing workout.
    pub fn from_workout(workout: &WorkoutResponse) -> Self {
        let mut exercises: Vec<ExerciseRow> = workout
            .exercises
            .iter()
            .map(|e| ExerciseRow {
                name: e.name.clone(),
                sets: e.sets.to_string(),
                reps: e.reps.to_string(),
                weight: e.weight.map(|w| w.to_string()).unwrap_or_default(),
            })
            .collect();
        if exercises.is_empty() {
            exercises.push(ExerciseRow::default());
        }

        Self {
            name: workout.name.clone(),
            exercises,
        }
    }

    pub fn exercises(&self) -> &[ExerciseRow] {
        &self.exercises
    }

    pub fn exercise_mut(&mut self, index: usize) -> Option<&mut ExerciseRow> {
        self.exercises.get_mut(index)
    }

    pub fn add_exercise(&mut self) {
        self.exercises.push(ExerciseRow::default());
    }

    /// Returns false when the row does not exist or is the last one left.
    pub fn remove_exercise(&mut self, index: usize) -> bool {
        if self.exercises.len() <= 1 || index >= self.exercises.len() {
            return false;
        }
        self.exercises.remove(index);
        true
    }

    pub fn to_request(&self) -> Result<WorkoutRequest, FormError> {
        let exercises = self
            .exercises
            .iter()
            .enumerate()
            .map(|(i, row)| row.to_request(i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WorkoutRequest {
            name: self.name.clone(),
            exercises,
        })
    }
}

impl ExerciseRow {
    fn to_request(&self, row: usize) -> Result<ExerciseRequest, FormError> {
        let whole = |value: &str, field| {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| FormError::NotAWholeNumber { row, field })
        };

        let weight = match self.weight.trim() {
            "" => None,
            w => Some(
                w.parse::<f64>()
                    .ok()
                    .filter(|w| w.is_finite())
                    .ok_or(FormError::InvalidWeight { row })?,
            ),
        };

        Ok(ExerciseRequest {
            name: self.name.clone(),
            sets: whole(&self.sets, "sets")?,
            reps: whole(&self.reps, "reps")?,
            weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tracker_shared::dto::ExerciseResponse;
    use uuid::Uuid;

    fn row(name: &str, sets: &str, reps: &str, weight: &str) -> ExerciseRow {
        ExerciseRow {
            name: name.into(),
            sets: sets.into(),
            reps: reps.into(),
            weight: weight.into(),
        }
    }

    #[test]
    fn test_never_fewer_than_one_row() {
        let mut form = WorkoutForm::new();
        assert_eq!(form.exercises().len(), 1);
        assert!(!form.remove_exercise(0));

        form.add_exercise();
        assert!(form.remove_exercise(1));
        assert!(!form.remove_exercise(0));
        assert!(!form.remove_exercise(5));
    }

    #[test]
    fn test_to_request_parses_rows() {
        let mut form = WorkoutForm::new();
        form.name = "Leg Day".into();
        *form.exercise_mut(0).unwrap() = row("Squat", "3", " 8 ", "60.5");
        form.add_exercise();
        *form.exercise_mut(1).unwrap() = row("Lunge", "2", "10", "  ");

        let request = form.to_request().unwrap();
        assert_eq!(request.name, "Leg Day");
        assert_eq!(request.exercises[0].reps, 8);
        assert_eq!(request.exercises[0].weight, Some(60.5));
        assert_eq!(request.exercises[1].weight, None);
    }

    #[test]
    fn test_to_request_reports_the_failing_row() {
        let mut form = WorkoutForm::new();
        *form.exercise_mut(0).unwrap() = row("Squat", "3", "8", "");
        form.add_exercise();
        *form.exercise_mut(1).unwrap() = row("Lunge", "three", "8", "");

        let err = form.to_request().unwrap_err();
        assert_eq!(err, FormError::NotAWholeNumber { row: 2, field: "sets" });
        assert_eq!(err.to_string(), "Exercise 2: sets must be a whole number");

        *form.exercise_mut(1).unwrap() = row("Lunge", "3", "8", "heavy");
        assert_eq!(form.to_request(), Err(FormError::InvalidWeight { row: 2 }));
    }

    #[test]
    fn test_from_workout_prefills_rows() {
        let workout = WorkoutResponse {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Push".into(),
            exercises: vec![
                ExerciseResponse {
                    name: "Bench".into(),
                    sets: 5,
                    reps: 5,
                    weight: Some(80.0),
                },
                ExerciseResponse {
                    name: "Dips".into(),
                    sets: 3,
                    reps: 12,
                    weight: None,
                },
            ],
            created_at: Utc::now(),
            updated_at: None,
        };

        let form = WorkoutForm::from_workout(&workout);
        assert_eq!(form.name, "Push");
        assert_eq!(form.exercises()[0], row("Bench", "5", "5", "80"));
        assert_eq!(form.exercises()[1].weight, "");
        assert_eq!(form.to_request().unwrap().exercises.len(), 2);
    }
}
