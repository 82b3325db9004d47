use tracker_shared::dto::WorkoutResponse;
use uuid::Uuid;

/// Workouts whose name, or any exercise name, contains `query`
/// case-insensitively. A blank query matches everything.
pub fn filter_workouts<'a>(workouts: &'a [WorkoutResponse], query: &str) -> Vec<&'a WorkoutResponse> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return workouts.iter().collect();
    }

    workouts
        .iter()
        .filter(|w| {
            w.name.to_lowercase().contains(&needle)
                || w.exercises
                    .iter()
                    .any(|e| e.name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Local copy of the signed-in user's workouts, newest first, kept in step
/// with create/update/delete results so the list need not be refetched.
#[derive(Debug, Clone, Default)]
pub struct WorkoutList {
    workouts: Vec<WorkoutResponse>,
}

impl WorkoutList {
    /// Takes the server's listing as-is; it is already newest first.
    pub fn new(workouts: Vec<WorkoutResponse>) -> Self {
        Self { workouts }
    }

    pub fn as_slice(&self) -> &[WorkoutResponse] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn created(&mut self, workout: WorkoutResponse) {
        self.workouts.insert(0, workout);
    }

    /// Replaces in place; false when the workout is not in the list.
    pub fn updated(&mut self, workout: WorkoutResponse) -> bool {
        match self.workouts.iter_mut().find(|w| w.id == workout.id) {
            Some(slot) => {
                *slot = workout;
                true
            }
            None => false,
        }
    }

    pub fn deleted(&mut self, id: Uuid) -> bool {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.id != id);
        self.workouts.len() != before
    }

    pub fn filter(&self, query: &str) -> Vec<&WorkoutResponse> {
        filter_workouts(&self.workouts, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tracker_shared::dto::ExerciseResponse;

    fn workout(name: &str, exercises: &[&str]) -> WorkoutResponse {
        WorkoutResponse {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            name: name.to_string(),
            exercises: exercises
                .iter()
                .map(|e| ExerciseResponse {
                    name: e.to_string(),
                    sets: 3,
                    reps: 10,
                    weight: None,
                })
                .collect(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_filter_matches_workout_or_exercise_name() {
        let workouts = vec![
            workout("Leg Day", &["Squat", "Lunge"]),
            workout("Push", &["Bench Press"]),
            workout("Pull", &["Row"]),
        ];

        let hits = filter_workouts(&workouts, "leg");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Leg Day");

        let hits = filter_workouts(&workouts, "PRESS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Push");

        assert_eq!(filter_workouts(&workouts, "   ").len(), 3);
        assert!(filter_workouts(&workouts, "deadlift").is_empty());
    }

    #[test]
    fn test_list_applies_local_changes() {
        let first = workout("Leg Day", &["Squat"]);
        let mut list = WorkoutList::new(vec![first.clone()]);

        let second = workout("Push", &["Bench"]);
        list.created(second.clone());
        assert_eq!(list.as_slice()[0].id, second.id);

        let mut renamed = first.clone();
        renamed.name = "Legs".to_string();
        assert!(list.updated(renamed));
        assert_eq!(list.as_slice()[1].name, "Legs");
        assert!(!list.updated(workout("Ghost", &[])));

        assert!(list.deleted(second.id));
        assert!(!list.deleted(second.id));
        assert_eq!(list.len(), 1);
        assert_eq!(list.filter("legs").len(), 1);
    }
}
