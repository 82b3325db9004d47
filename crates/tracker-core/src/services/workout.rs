//! Ownership-scoped workout CRUD.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Workout, WorkoutInput};
use crate::error::DomainError;
use crate::ports::WorkoutRepository;

/// Workout service. Every operation acts on behalf of one user and never
/// reads or writes another user's records.
#[derive(Clone)]
pub struct WorkoutService {
    workouts: Arc<dyn WorkoutRepository>,
}

impl WorkoutService {
    pub fn new(workouts: Arc<dyn WorkoutRepository>) -> Self {
        Self { workouts }
    }

    /// The caller's workouts, newest first.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Workout>, DomainError> {
        let workouts = self.workouts.list_by_owner(user_id).await?;
        tracing::debug!(%user_id, count = workouts.len(), "Listed workouts");
        Ok(workouts)
    }

    pub async fn create(&self, user_id: Uuid, input: WorkoutInput) -> Result<Workout, DomainError> {
        let draft = input.validate()?;
        let workout = self.workouts.insert(Workout::new(user_id, draft)).await?;

        tracing::info!(%user_id, workout_id = %workout.id, "Workout created");
        Ok(workout)
    }

    /// Replace name and exercises wholesale.
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        input: WorkoutInput,
    ) -> Result<Workout, DomainError> {
        let draft = input.validate()?;

        let mut workout = self
            .workouts
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| not_found(id))?;
        workout.replace(draft);

        let workout = self
            .workouts
            .update_owned(workout)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(%user_id, workout_id = %id, "Workout updated");
        Ok(workout)
    }

    /// Permanently remove a workout.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        if !self.workouts.delete_owned(id, user_id).await? {
            return Err(not_found(id));
        }

        tracing::info!(%user_id, workout_id = %id, "Workout deleted");
        Ok(())
    }
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: "Workout",
        id,
    }
}
