//! In-memory stores - used when no database is configured, and in tests.
//! Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use tracker_core::domain::{User, Workout};
use tracker_core::error::RepoError;
use tracker_core::ports::{BaseRepository, UserRepository, WorkoutRepository};

/// Credential store backed by a `HashMap`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("users.email".into()));
        }
        if users.contains_key(&user.id) {
            return Err(RepoError::Constraint("users.id".into()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

/// Workout store. Insertion order is kept so that workouts sharing a
/// timestamp still list newest-first.
#[derive(Default)]
pub struct InMemoryWorkoutRepository {
    workouts: RwLock<Vec<Workout>>,
}

impl InMemoryWorkoutRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Workout, Uuid> for InMemoryWorkoutRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workout>, RepoError> {
        let workouts = self.workouts.read().await;
        Ok(workouts.iter().find(|w| w.id == id).cloned())
    }

    async fn insert(&self, workout: Workout) -> Result<Workout, RepoError> {
        let mut workouts = self.workouts.write().await;

        if workouts.iter().any(|w| w.id == workout.id) {
            return Err(RepoError::Constraint("workouts.id".into()));
        }

        workouts.push(workout.clone());
        Ok(workout)
    }
}

#[async_trait]
impl WorkoutRepository for InMemoryWorkoutRepository {
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Workout>, RepoError> {
        let workouts = self.workouts.read().await;

        let mut owned: Vec<Workout> = workouts
            .iter()
            .rev()
            .filter(|w| w.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(owned)
    }

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Workout>, RepoError> {
        let workouts = self.workouts.read().await;
        Ok(workouts
            .iter()
            .find(|w| w.id == id && w.is_owned_by(user_id))
            .cloned())
    }

    async fn update_owned(&self, workout: Workout) -> Result<Option<Workout>, RepoError> {
        let mut workouts = self.workouts.write().await;

        let Some(stored) = workouts
            .iter_mut()
            .find(|w| w.id == workout.id && w.is_owned_by(workout.user_id))
        else {
            return Ok(None);
        };

        stored.name = workout.name;
        stored.exercises = workout.exercises;
        stored.updated_at = workout.updated_at;

        Ok(Some(stored.clone()))
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, RepoError> {
        let mut workouts = self.workouts.write().await;

        let before = workouts.len();
        workouts.retain(|w| !(w.id == id && w.is_owned_by(user_id)));

        Ok(workouts.len() < before)
    }
}
