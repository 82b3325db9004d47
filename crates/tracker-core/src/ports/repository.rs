use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{User, Workout};
use crate::error::RepoError;

/// Generic repository trait shared by every entity store.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID, regardless of owner.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// Credential store.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Workout store. Every method except the base lookups is scoped to an owner:
/// a workout that exists under another user behaves exactly like a missing one.
#[async_trait]
pub trait WorkoutRepository: BaseRepository<Workout, Uuid> {
    /// All workouts owned by `user_id`, newest first.
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Workout>, RepoError>;

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Workout>, RepoError>;

    /// Overwrite name, exercises and `updated_at` of `workout` if it is still
    /// owned by `workout.user_id`. `None` when no such row remains.
    async fn update_owned(&self, workout: Workout) -> Result<Option<Workout>, RepoError>;

    /// Returns `false` when nothing owned by `user_id` had that id.
    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, RepoError>;
}
