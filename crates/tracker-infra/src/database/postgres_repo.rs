//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use tracker_core::domain::{User, Workout};
use tracker_core::error::RepoError;
use tracker_core::ports::{UserRepository, WorkoutRepository};

use super::entity::user::{self, Entity as UserEntity};
use super::entity::workout::{self, Entity as WorkoutEntity, ExerciseList};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL workout repository.
pub type PostgresWorkoutRepository = PostgresBaseRepository<WorkoutEntity>;

/// Keep the first character of the local part only; emails are PII.
pub(crate) fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let head = local.chars().next().map(String::from).unwrap_or_default();
            format!("{head}***@{domain}")
        }
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl WorkoutRepository for PostgresWorkoutRepository {
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Workout>, RepoError> {
        let result = WorkoutEntity::find()
            .filter(workout::Column::UserId.eq(user_id))
            .order_by_desc(workout::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_owned(&self, id: Uuid, user_id: Uuid) -> Result<Option<Workout>, RepoError> {
        let result = WorkoutEntity::find_by_id(id)
            .filter(workout::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update_owned(&self, workout: Workout) -> Result<Option<Workout>, RepoError> {
        let result = WorkoutEntity::update_many()
            .col_expr(workout::Column::Name, Expr::value(workout.name.clone()))
            .col_expr(
                workout::Column::Exercises,
                Expr::value(ExerciseList(workout.exercises.clone())),
            )
            .col_expr(
                workout::Column::UpdatedAt,
                Expr::value(workout.updated_at.map(sea_orm::prelude::DateTimeWithTimeZone::from)),
            )
            .filter(workout::Column::Id.eq(workout.id))
            .filter(workout::Column::UserId.eq(workout.user_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok((result.rows_affected > 0).then_some(workout))
    }

    async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, RepoError> {
        let result = WorkoutEntity::delete_many()
            .filter(workout::Column::Id.eq(id))
            .filter(workout::Column::UserId.eq(user_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}
