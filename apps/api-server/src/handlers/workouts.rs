//! Workout handlers. Every route requires an [`Identity`] and only ever sees
//! the caller's own workouts.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use tracker_core::domain::{ExerciseInput, Workout, WorkoutInput};
use tracker_shared::dto::{ExerciseResponse, MessageResponse, WorkoutRequest, WorkoutResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/workouts
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let workouts = state.workouts.list(identity.user_id).await?;
    let body: Vec<WorkoutResponse> = workouts.into_iter().map(workout_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/workouts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<WorkoutRequest>,
) -> AppResult<HttpResponse> {
    let workout = state
        .workouts
        .create(identity.user_id, workout_input(body.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(workout_response(workout)))
}

/// PUT /api/workouts/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<WorkoutRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let workout = state
        .workouts
        .update(identity.user_id, id, workout_input(body.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(workout_response(workout)))
}

/// DELETE /api/workouts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.workouts.delete(identity.user_id, id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Workout deleted")))
}

// An id that cannot name any workout is reported like one that names
// someone else's.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Workout not found".to_string()))
}

fn workout_input(req: WorkoutRequest) -> WorkoutInput {
    WorkoutInput {
        name: req.name,
        exercises: req
            .exercises
            .into_iter()
            .map(|e| ExerciseInput {
                name: e.name,
                sets: e.sets,
                reps: e.reps,
                weight: e.weight,
            })
            .collect(),
    }
}

fn workout_response(workout: Workout) -> WorkoutResponse {
    WorkoutResponse {
        id: workout.id,
        user_id: workout.user_id,
        name: workout.name,
        exercises: workout
            .exercises
            .into_iter()
            .map(|e| ExerciseResponse {
                name: e.name,
                sets: e.sets,
                reps: e.reps,
                weight: e.weight,
            })
            .collect(),
        created_at: workout.created_at,
        updated_at: workout.updated_at,
    }
}
