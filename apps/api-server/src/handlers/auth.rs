//! Authentication handlers.

use actix_web::{HttpResponse, web};

use tracker_core::domain::UserProfile;
use tracker_core::services::AuthSession;
use tracker_shared::dto::{AuthResponse, LoginRequest, SignupRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let session = state
        .auth
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok(HttpResponse::Created().json(auth_response(session)))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let session = state.auth.login(&req.email, &req.password).await?;

    Ok(HttpResponse::Ok().json(auth_response(session)))
}

/// GET /api/auth/user - Protected route
pub async fn current_user(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let profile = state.auth.profile(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(user_response(profile)))
}

fn auth_response(session: AuthSession) -> AuthResponse {
    AuthResponse {
        token: session.token,
        token_type: "Bearer".to_string(),
        expires_in: u64::try_from(session.expires_in).unwrap_or(0),
        user: user_response(session.user),
    }
}

fn user_response(profile: UserProfile) -> UserResponse {
    UserResponse {
        id: profile.id,
        name: profile.name,
        email: profile.email,
    }
}
