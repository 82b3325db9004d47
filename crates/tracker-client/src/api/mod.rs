use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracker_shared::ErrorResponse;
use tracker_shared::dto::{
    AuthResponse, LoginRequest, MessageResponse, SignupRequest, UserResponse, WorkoutRequest,
    WorkoutResponse,
};
use uuid::Uuid;

use crate::config::ClientConfig;

mod error;

pub use error::ApiError;

/// API client for the workout tracker backend.
///
/// Holds at most one bearer token; every request made while a token is set
/// carries it in the `Authorization` header.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        tracing::debug!("Signing up");
        self.send(self.request(Method::POST, "/api/auth/signup").json(request))
            .await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        tracing::debug!("Logging in");
        self.send(self.request(Method::POST, "/api/auth/login").json(request))
            .await
    }

    /// Profile of the user the current token belongs to.
    pub async fn current_user(&self) -> Result<UserResponse, ApiError> {
        self.send(self.request(Method::GET, "/api/auth/user")).await
    }

    pub async fn list_workouts(&self) -> Result<Vec<WorkoutResponse>, ApiError> {
        self.send(self.request(Method::GET, "/api/workouts")).await
    }

    pub async fn create_workout(
        &self,
        request: &WorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        self.send(self.request(Method::POST, "/api/workouts").json(request))
            .await
    }

    pub async fn update_workout(
        &self,
        id: Uuid,
        request: &WorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        let path = format!("/api/workouts/{id}");
        self.send(self.request(Method::PUT, &path).json(request))
            .await
    }

    pub async fn delete_workout(&self, id: Uuid) -> Result<MessageResponse, ApiError> {
        let path = format!("/api/workouts/{id}");
        self.send(self.request(Method::DELETE, &path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()))
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        // Problem-details body when the server sent one, raw text otherwise.
        let message = match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(body) => body.message().to_string(),
            Err(_) => text,
        };

        tracing::debug!(status = status.as_u16(), %message, "API request failed");
        ApiError::from_status(status, message)
    }
}
