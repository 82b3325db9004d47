use reqwest::StatusCode;
use thiserror::Error;

/// API-specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    pub fn from_status(status: StatusCode, message: String) -> Self {
        let msg = if message.is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            message
        };

        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(msg),
            StatusCode::FORBIDDEN => ApiError::Unauthorized(msg),
            StatusCode::NOT_FOUND => ApiError::NotFound(msg),
            StatusCode::BAD_REQUEST => ApiError::BadRequest(msg),
            StatusCode::CONFLICT => ApiError::Conflict(msg),
            status if status.is_server_error() => ApiError::ServerError(msg),
            status if status.is_client_error() => ApiError::BadRequest(msg),
            _ => ApiError::Unknown(msg),
        }
    }

    /// The server's message without the variant prefix, for display in forms.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized(m)
            | ApiError::NotFound(m)
            | ApiError::BadRequest(m)
            | ApiError::Conflict(m)
            | ApiError::ServerError(m)
            | ApiError::NetworkError(m)
            | ApiError::InvalidResponse(m)
            | ApiError::Unknown(m) => m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_status() {
        let error = ApiError::from_status(StatusCode::UNAUTHORIZED, "Token expired".to_string());
        assert!(matches!(error, ApiError::Unauthorized(_)));

        let error = ApiError::from_status(StatusCode::CONFLICT, "Email already registered".into());
        assert!(matches!(error, ApiError::Conflict(_)));
        assert_eq!(error.message(), "Email already registered");

        let error = ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, String::new());
        assert!(matches!(error, ApiError::BadRequest(_)));

        let error = ApiError::from_status(StatusCode::BAD_GATEWAY, String::new());
        assert!(matches!(error, ApiError::ServerError(_)));
    }

    #[test]
    fn test_empty_message_uses_canonical_reason() {
        let error = ApiError::from_status(StatusCode::NOT_FOUND, String::new());
        assert_eq!(error.message(), "Not Found");
    }
}
