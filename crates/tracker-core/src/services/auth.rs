//! Registration, login and profile lookup.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{User, UserProfile};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, TokenService, UserRepository};

/// Result of a successful signup or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub expires_in: i64,
    pub user: UserProfile,
}

/// Auth service - owns the credential flow.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Create an account and sign the new user in.
    ///
    /// Email is stored exactly as given (minus surrounding whitespace), so
    /// uniqueness is case-sensitive.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, DomainError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(DomainError::Validation(
                "Please provide all required fields".into(),
            ));
        }

        if self.users.find_by_email(email).await?.is_some() {
            tracing::warn!("Signup rejected: email already registered");
            return Err(DomainError::Duplicate("Email already registered".into()));
        }

        let password_hash = self.passwords.hash(password)?;
        let user = User::new(name.to_string(), email.to_string(), password_hash);

        // A concurrent signup can still win the race; the unique index catches it.
        let user = self.users.insert(user).await.map_err(|e| match e {
            RepoError::Constraint(_) => DomainError::Duplicate("Email already registered".into()),
            other => other.into(),
        })?;

        tracing::info!(user_id = %user.id, "User registered");
        self.issue(&user)
    }

    /// Check credentials. Unknown email and wrong password are reported
    /// identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::Validation(
                "Please provide email and password".into(),
            ));
        }

        let Some(user) = self.users.find_by_email(email).await? else {
            tracing::debug!("Login failed: unknown email");
            return Err(DomainError::Unauthorized);
        };

        if !self.passwords.verify(password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Login failed: password mismatch");
            return Err(DomainError::Unauthorized);
        }

        tracing::info!(user_id = %user.id, "User logged in");
        self.issue(&user)
    }

    /// Resolve the identity carried by a verified token.
    pub async fn profile(&self, user_id: Uuid) -> Result<UserProfile, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(|user| user.profile())
            .ok_or(DomainError::NotFound {
                entity_type: "User",
                id: user_id,
            })
    }

    fn issue(&self, user: &User) -> Result<AuthSession, DomainError> {
        let token = self.tokens.generate_token(user.id)?;
        Ok(AuthSession {
            token,
            expires_in: self.tokens.expiration_seconds(),
            user: user.profile(),
        })
    }
}
