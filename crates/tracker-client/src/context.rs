//! Signed-in state for a front end.
//!
//! An [`AuthContext`] is built once at startup with [`AuthContext::initialize`]
//! and then threaded through every view that needs to know who is signed in.
//! Protected views call [`AuthContext::require_session`] before doing anything.

use thiserror::Error;
use tracker_shared::dto::{AuthResponse, LoginRequest, SignupRequest, UserResponse};

use crate::api::{ApiClient, ApiError};
use crate::session::{Session, SessionError, SessionStore};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Not logged in")]
    NotLoggedIn,
}

pub struct AuthContext<S: SessionStore> {
    client: ApiClient,
    store: S,
    session: Option<Session>,
}

impl<S: SessionStore> AuthContext<S> {
    /// Restore a persisted session, confirming it with the server first.
    ///
    /// Any failure (unreadable store, rejected token, unreachable server)
    /// clears the persisted session and leaves the context signed out.
    pub async fn initialize(mut client: ApiClient, store: S) -> Self {
        client.set_token(None);
        let mut context = Self {
            client,
            store,
            session: None,
        };

        let stored = match context.store.load() {
            Ok(Some(session)) => session,
            Ok(None) => {
                tracing::debug!("No stored session");
                return context;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session");
                context.discard_stored();
                return context;
            }
        };

        context.client.set_token(Some(stored.token.clone()));
        match context.client.current_user().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Stored session validated");
                let session = Session {
                    token: stored.token,
                    user,
                };
                if let Err(e) = context.store.save(&session) {
                    tracing::warn!(error = %e, "Failed to refresh stored session");
                }
                context.session = Some(session);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored session rejected");
                context.client.set_token(None);
                context.discard_stored();
            }
        }

        context
    }

    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&UserResponse, ClientError> {
        let request = SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth = self.client.signup(&request).await?;
        self.establish(auth)
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&UserResponse, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth = self.client.login(&request).await?;
        self.establish(auth)
    }

    pub fn logout(&mut self) -> Result<(), ClientError> {
        if let Some(session) = self.session.take() {
            tracing::info!(user_id = %session.user.id, "Logging out");
        }
        self.client.set_token(None);
        self.store.clear()?;
        Ok(())
    }

    pub fn user(&self) -> Option<&UserResponse> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Gate for protected views.
    pub fn require_session(&self) -> Result<&Session, ClientError> {
        self.session.as_ref().ok_or(ClientError::NotLoggedIn)
    }

    /// Client carrying the current token, if any.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn establish(&mut self, auth: AuthResponse) -> Result<&UserResponse, ClientError> {
        let session = Session {
            token: auth.token,
            user: auth.user,
        };
        self.store.save(&session)?;
        self.client.set_token(Some(session.token.clone()));
        tracing::info!(user_id = %session.user.id, "Signed in");

        Ok(&self.session.insert(session).user)
    }

    fn discard_stored(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
    }
}
