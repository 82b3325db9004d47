//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracker_core::ports::{TokenService, UserRepository, WorkoutRepository};
use tracker_core::services::{AuthService, WorkoutService};
use tracker_infra::{
    Argon2PasswordService, InMemoryUserRepository, InMemoryWorkoutRepository, JwtConfig,
    JwtTokenService,
};

#[cfg(feature = "postgres")]
use anyhow::Context;
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};
#[cfg(feature = "postgres")]
use tracker_infra::{DatabaseConnections, PostgresUserRepository, PostgresWorkoutRepository};

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub workouts: WorkoutService,
    pub tokens: Arc<dyn TokenService>,
    pub storage: StorageBackend,
    pub missing_config: Arc<[&'static str]>,
    /// Whether 500 bodies carry the underlying error as `debug`.
    pub expose_diagnostics: bool,
    pub started_at: Instant,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// A configured but unreachable database is fatal; no database at all
    /// means in-memory stores.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let mut state = Self::connect(config).await?;
        state.expose_diagnostics = !config.is_production();
        Ok(state)
    }

    async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        if let Some(db_config) = &config.database {
            let connections = DatabaseConnections::init(db_config)
                .await
                .context("Failed to connect to database")?;
            Migrator::up(connections.main.as_ref(), None)
                .await
                .context("Failed to apply database migrations")?;
            tracing::info!("Database migrations applied");

            let conn = Arc::new(connections);
            let mut state = Self::assemble(
                Arc::new(PostgresUserRepository::new(conn.main.clone())),
                Arc::new(PostgresWorkoutRepository::new(conn.main.clone())),
                &config.jwt,
                &config.missing,
                StorageBackend::Postgres,
            );
            state.db = Some(conn);
            return Ok(state);
        }

        #[cfg(not(feature = "postgres"))]
        if config.database.is_some() {
            tracing::warn!("Built without postgres support; ignoring DATABASE_URL");
        }

        tracing::warn!("Running without database (in-memory mode)");
        Ok(Self::assemble(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryWorkoutRepository::new()),
            &config.jwt,
            &config.missing,
            StorageBackend::Memory,
        ))
    }

    /// In-memory state with the given token settings and nothing missing.
    #[cfg(test)]
    pub fn in_memory(jwt: JwtConfig) -> Self {
        Self::assemble(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryWorkoutRepository::new()),
            &jwt,
            &[],
            StorageBackend::Memory,
        )
    }

    fn assemble(
        users: Arc<dyn UserRepository>,
        workouts: Arc<dyn WorkoutRepository>,
        jwt: &JwtConfig,
        missing: &[&'static str],
        storage: StorageBackend,
    ) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(jwt.clone()));
        let passwords = Arc::new(Argon2PasswordService::new());

        tracing::info!(?storage, "Application state initialized");

        Self {
            auth: AuthService::new(users, passwords, tokens.clone()),
            workouts: WorkoutService::new(workouts),
            tokens,
            storage,
            missing_config: Arc::from(missing),
            expose_diagnostics: false,
            started_at: Instant::now(),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// `Some(reachable)` when a database is in use.
    pub async fn database_reachable(&self) -> Option<bool> {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            return Some(db.is_reachable().await);
        }
        None
    }
}
