//! # Tracker Infrastructure
//!
//! Concrete implementations of the ports defined in `tracker-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL stores via SeaORM

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, InMemoryUserRepository, InMemoryWorkoutRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresUserRepository, PostgresWorkoutRepository};
