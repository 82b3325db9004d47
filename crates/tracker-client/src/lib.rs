//! # Tracker Client
//!
//! Everything a front end needs to talk to the workout tracker API:
//!
//! - [`ApiClient`]: typed HTTP calls with bearer authentication
//! - [`AuthContext`]: the signed-in session, persisted through a [`SessionStore`]
//! - [`WorkoutForm`]: string-typed form state turned into requests
//! - [`WorkoutList`] / [`filter_workouts`]: local list bookkeeping and search

pub mod api;
pub mod config;
pub mod context;
pub mod form;
pub mod list;
pub mod session;

pub use api::{ApiClient, ApiError};
pub use config::ClientConfig;
pub use context::{AuthContext, ClientError};
pub use form::{ExerciseRow, FormError, WorkoutForm};
pub use list::{WorkoutList, filter_workouts};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionError, SessionStore};
