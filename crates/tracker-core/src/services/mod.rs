//! Application services - the operations exposed to the outside world,
//! written purely against ports.

mod auth;
mod workout;

pub use auth::{AuthService, AuthSession};
pub use workout::WorkoutService;
