//! # Tracker Core
//!
//! The domain layer of the workout tracker.
//! Entities, validation rules, ports and the services built on top of them.
//! Nothing in here knows about HTTP or a concrete database.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
