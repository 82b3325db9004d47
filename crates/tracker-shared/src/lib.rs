//! # Tracker Shared
//!
//! Wire types shared between the API server and the client library.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
