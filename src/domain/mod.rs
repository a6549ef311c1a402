//! # Domain Layer
//!
//! Submissions, analysis results, validation and prompt construction.
//! This layer performs no I/O.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
