//! # Connector Layer
//!
//! External integrations and user-facing surfaces:
//! - Completion services (Groq HTTP API, scripted mock)
//! - Result rendering for terminal and HTML
//! - Web UI (axum) and the CLI controller

pub mod adapter;
pub mod api;
pub mod render;
pub mod web;

pub use adapter::*;
