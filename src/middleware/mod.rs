//! Middleware Module
//!
//! HTTP middleware for the server. Currently just bearer-token
//! authentication with the resolved-credential extractor.

pub mod auth;

pub use auth::{auth_middleware, require_admin, CurrentCredential};
