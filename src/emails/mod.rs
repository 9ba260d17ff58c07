//! Credentials Module
//!
//! The credential (email + hashed password) entity: database operations
//! and HTTP handlers. Credentials double as the login identity for the
//! authentication flow and cascade away with their owning student.

/// Row type and queries
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::EmailRow;
