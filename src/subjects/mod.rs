//! Subjects Module
//!
//! The subject entity: database operations and HTTP handlers. Subjects are
//! linked many-to-many with students through the association table; the
//! attach operation itself lives with the student handlers.

/// Row type and queries
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::SubjectRow;
