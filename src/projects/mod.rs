//! Graduation Projects Module
//!
//! The graduation project entity: database operations and HTTP handlers.
//! A project belongs to at most one student (unique nullable foreign key)
//! and is orphaned rather than deleted when its student is removed.

/// Row type and queries
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::ProjectRow;
