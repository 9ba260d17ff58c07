//! Students Module
//!
//! The student entity: department enumeration, database operations, and
//! HTTP handlers. A student owns zero-or-one graduation project, zero-or-
//! more credentials, and is linked many-to-many with subjects.
//!
//! # Module Structure
//!
//! ```text
//! students/
//! ├── mod.rs        - Module exports
//! ├── department.rs - Department enum and validation
//! ├── db.rs         - Row type and queries
//! └── handlers.rs   - HTTP handlers
//! ```

/// Department enum and validation
pub mod department;

/// Row type and queries
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::StudentRow;
pub use department::Department;
