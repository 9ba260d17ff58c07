//! Error Module
//!
//! Defines the service error taxonomy and its HTTP response conversion.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Every error maps to a single status code (400/404/409/401/403/500) with a
//! JSON body of the form `{"error": <message>, "status": <code>}`. Handlers
//! return `Result<_, ApiError>` and rely on `?` for propagation.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
