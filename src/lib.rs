//! College Records - Main Library
//!
//! A small academic records service: students, subjects, graduation
//! projects, and login credentials, exposed as CRUD-style HTTP endpoints
//! over Postgres.
//!
//! # Module Structure
//!
//! - **`students`**, **`subjects`**, **`projects`**, **`emails`** - one
//!   module per entity, each with its row type, queries, and HTTP handlers
//! - **`views`** - public projection shapes, all defined together so the
//!   cross-entity references never form a type cycle
//! - **`auth`** - password hashing, bearer-token lifecycle, login endpoint
//! - **`middleware`** - bearer-auth middleware and the identity extractor
//! - **`error`** - the service error taxonomy and its HTTP mapping
//! - **`routes`** - route table assembly
//! - **`server`** - configuration, state, and app initialization
//! - **`query`** - shared skip/limit pagination parameters
//!
//! # Authentication
//!
//! `POST /token` exchanges a credential (email + password) for a signed,
//! time-limited bearer token. Protected routes re-verify the token and
//! re-resolve the credential row on every request; no session state is
//! held between requests.

/// Password hashing, tokens, and the login endpoint
pub mod auth;

/// Credential records
pub mod emails;

/// Error taxonomy and HTTP conversion
pub mod error;

/// Request-processing middleware
pub mod middleware;

/// Graduation projects
pub mod projects;

/// Shared list-query parameters
pub mod query;

/// Route configuration
pub mod routes;

/// Server state, configuration, and initialization
pub mod server;

/// Students and the student/subject association
pub mod students;

/// Subjects
pub mod subjects;

/// Public view projections
pub mod views;

pub use error::ApiError;
pub use server::{create_app, AppState, Settings};
