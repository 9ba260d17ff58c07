//! Authentication Module
//!
//! Credential hashing, bearer-token lifecycle, and the login endpoint.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports
//! ├── passwords.rs - bcrypt hashing and verification
//! ├── tokens.rs    - JWT issuance and validation (TokenSigner)
//! └── handlers.rs  - POST /token login handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email + password → credential verified → bearer token
//! 2. **Authenticated request**: bearer token → claims verified → credential
//!    re-resolved from the database (see `middleware::auth`)
//!
//! No session state is held between requests; every request re-verifies the
//! token and re-resolves the credential row.

/// bcrypt password hashing and verification
pub mod passwords;

/// JWT token generation and validation
pub mod tokens;

/// Login handler
pub mod handlers;

pub use handlers::{login_for_access_token, TokenRequest, TokenResponse};
pub use passwords::{hash_password, verify_password};
pub use tokens::{Claims, TokenSigner};
