//! Route Configuration Module
//!
//! Assembles the public and bearer-protected route groups into the
//! application router. Handlers live with their entities; this module only
//! wires paths to them.

/// Main router creation
pub mod router;

pub use router::create_router;
