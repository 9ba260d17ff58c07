/**
 * Application State
 *
 * The central state container handed to the router. It holds the two
 * long-lived handles every request may need: the database pool and the
 * token signer. Both are constructed once at startup and passed in
 * explicitly - there is no ambient global engine or session.
 *
 * `FromRef` implementations let handlers extract only the part they use:
 * most handlers take `State<PgPool>`, the login handler takes the full
 * `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::TokenSigner;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; the persistence layer owns its lifecycle.
    pub pool: PgPool,
    /// Token issuer/verifier with the configured secret and TTL.
    pub tokens: TokenSigner,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for TokenSigner {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
