/**
 * Server Initialization
 *
 * Assembles the application: settings → pool → state → router.
 */

use axum::Router;

use crate::auth::tokens::TokenSigner;
use crate::routes::router::create_router;
use crate::server::config::{load_database, Settings};
use crate::server::state::AppState;

/// Create the Axum application from resolved settings.
///
/// Fails when the database is unreachable; everything downstream of the
/// pool is infallible wiring.
pub async fn create_app(settings: &Settings) -> Result<Router, sqlx::Error> {
    tracing::info!("initializing college records server");

    let pool = load_database(settings).await?;
    let tokens = TokenSigner::new(settings.jwt_secret.clone(), settings.token_ttl);

    let state = AppState { pool, tokens };
    Ok(create_router(state))
}
