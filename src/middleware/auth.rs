/**
 * Authentication Middleware
 *
 * Protects routes that require a bearer token. The middleware extracts the
 * token from the Authorization header, verifies it, and re-resolves the
 * credential row from the database on every request - so a token issued
 * for a since-deleted credential stops working immediately. The resolved
 * credential is attached to request extensions as the request identity.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::emails::db::{find_credential_by_email, EmailRow};
use crate::error::ApiError;
use crate::server::state::AppState;

const ADMIN_ROLE: &str = "admin";

/// The credential resolved for the current request.
#[derive(Clone, Debug)]
pub struct CurrentCredential(pub EmailRow);

/// Bearer-auth middleware.
///
/// 1. Extract the token from `Authorization: Bearer <token>`
/// 2. Verify the token (signature, structure, expiry)
/// 3. Re-resolve the credential named by the subject claim
/// 4. Attach the credential to request extensions
///
/// Any failure is a 401 with a `WWW-Authenticate: Bearer` challenge; the
/// response does not distinguish between the failure modes.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credentials_error = || ApiError::unauthorized("could not validate credentials");

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            credentials_error()
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer token");
        credentials_error()
    })?;

    let claims = state.tokens.verify(token).ok_or_else(credentials_error)?;

    // The credential may have been deleted after the token was issued.
    let credential = find_credential_by_email(&state.pool, &claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!("token subject no longer resolves to a credential");
            credentials_error()
        })?;

    request.extensions_mut().insert(CurrentCredential(credential));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentCredential
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentCredential>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentCredential missing from request extensions");
                ApiError::unauthorized("could not validate credentials")
            })
    }
}

/// Fail with 403 unless the resolved credential carries the admin role.
///
/// No creation path assigns roles; operators set the column directly.
pub fn require_admin(current: &CurrentCredential) -> Result<(), ApiError> {
    if current.0.role.as_deref() == Some(ADMIN_ROLE) {
        Ok(())
    } else {
        Err(ApiError::forbidden("admins only"))
    }
}
