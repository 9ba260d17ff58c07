/**
 * Login Handler
 *
 * Implements the OAuth2 password flow at POST /token: form-encoded
 * username (the credential email) and password in, bearer token out.
 *
 * # Authentication Process
 *
 * 1. Look up the credential by exact email match (first match by id)
 * 2. Verify the password with bcrypt
 * 3. Issue a JWT whose subject claim is the email string
 *
 * # Security
 *
 * - A missing credential and a wrong password both return 401 with the
 *   same message, so the endpoint does not leak which emails exist
 * - The 401 response carries `WWW-Authenticate: Bearer`
 */

use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};

use crate::auth::passwords::verify_password;
use crate::emails::db::find_credential_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// OAuth2 password-flow form body.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    /// Credential email (the OAuth2 form calls this field "username")
    pub username: String,
    pub password: String,
}

/// Bearer token response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /token
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
pub async fn login_for_access_token(
    State(state): State<AppState>,
    Form(form): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let credential = find_credential_by_email(&state.pool, &form.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login failed: unknown email");
            ApiError::unauthorized("incorrect email or password")
        })?;

    if !verify_password(&form.password, &credential.hashed_password) {
        tracing::warn!("login failed: wrong password for credential {}", credential.id);
        return Err(ApiError::unauthorized("incorrect email or password"));
    }

    let access_token = state.tokens.issue(&credential.email).map_err(|e| {
        tracing::error!("failed to issue token: {:?}", e);
        ApiError::internal("could not issue token")
    })?;

    tracing::info!("credential {} logged in", credential.id);

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
