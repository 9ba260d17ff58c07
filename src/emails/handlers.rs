/**
 * Credential Handlers
 *
 * HTTP handlers for the /emails endpoints. Every route here sits behind
 * the bearer-auth middleware; deletion additionally requires the admin
 * role.
 *
 * Credential projections include the stored password hash. That mirrors
 * the source system and is deliberately retained (see DESIGN.md).
 */

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::passwords::hash_password;
use crate::emails::db::{
    delete_credential, get_credential, list_credentials, update_credential,
};
use crate::error::ApiError;
use crate::middleware::auth::{require_admin, CurrentCredential};
use crate::query::Pagination;
use crate::students::db::get_student;
use crate::views::{EmailPublic, EmailPublicWithStudent};

/// Partial update: a supplied password is re-hashed before storage.
#[derive(Debug, Default, Deserialize)]
pub struct EmailUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmailDeleted {
    pub message: String,
    pub email: EmailPublic,
}

/// GET /emails
pub async fn get_emails(
    State(pool): State<PgPool>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<EmailPublic>>, ApiError> {
    let (skip, limit) = page.resolve()?;
    let emails = list_credentials(&pool, skip, limit).await?;
    Ok(Json(emails.iter().map(EmailPublic::from_row).collect()))
}

/// GET /emails/{id}
pub async fn get_email_by_id(
    State(pool): State<PgPool>,
    Path(email_id): Path<i64>,
) -> Result<Json<EmailPublicWithStudent>, ApiError> {
    let email = get_credential(&pool, email_id)
        .await?
        .ok_or_else(|| ApiError::not_found("email not found"))?;

    let student = match email.student_id {
        Some(student_id) => get_student(&pool, student_id).await?,
        None => None,
    };

    Ok(Json(EmailPublicWithStudent::compose(&email, student.as_ref())))
}

/// PATCH /emails/{id}
pub async fn patch_email(
    State(pool): State<PgPool>,
    Path(email_id): Path<i64>,
    Json(payload): Json<EmailUpdate>,
) -> Result<Json<EmailPublic>, ApiError> {
    if get_credential(&pool, email_id).await?.is_none() {
        return Err(ApiError::not_found("email not found"));
    }

    let hashed = payload
        .password
        .as_deref()
        .map(hash_password)
        .transpose()?;

    let email = update_credential(&pool, email_id, payload.email.as_deref(), hashed.as_deref())
        .await?;

    Ok(Json(EmailPublic::from_row(&email)))
}

/// DELETE /emails/{id} (admin only)
pub async fn remove_email(
    State(pool): State<PgPool>,
    current: CurrentCredential,
    Path(email_id): Path<i64>,
) -> Result<Json<EmailDeleted>, ApiError> {
    require_admin(&current)?;

    let email = get_credential(&pool, email_id)
        .await?
        .ok_or_else(|| ApiError::not_found("email not found"))?;

    delete_credential(&pool, email_id).await?;

    tracing::info!("credential {} deleted by {}", email_id, current.0.id);
    Ok(Json(EmailDeleted {
        message: "email deleted successfully".to_string(),
        email: EmailPublic::from_row(&email),
    }))
}
