/**
 * Subject Handlers
 *
 * HTTP handlers for the /subjects endpoints. The list endpoint requires a
 * bearer token; the rest are public, matching the source system.
 */

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::query::Pagination;
use crate::subjects::db::{
    delete_subject, get_subject, insert_subject, list_subjects, students_for_subject,
    update_subject,
};
use crate::views::{SubjectPublic, SubjectPublicWithStudents};

#[derive(Debug, Deserialize)]
pub struct SubjectCreate {
    pub name: String,
    pub hours: i32,
}

/// Partial update: only supplied fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct SubjectUpdate {
    pub name: Option<String>,
    pub hours: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SubjectDeleted {
    pub message: String,
    pub subject: SubjectPublic,
}

fn validate_hours(hours: i32) -> Result<(), ApiError> {
    if hours <= 0 {
        return Err(ApiError::validation("hours must be a positive integer"));
    }
    Ok(())
}

/// GET /subjects (authenticated)
pub async fn get_subjects(
    State(pool): State<PgPool>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<SubjectPublic>>, ApiError> {
    let (skip, limit) = page.resolve()?;
    let subjects = list_subjects(&pool, skip, limit).await?;
    Ok(Json(subjects.iter().map(SubjectPublic::from_row).collect()))
}

/// GET /subjects/{id}
pub async fn get_subject_by_id(
    State(pool): State<PgPool>,
    Path(subject_id): Path<i64>,
) -> Result<Json<SubjectPublicWithStudents>, ApiError> {
    let subject = get_subject(&pool, subject_id)
        .await?
        .ok_or_else(|| ApiError::not_found("subject not found"))?;

    let students = students_for_subject(&pool, subject_id).await?;
    Ok(Json(SubjectPublicWithStudents::compose(&subject, &students)))
}

/// POST /subjects/add
pub async fn add_subject(
    State(pool): State<PgPool>,
    Json(payload): Json<SubjectCreate>,
) -> Result<Json<SubjectPublicWithStudents>, ApiError> {
    validate_hours(payload.hours)?;

    let subject = insert_subject(&pool, &payload.name, payload.hours).await?;
    tracing::info!("created subject {}", subject.id);
    Ok(Json(SubjectPublicWithStudents::compose(&subject, &[])))
}

/// PATCH /subjects/{id}
pub async fn patch_subject(
    State(pool): State<PgPool>,
    Path(subject_id): Path<i64>,
    Json(payload): Json<SubjectUpdate>,
) -> Result<Json<SubjectPublic>, ApiError> {
    if let Some(hours) = payload.hours {
        validate_hours(hours)?;
    }

    if get_subject(&pool, subject_id).await?.is_none() {
        return Err(ApiError::not_found("subject not found"));
    }

    let subject = update_subject(&pool, subject_id, payload.name.as_deref(), payload.hours).await?;
    Ok(Json(SubjectPublic::from_row(&subject)))
}

/// DELETE /subjects/{id}
pub async fn remove_subject(
    State(pool): State<PgPool>,
    Path(subject_id): Path<i64>,
) -> Result<Json<SubjectDeleted>, ApiError> {
    let subject = get_subject(&pool, subject_id)
        .await?
        .ok_or_else(|| ApiError::not_found("subject not found"))?;

    delete_subject(&pool, subject_id).await?;

    tracing::info!("deleted subject {}", subject_id);
    Ok(Json(SubjectDeleted {
        message: "subject deleted successfully".to_string(),
        subject: SubjectPublic::from_row(&subject),
    }))
}
