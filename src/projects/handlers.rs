/**
 * Graduation Project Handlers
 *
 * HTTP handlers for the /GP endpoints. Projects are created either
 * embedded in a student payload (see the student handlers) or
 * independently here, then linked via PATCH.
 */

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::projects::db::{
    delete_project, get_project, get_project_for_student, insert_project, list_projects,
    set_student, update_project,
};
use crate::query::Pagination;
use crate::students::db::get_student;
use crate::views::{ProjectPublic, ProjectPublicWithStudent};

/// Project creation payload. Also embedded in `StudentCreate` for the
/// atomic student-with-project operation. Projects created here start
/// unattached; linking goes through PATCH.
#[derive(Debug, Deserialize)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
}

/// Partial update. `student_id` distinguishes three cases: absent (leave
/// the link alone), null (detach), and an id (link).
#[derive(Debug, Default, Deserialize)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub student_id: Option<Option<i64>>,
}

#[derive(Debug, Serialize)]
pub struct ProjectDeleted {
    pub message: String,
    pub project: ProjectPublic,
}

/// A student may own at most one project; check before linking so the
/// common case surfaces as 409 rather than a constraint violation.
/// Re-linking a project to the student that already owns it is a no-op,
/// not a conflict.
async fn ensure_student_linkable(
    pool: &PgPool,
    student_id: i64,
    project_id: i64,
) -> Result<(), ApiError> {
    if get_student(pool, student_id).await?.is_none() {
        return Err(ApiError::not_found("student not found"));
    }
    match get_project_for_student(pool, student_id).await? {
        Some(existing) if existing.id != project_id => Err(ApiError::conflict(
            "student already has a graduation project",
        )),
        _ => Ok(()),
    }
}

/// GET /GP
pub async fn get_projects(
    State(pool): State<PgPool>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<ProjectPublic>>, ApiError> {
    let (skip, limit) = page.resolve()?;
    let projects = list_projects(&pool, skip, limit).await?;
    Ok(Json(projects.iter().map(ProjectPublic::from_row).collect()))
}

/// GET /GP/{id}
pub async fn get_project_by_id(
    State(pool): State<PgPool>,
    Path(project_id): Path<i64>,
) -> Result<Json<ProjectPublicWithStudent>, ApiError> {
    let project = get_project(&pool, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found("graduation project not found"))?;

    let student = match project.student_id {
        Some(student_id) => get_student(&pool, student_id).await?,
        None => None,
    };

    Ok(Json(ProjectPublicWithStudent::compose(
        &project,
        student.as_ref(),
    )))
}

/// POST /GP/add
pub async fn add_project(
    State(pool): State<PgPool>,
    Json(payload): Json<ProjectCreate>,
) -> Result<Json<ProjectPublic>, ApiError> {
    let project = insert_project(&pool, &payload.title, &payload.description, None).await?;

    tracing::info!("created graduation project {}", project.id);
    Ok(Json(ProjectPublic::from_row(&project)))
}

/// PATCH /GP/{id}
pub async fn patch_project(
    State(pool): State<PgPool>,
    Path(project_id): Path<i64>,
    Json(payload): Json<ProjectUpdate>,
) -> Result<Json<ProjectPublic>, ApiError> {
    if get_project(&pool, project_id).await?.is_none() {
        return Err(ApiError::not_found("graduation project not found"));
    }

    let mut project = update_project(
        &pool,
        project_id,
        payload.title.as_deref(),
        payload.description.as_deref(),
    )
    .await?;

    match payload.student_id {
        Some(Some(student_id)) => {
            ensure_student_linkable(&pool, student_id, project_id).await?;
            project = set_student(&pool, project_id, Some(student_id)).await?;
        }
        Some(None) => {
            project = set_student(&pool, project_id, None).await?;
        }
        None => {}
    }

    Ok(Json(ProjectPublic::from_row(&project)))
}

/// DELETE /GP/{id}
pub async fn remove_project(
    State(pool): State<PgPool>,
    Path(project_id): Path<i64>,
) -> Result<Json<ProjectDeleted>, ApiError> {
    let project = get_project(&pool, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found("graduation project not found"))?;

    delete_project(&pool, project_id).await?;

    tracing::info!("deleted graduation project {}", project_id);
    Ok(Json(ProjectDeleted {
        message: "graduation project deleted successfully".to_string(),
        project: ProjectPublic::from_row(&project),
    }))
}
