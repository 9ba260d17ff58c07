/**
 * Student Handlers
 *
 * HTTP handlers for the /students endpoints: CRUD on students plus the two
 * cross-entity operations (attach credential, attach subjects).
 */

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::passwords::hash_password;
use crate::emails::db::{emails_for_student, insert_credential};
use crate::error::ApiError;
use crate::projects::db::get_project_for_student;
use crate::projects::handlers::ProjectCreate;
use crate::query::Pagination;
use crate::students::db::{
    delete_student, get_student, insert_link, insert_student, link_exists, list_students,
    subjects_for_student, update_student,
};
use crate::students::department::Department;
use crate::subjects::db::get_subject;
use crate::views::{
    EmailPublicWithStudent, StudentPublic, StudentPublicWithAll, StudentPublicWithProject,
    SubjectPublic,
};

/// Student creation payload, optionally carrying an embedded graduation
/// project created atomically with the student.
#[derive(Debug, Deserialize)]
pub struct StudentCreate {
    pub name: String,
    pub age: i32,
    pub department: String,
    #[serde(default)]
    pub graduation_project: Option<ProjectCreate>,
}

/// Partial update: only supplied fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub department: Option<String>,
}

/// Equality filters for the student list.
#[derive(Debug, Default, Deserialize)]
pub struct StudentFilter {
    pub department: Option<String>,
    pub age: Option<i32>,
}

/// Credential payload attached to a student.
#[derive(Debug, Deserialize)]
pub struct EmailCreate {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct StudentDeleted {
    pub message: String,
    pub student: StudentPublic,
}

#[derive(Debug, Serialize)]
pub struct SubjectsAttached {
    pub message: String,
}

/// GET /students
pub async fn get_students(
    State(pool): State<PgPool>,
    Query(page): Query<Pagination>,
    Query(filter): Query<StudentFilter>,
) -> Result<Json<Vec<StudentPublic>>, ApiError> {
    let (skip, limit) = page.resolve()?;

    let department = filter
        .department
        .as_deref()
        .map(Department::parse)
        .transpose()?;

    if let Some(age) = filter.age {
        if age <= 0 || age > 100 {
            return Err(ApiError::validation("age must be between 1 and 100"));
        }
    }

    let students = list_students(&pool, skip, limit, department, filter.age).await?;
    Ok(Json(students.iter().map(StudentPublic::from_row).collect()))
}

/// GET /students/{id}
///
/// Returns the student with every direct relation embedded one level deep.
pub async fn get_student_by_id(
    State(pool): State<PgPool>,
    Path(student_id): Path<i64>,
) -> Result<Json<StudentPublicWithAll>, ApiError> {
    let student = get_student(&pool, student_id)
        .await?
        .ok_or_else(|| ApiError::not_found("student not found"))?;

    let project = get_project_for_student(&pool, student_id).await?;
    let emails = emails_for_student(&pool, student_id).await?;
    let subjects = subjects_for_student(&pool, student_id).await?;

    Ok(Json(StudentPublicWithAll::compose(
        &student,
        project.as_ref(),
        &emails,
        &subjects,
    )))
}

/// POST /students/add
///
/// When the payload embeds a graduation project, the student and project
/// rows are created in one transaction.
pub async fn add_student(
    State(pool): State<PgPool>,
    Json(payload): Json<StudentCreate>,
) -> Result<Json<StudentPublicWithProject>, ApiError> {
    let department = Department::parse(&payload.department)?;

    let project = payload
        .graduation_project
        .as_ref()
        .map(|p| (p.title.as_str(), p.description.as_str()));

    let (student, project) =
        insert_student(&pool, &payload.name, payload.age, department, project).await?;

    tracing::info!("created student {}", student.id);
    Ok(Json(StudentPublicWithProject::compose(
        &student,
        project.as_ref(),
    )))
}

/// PATCH /students/{id}
pub async fn patch_student(
    State(pool): State<PgPool>,
    Path(student_id): Path<i64>,
    Json(payload): Json<StudentUpdate>,
) -> Result<Json<StudentPublic>, ApiError> {
    if get_student(&pool, student_id).await?.is_none() {
        return Err(ApiError::not_found("student not found"));
    }

    let department = payload
        .department
        .as_deref()
        .map(Department::parse)
        .transpose()?;

    let student = update_student(
        &pool,
        student_id,
        payload.name.as_deref(),
        payload.age,
        department,
    )
    .await?;

    Ok(Json(StudentPublic::from_row(&student)))
}

/// DELETE /students/{id}
///
/// Physical delete; credentials cascade away and the graduation project is
/// orphaned (student_id set to null) by the schema's referential actions.
pub async fn remove_student(
    State(pool): State<PgPool>,
    Path(student_id): Path<i64>,
) -> Result<Json<StudentDeleted>, ApiError> {
    let student = get_student(&pool, student_id)
        .await?
        .ok_or_else(|| ApiError::not_found("student not found"))?;

    delete_student(&pool, student_id).await?;

    tracing::info!("deleted student {}", student_id);
    Ok(Json(StudentDeleted {
        message: "student deleted successfully".to_string(),
        student: StudentPublic::from_row(&student),
    }))
}

/// POST /students/{id}/emails/add
///
/// Attach a credential to the student: the password is hashed before the
/// row is written, and the plaintext is dropped here.
pub async fn add_student_email(
    State(pool): State<PgPool>,
    Path(student_id): Path<i64>,
    Json(payload): Json<EmailCreate>,
) -> Result<Json<EmailPublicWithStudent>, ApiError> {
    let student = get_student(&pool, student_id)
        .await?
        .ok_or_else(|| ApiError::not_found("student not found"))?;

    let hashed = hash_password(&payload.password)?;
    let email = insert_credential(&pool, &payload.email, &hashed, Some(student_id)).await?;

    tracing::info!("attached credential {} to student {}", email.id, student_id);
    Ok(Json(EmailPublicWithStudent::compose(&email, Some(&student))))
}

/// GET /students/{id}/subjects
pub async fn get_student_subjects(
    State(pool): State<PgPool>,
    Path(student_id): Path<i64>,
) -> Result<Json<Vec<SubjectPublic>>, ApiError> {
    if get_student(&pool, student_id).await?.is_none() {
        return Err(ApiError::not_found("student not found"));
    }

    let subjects = subjects_for_student(&pool, student_id).await?;
    Ok(Json(subjects.iter().map(SubjectPublic::from_row).collect()))
}

/// POST /students/{id}/subjects
///
/// Attach a batch of subjects by id. Pairings are validated and inserted
/// one at a time, stop-on-first-error: when a later id fails, earlier
/// pairings in the same request are already persisted. A missing subject is
/// a 404, an existing pairing a 409.
pub async fn add_subjects_to_student(
    State(pool): State<PgPool>,
    Path(student_id): Path<i64>,
    Json(subject_ids): Json<Vec<i64>>,
) -> Result<Json<SubjectsAttached>, ApiError> {
    let student = get_student(&pool, student_id)
        .await?
        .ok_or_else(|| ApiError::not_found("student not found"))?;

    let mut attached = Vec::new();
    for subject_id in subject_ids {
        let subject = get_subject(&pool, subject_id)
            .await?
            .ok_or_else(|| ApiError::not_found("subject not found"))?;

        if link_exists(&pool, student_id, subject_id).await? {
            return Err(ApiError::conflict("subject already added to student"));
        }

        insert_link(&pool, student_id, subject_id).await?;
        attached.push(subject.name);
    }

    Ok(Json(SubjectsAttached {
        message: format!(
            "subjects {:?} added to student '{}' successfully",
            attached, student.name
        ),
    }))
}
