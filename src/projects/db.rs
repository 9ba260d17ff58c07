/**
 * Graduation Project Database Operations
 *
 * A project references its owning student through a nullable, unique
 * foreign key: at most one project per student, and the project row
 * survives (orphaned) when the student is deleted.
 */

use sqlx::PgPool;

/// A row of the graduation_projects table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub student_id: Option<i64>,
}

pub async fn list_projects(
    pool: &PgPool,
    skip: i64,
    limit: i64,
) -> Result<Vec<ProjectRow>, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT id, title, description, student_id
        FROM graduation_projects
        ORDER BY id
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get_project(pool: &PgPool, id: i64) -> Result<Option<ProjectRow>, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT id, title, description, student_id
        FROM graduation_projects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_project_for_student(
    pool: &PgPool,
    student_id: i64,
) -> Result<Option<ProjectRow>, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT id, title, description, student_id
        FROM graduation_projects
        WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .fetch_optional(pool)
    .await
}

/// Insert a project, either unattached or already linked to a student.
/// The unique constraint on student_id is the sole guard against two
/// concurrent creates for the same student.
pub async fn insert_project(
    pool: &PgPool,
    title: &str,
    description: &str,
    student_id: Option<i64>,
) -> Result<ProjectRow, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>(
        r#"
        INSERT INTO graduation_projects (title, description, student_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, description, student_id
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(student_id)
    .fetch_one(pool)
    .await
}

/// Apply a partial update: fields passed as `None` are left untouched.
/// Linking to a student goes through the dedicated `set_student` below so
/// that "clear the link" and "leave the link alone" stay distinguishable.
pub async fn update_project(
    pool: &PgPool,
    id: i64,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<ProjectRow, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>(
        r#"
        UPDATE graduation_projects
        SET title = COALESCE($2, title),
            description = COALESCE($3, description)
        WHERE id = $1
        RETURNING id, title, description, student_id
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .fetch_one(pool)
    .await
}

/// Link the project to a student (or detach it with `None`).
pub async fn set_student(
    pool: &PgPool,
    id: i64,
    student_id: Option<i64>,
) -> Result<ProjectRow, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>(
        r#"
        UPDATE graduation_projects
        SET student_id = $2
        WHERE id = $1
        RETURNING id, title, description, student_id
        "#,
    )
    .bind(id)
    .bind(student_id)
    .fetch_one(pool)
    .await
}

pub async fn delete_project(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM graduation_projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
