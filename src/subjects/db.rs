/**
 * Subject Database Operations
 */

use sqlx::PgPool;

use crate::students::db::StudentRow;

/// A row of the subjects table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SubjectRow {
    pub id: i64,
    pub name: String,
    pub hours: i32,
}

pub async fn list_subjects(
    pool: &PgPool,
    skip: i64,
    limit: i64,
) -> Result<Vec<SubjectRow>, sqlx::Error> {
    sqlx::query_as::<_, SubjectRow>(
        r#"
        SELECT id, name, hours
        FROM subjects
        ORDER BY id
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get_subject(pool: &PgPool, id: i64) -> Result<Option<SubjectRow>, sqlx::Error> {
    sqlx::query_as::<_, SubjectRow>(
        r#"
        SELECT id, name, hours
        FROM subjects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_subject(
    pool: &PgPool,
    name: &str,
    hours: i32,
) -> Result<SubjectRow, sqlx::Error> {
    sqlx::query_as::<_, SubjectRow>(
        r#"
        INSERT INTO subjects (name, hours)
        VALUES ($1, $2)
        RETURNING id, name, hours
        "#,
    )
    .bind(name)
    .bind(hours)
    .fetch_one(pool)
    .await
}

/// Apply a partial update: fields passed as `None` are left untouched.
pub async fn update_subject(
    pool: &PgPool,
    id: i64,
    name: Option<&str>,
    hours: Option<i32>,
) -> Result<SubjectRow, sqlx::Error> {
    sqlx::query_as::<_, SubjectRow>(
        r#"
        UPDATE subjects
        SET name = COALESCE($2, name),
            hours = COALESCE($3, hours)
        WHERE id = $1
        RETURNING id, name, hours
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(hours)
    .fetch_one(pool)
    .await
}

pub async fn delete_subject(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM subjects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Students linked to this subject, ordered by student id.
pub async fn students_for_subject(
    pool: &PgPool,
    subject_id: i64,
) -> Result<Vec<StudentRow>, sqlx::Error> {
    sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT st.id, st.name, st.age, st.department
        FROM students st
        JOIN student_subject_link l ON l.student_id = st.id
        WHERE l.subject_id = $1
        ORDER BY st.id
        "#,
    )
    .bind(subject_id)
    .fetch_all(pool)
    .await
}
