/**
 * Credential Database Operations
 *
 * Row type and queries for the emails table. Email is not unique across
 * credentials; lookups by email tie-break deterministically by lowest id,
 * which is what the login flow relies on.
 */

use sqlx::PgPool;

/// A row of the emails table. `role` is set out-of-band by operators; no
/// creation path populates it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmailRow {
    pub id: i64,
    pub email: String,
    pub hashed_password: String,
    pub student_id: Option<i64>,
    pub role: Option<String>,
}

pub async fn list_credentials(
    pool: &PgPool,
    skip: i64,
    limit: i64,
) -> Result<Vec<EmailRow>, sqlx::Error> {
    sqlx::query_as::<_, EmailRow>(
        r#"
        SELECT id, email, hashed_password, student_id, role
        FROM emails
        ORDER BY id
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get_credential(pool: &PgPool, id: i64) -> Result<Option<EmailRow>, sqlx::Error> {
    sqlx::query_as::<_, EmailRow>(
        r#"
        SELECT id, email, hashed_password, student_id, role
        FROM emails
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Exact (case-sensitive) email match, first by id.
pub async fn find_credential_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<EmailRow>, sqlx::Error> {
    sqlx::query_as::<_, EmailRow>(
        r#"
        SELECT id, email, hashed_password, student_id, role
        FROM emails
        WHERE email = $1
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn emails_for_student(
    pool: &PgPool,
    student_id: i64,
) -> Result<Vec<EmailRow>, sqlx::Error> {
    sqlx::query_as::<_, EmailRow>(
        r#"
        SELECT id, email, hashed_password, student_id, role
        FROM emails
        WHERE student_id = $1
        ORDER BY id
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await
}

/// Insert a credential row. The password must already be hashed.
pub async fn insert_credential(
    pool: &PgPool,
    email: &str,
    hashed_password: &str,
    student_id: Option<i64>,
) -> Result<EmailRow, sqlx::Error> {
    sqlx::query_as::<_, EmailRow>(
        r#"
        INSERT INTO emails (email, hashed_password, student_id)
        VALUES ($1, $2, $3)
        RETURNING id, email, hashed_password, student_id, role
        "#,
    )
    .bind(email)
    .bind(hashed_password)
    .bind(student_id)
    .fetch_one(pool)
    .await
}

/// Apply a partial update: fields passed as `None` are left untouched.
/// The password must already be hashed by the caller.
pub async fn update_credential(
    pool: &PgPool,
    id: i64,
    email: Option<&str>,
    hashed_password: Option<&str>,
) -> Result<EmailRow, sqlx::Error> {
    sqlx::query_as::<_, EmailRow>(
        r#"
        UPDATE emails
        SET email = COALESCE($2, email),
            hashed_password = COALESCE($3, hashed_password)
        WHERE id = $1
        RETURNING id, email, hashed_password, student_id, role
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(hashed_password)
    .fetch_one(pool)
    .await
}

pub async fn delete_credential(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM emails WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
