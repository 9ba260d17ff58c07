/**
 * Student Database Operations
 *
 * Row type and queries for the students table, the student/subject
 * association, and the transactional student-with-project create.
 */

use sqlx::PgPool;

use crate::projects::db::ProjectRow;
use crate::students::department::Department;
use crate::subjects::db::SubjectRow;

/// A row of the students table. The department is stored in canonical
/// lowercase form.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentRow {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub department: String,
}

/// List students ordered by id, optionally filtered by department and age
/// equality.
pub async fn list_students(
    pool: &PgPool,
    skip: i64,
    limit: i64,
    department: Option<Department>,
    age: Option<i32>,
) -> Result<Vec<StudentRow>, sqlx::Error> {
    sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT id, name, age, department
        FROM students
        WHERE ($1::text IS NULL OR department = $1)
          AND ($2::int IS NULL OR age = $2)
        ORDER BY id
        OFFSET $3 LIMIT $4
        "#,
    )
    .bind(department.map(|d| d.as_str()))
    .bind(age)
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn get_student(pool: &PgPool, id: i64) -> Result<Option<StudentRow>, sqlx::Error> {
    sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT id, name, age, department
        FROM students
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a student, optionally together with a graduation project, in a
/// single transaction: either both rows exist afterwards or neither does.
pub async fn insert_student(
    pool: &PgPool,
    name: &str,
    age: i32,
    department: Department,
    project: Option<(&str, &str)>,
) -> Result<(StudentRow, Option<ProjectRow>), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let student = sqlx::query_as::<_, StudentRow>(
        r#"
        INSERT INTO students (name, age, department)
        VALUES ($1, $2, $3)
        RETURNING id, name, age, department
        "#,
    )
    .bind(name)
    .bind(age)
    .bind(department.as_str())
    .fetch_one(&mut *tx)
    .await?;

    let project = match project {
        Some((title, description)) => Some(
            sqlx::query_as::<_, ProjectRow>(
                r#"
                INSERT INTO graduation_projects (title, description, student_id)
                VALUES ($1, $2, $3)
                RETURNING id, title, description, student_id
                "#,
            )
            .bind(title)
            .bind(description)
            .bind(student.id)
            .fetch_one(&mut *tx)
            .await?,
        ),
        None => None,
    };

    tx.commit().await?;
    Ok((student, project))
}

/// Apply a partial update: fields passed as `None` are left untouched.
pub async fn update_student(
    pool: &PgPool,
    id: i64,
    name: Option<&str>,
    age: Option<i32>,
    department: Option<Department>,
) -> Result<StudentRow, sqlx::Error> {
    sqlx::query_as::<_, StudentRow>(
        r#"
        UPDATE students
        SET name = COALESCE($2, name),
            age = COALESCE($3, age),
            department = COALESCE($4, department)
        WHERE id = $1
        RETURNING id, name, age, department
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(age)
    .bind(department.map(|d| d.as_str()))
    .fetch_one(pool)
    .await
}

/// Delete a student. Referential actions do the rest: credential rows
/// cascade away, the graduation project keeps its row with a nulled
/// student_id, and association rows are removed.
pub async fn delete_student(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM students WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Subjects the student is linked to, ordered by subject id.
pub async fn subjects_for_student(
    pool: &PgPool,
    student_id: i64,
) -> Result<Vec<SubjectRow>, sqlx::Error> {
    sqlx::query_as::<_, SubjectRow>(
        r#"
        SELECT s.id, s.name, s.hours
        FROM subjects s
        JOIN student_subject_link l ON l.subject_id = s.id
        WHERE l.student_id = $1
        ORDER BY s.id
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await
}

/// Whether a (student, subject) pairing already exists.
pub async fn link_exists(
    pool: &PgPool,
    student_id: i64,
    subject_id: i64,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i32,)> = sqlx::query_as(
        r#"
        SELECT 1
        FROM student_subject_link
        WHERE student_id = $1 AND subject_id = $2
        "#,
    )
    .bind(student_id)
    .bind(subject_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.is_some())
}

/// Insert one association row. Each insert commits on its own; the
/// attach-subjects endpoint deliberately applies pairings one at a time.
pub async fn insert_link(
    pool: &PgPool,
    student_id: i64,
    subject_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO student_subject_link (student_id, subject_id)
        VALUES ($1, $2)
        "#,
    )
    .bind(student_id)
    .bind(subject_id)
    .execute(pool)
    .await?;
    Ok(())
}
