//! Database-backed integration tests.
//!
//! Run against a live Postgres instance when `DATABASE_URL` is set and
//! skipped otherwise. These cover behavior the persistence layer and the
//! schema provide together: association uniqueness, the transactional
//! student-with-project create, referential actions on student deletion,
//! and list windowing.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use college_records::students::db::{insert_student, list_students};
use college_records::students::Department;

use common::{test_pool, test_server, unique_marker};

async fn create_student(server: &TestServer, name: &str, age: i32) -> i64 {
    let response = server
        .post("/students/add")
        .json(&json!({"name": name, "age": age, "department": "cs"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Value>()["id"].as_i64().unwrap()
}

async fn create_subject(server: &TestServer, name: &str, hours: i32) -> i64 {
    let response = server
        .post("/subjects/add")
        .json(&json!({"name": name, "hours": hours}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<Value>()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_duplicate_subject_attach_conflicts_and_keeps_one_row() {
    let Some(pool) = test_pool().await else { return };
    let server = test_server(pool.clone());

    let student_id = create_student(&server, "link student", 21).await;
    let subject_id = create_subject(&server, "databases", 40).await;

    let first = server
        .post(&format!("/students/{student_id}/subjects"))
        .json(&json!([subject_id]))
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = server
        .post(&format!("/students/{student_id}/subjects"))
        .json(&json!([subject_id]))
        .await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);

    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM student_subject_link WHERE student_id = $1 AND subject_id = $2",
    )
    .bind(student_id)
    .bind(subject_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_student_with_embedded_project_created_together() {
    let Some(pool) = test_pool().await else { return };
    let server = test_server(pool.clone());

    let response = server
        .post("/students/add")
        .json(&json!({
            "name": "project student",
            "age": 23,
            "department": "sc",
            "graduation_project": {
                "title": "query planner",
                "description": "cost-based planning for a toy database"
            }
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let student_id = body["id"].as_i64().unwrap();
    let project_id = body["graduation_project"]["id"].as_i64().unwrap();

    let (owner,): (Option<i64>,) =
        sqlx::query_as("SELECT student_id FROM graduation_projects WHERE id = $1")
            .bind(project_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(owner, Some(student_id));
}

#[tokio::test]
async fn test_deleting_student_orphans_project_and_cascades_credentials() {
    let Some(pool) = test_pool().await else { return };
    let server = test_server(pool.clone());

    let response = server
        .post("/students/add")
        .json(&json!({
            "name": "departing student",
            "age": 24,
            "department": "csys",
            "graduation_project": {"title": "scheduler", "description": "a process scheduler"}
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let student_id = body["id"].as_i64().unwrap();
    let project_id = body["graduation_project"]["id"].as_i64().unwrap();

    let credential = server
        .post(&format!("/students/{student_id}/emails/add"))
        .json(&json!({
            "email": format!("departing-{}@college.test", unique_marker()),
            "password": "a plaintext password"
        }))
        .await;
    assert_eq!(credential.status_code(), StatusCode::OK);
    let email_id = credential.json::<Value>()["id"].as_i64().unwrap();

    let subject_id = create_subject(&server, "networks", 30).await;
    let attach = server
        .post(&format!("/students/{student_id}/subjects"))
        .json(&json!([subject_id]))
        .await;
    assert_eq!(attach.status_code(), StatusCode::OK);

    let deleted = server.delete(&format!("/students/{student_id}")).await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    // The project row survives with its owner nulled out.
    let (owner,): (Option<i64>,) =
        sqlx::query_as("SELECT student_id FROM graduation_projects WHERE id = $1")
            .bind(project_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(owner, None);

    // Credential and association rows are gone.
    let (emails,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM emails WHERE id = $1")
        .bind(email_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(emails, 0);

    let (links,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM student_subject_link WHERE student_id = $1")
            .bind(student_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(links, 0);
}

#[tokio::test]
async fn test_skip_and_limit_window_students_in_id_order() {
    let Some(pool) = test_pool().await else { return };

    // A marker age scopes the assertions to rows this test inserted.
    let marker = (unique_marker() % 1_000_000_000) as i32;
    let mut ids = Vec::new();
    for name in ["window a", "window b", "window c"] {
        let (student, _) = insert_student(&pool, name, marker, Department::Cs, None)
            .await
            .unwrap();
        ids.push(student.id);
    }

    let all = list_students(&pool, 0, 100, None, Some(marker)).await.unwrap();
    assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), ids);

    let window = list_students(&pool, 1, 1, None, Some(marker)).await.unwrap();
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].id, ids[1]);

    let past_end = list_students(&pool, 3, 100, None, Some(marker)).await.unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_relinking_project_to_its_own_student_is_not_a_conflict() {
    let Some(pool) = test_pool().await else { return };
    let server = test_server(pool.clone());

    let student_id = create_student(&server, "project owner", 22).await;

    let created = server
        .post("/GP/add")
        .json(&json!({"title": "ray tracer", "description": "a software ray tracer"}))
        .await;
    assert_eq!(created.status_code(), StatusCode::OK);
    let project_id = created.json::<Value>()["id"].as_i64().unwrap();

    let linked = server
        .patch(&format!("/GP/{project_id}"))
        .json(&json!({"student_id": student_id}))
        .await;
    assert_eq!(linked.status_code(), StatusCode::OK);

    // Submitting the same link again is a no-op, not a 409.
    let relinked = server
        .patch(&format!("/GP/{project_id}"))
        .json(&json!({"student_id": student_id}))
        .await;
    assert_eq!(relinked.status_code(), StatusCode::OK);
    assert_eq!(
        relinked.json::<Value>()["student_id"].as_i64(),
        Some(student_id)
    );

    // A different project against the same student still conflicts.
    let other = server
        .post("/GP/add")
        .json(&json!({"title": "second project", "description": "should not attach"}))
        .await;
    assert_eq!(other.status_code(), StatusCode::OK);
    let other_id = other.json::<Value>()["id"].as_i64().unwrap();

    let conflict = server
        .patch(&format!("/GP/{other_id}"))
        .json(&json!({"student_id": student_id}))
        .await;
    assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
}
