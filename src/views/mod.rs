//! View Projections
//!
//! Read-only output shapes for every entity, all defined together in one
//! module so the Student/Subject/Project/Email cross-references never form
//! a type cycle.
//!
//! # Shape Rules
//!
//! - Each entity has a base "public" shape holding its user-facing scalar
//!   fields. `EmailPublic` intentionally includes `hashed_password`,
//!   preserving the source system's documented behavior (see DESIGN.md).
//! - "With-X" shapes compose explicitly: the base projection is flattened
//!   into the output and each related entity embeds its own *base* shape.
//!   Embedding is a one-level snapshot taken at read time; an embedded
//!   relation never re-embeds its own relations, which breaks the
//!   Student ↔ GraduationProject cycle.

use serde::Serialize;

use crate::emails::db::EmailRow;
use crate::projects::db::ProjectRow;
use crate::students::db::StudentRow;
use crate::subjects::db::SubjectRow;

// ---------------------------------------------------------------------------
// Base shapes
// ---------------------------------------------------------------------------

/// Public shape of a student. The department is always the canonical
/// lowercase form because it is canonicalized before storage.
#[derive(Debug, Clone, Serialize)]
pub struct StudentPublic {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub department: String,
}

impl StudentPublic {
    pub fn from_row(row: &StudentRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            age: row.age,
            department: row.department.clone(),
        }
    }
}

/// Public shape of a subject.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectPublic {
    pub id: i64,
    pub name: String,
    pub hours: i32,
}

impl SubjectPublic {
    pub fn from_row(row: &SubjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            hours: row.hours,
        }
    }
}

/// Public shape of a graduation project. `student_id` is null when the
/// project is unattached (including after its student was deleted).
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPublic {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub student_id: Option<i64>,
}

impl ProjectPublic {
    pub fn from_row(row: &ProjectRow) -> Self {
        Self {
            id: row.id,
            title: row.title.clone(),
            description: row.description.clone(),
            student_id: row.student_id,
        }
    }
}

/// Public shape of a credential record.
///
/// Exposes `hashed_password` to authenticated callers; retained from the
/// source system rather than silently hardened.
#[derive(Debug, Clone, Serialize)]
pub struct EmailPublic {
    pub id: i64,
    pub email: String,
    pub hashed_password: String,
    pub student_id: Option<i64>,
}

impl EmailPublic {
    pub fn from_row(row: &EmailRow) -> Self {
        Self {
            id: row.id,
            email: row.email.clone(),
            hashed_password: row.hashed_password.clone(),
            student_id: row.student_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Composed shapes
// ---------------------------------------------------------------------------

/// Student plus its graduation project, if any.
#[derive(Debug, Serialize)]
pub struct StudentPublicWithProject {
    #[serde(flatten)]
    pub student: StudentPublic,
    pub graduation_project: Option<ProjectPublic>,
}

impl StudentPublicWithProject {
    pub fn compose(student: &StudentRow, project: Option<&ProjectRow>) -> Self {
        Self {
            student: StudentPublic::from_row(student),
            graduation_project: project.map(ProjectPublic::from_row),
        }
    }
}

/// Student plus every direct relation at once.
#[derive(Debug, Serialize)]
pub struct StudentPublicWithAll {
    #[serde(flatten)]
    pub student: StudentPublic,
    pub graduation_project: Option<ProjectPublic>,
    pub emails: Vec<EmailPublic>,
    pub subjects: Vec<SubjectPublic>,
}

impl StudentPublicWithAll {
    pub fn compose(
        student: &StudentRow,
        project: Option<&ProjectRow>,
        emails: &[EmailRow],
        subjects: &[SubjectRow],
    ) -> Self {
        Self {
            student: StudentPublic::from_row(student),
            graduation_project: project.map(ProjectPublic::from_row),
            emails: emails.iter().map(EmailPublic::from_row).collect(),
            subjects: subjects.iter().map(SubjectPublic::from_row).collect(),
        }
    }
}

/// Subject plus the students enrolled in it.
#[derive(Debug, Serialize)]
pub struct SubjectPublicWithStudents {
    #[serde(flatten)]
    pub subject: SubjectPublic,
    pub students: Vec<StudentPublic>,
}

impl SubjectPublicWithStudents {
    pub fn compose(subject: &SubjectRow, students: &[StudentRow]) -> Self {
        Self {
            subject: SubjectPublic::from_row(subject),
            students: students.iter().map(StudentPublic::from_row).collect(),
        }
    }
}

/// Graduation project plus its owning student, if any. The embedded student
/// is the base shape only; it does not re-embed the project.
#[derive(Debug, Serialize)]
pub struct ProjectPublicWithStudent {
    #[serde(flatten)]
    pub project: ProjectPublic,
    pub student: Option<StudentPublic>,
}

impl ProjectPublicWithStudent {
    pub fn compose(project: &ProjectRow, student: Option<&StudentRow>) -> Self {
        Self {
            project: ProjectPublic::from_row(project),
            student: student.map(StudentPublic::from_row),
        }
    }
}

/// Credential plus its owning student, if any.
#[derive(Debug, Serialize)]
pub struct EmailPublicWithStudent {
    #[serde(flatten)]
    pub email: EmailPublic,
    pub student: Option<StudentPublic>,
}

impl EmailPublicWithStudent {
    pub fn compose(email: &EmailRow, student: Option<&StudentRow>) -> Self {
        Self {
            email: EmailPublic::from_row(email),
            student: student.map(StudentPublic::from_row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn student_row() -> StudentRow {
        StudentRow {
            id: 1,
            name: "Alice".to_string(),
            age: 20,
            department: "cs".to_string(),
        }
    }

    fn project_row() -> ProjectRow {
        ProjectRow {
            id: 7,
            title: "Compilers".to_string(),
            description: "A toy compiler".to_string(),
            student_id: Some(1),
        }
    }

    #[test]
    fn test_with_all_flattens_base_fields() {
        let emails = vec![EmailRow {
            id: 3,
            email: "alice@college.edu".to_string(),
            hashed_password: "$2b$12$hash".to_string(),
            student_id: Some(1),
            role: None,
        }];
        let subjects = vec![SubjectRow {
            id: 5,
            name: "Algorithms".to_string(),
            hours: 4,
        }];

        let view =
            StudentPublicWithAll::compose(&student_row(), Some(&project_row()), &emails, &subjects);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["department"], "cs");
        assert_eq!(json["graduation_project"]["title"], "Compilers");
        assert_eq!(json["emails"][0]["hashed_password"], "$2b$12$hash");
        assert_eq!(json["subjects"][0]["name"], "Algorithms");
    }

    #[test]
    fn test_embedding_is_one_level_deep() {
        // The project embedded in a student view is the base shape: it has
        // no "student" key, so the cycle cannot recurse.
        let view = StudentPublicWithProject::compose(&student_row(), Some(&project_row()));
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["graduation_project"].get("student").is_none());

        // And the student embedded in a project view has no project key.
        let view = ProjectPublicWithStudent::compose(&project_row(), Some(&student_row()));
        let json = serde_json::to_value(&view).unwrap();
        assert!(json["student"].get("graduation_project").is_none());
    }

    #[test]
    fn test_missing_relations_render_as_null_or_empty() {
        let view = StudentPublicWithAll::compose(&student_row(), None, &[], &[]);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["graduation_project"], serde_json::Value::Null);
        assert_eq!(json["emails"].as_array().unwrap().len(), 0);
        assert_eq!(json["subjects"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_orphaned_project_keeps_null_student_id() {
        let orphan = ProjectRow {
            student_id: None,
            ..project_row()
        };
        let json = serde_json::to_value(ProjectPublicWithStudent::compose(&orphan, None)).unwrap();
        assert_eq!(json["student_id"], serde_json::Value::Null);
        assert_eq!(json["student"], serde_json::Value::Null);
    }
}
