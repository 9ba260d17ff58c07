/**
 * Department Enumeration
 *
 * The closed set of departments a student may belong to. Input is accepted
 * case-insensitively and canonicalized to lowercase before storage, so the
 * database only ever holds `cs`, `sc`, or `csys`.
 */

use std::fmt;

use crate::error::ApiError;

/// Allowed department values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    /// Computer Science
    Cs,
    /// Scientific Computing
    Sc,
    /// Computer Systems
    Csys,
}

impl Department {
    /// Parse a department name case-insensitively.
    ///
    /// Unrecognized values fail validation instead of being stored.
    pub fn parse(value: &str) -> Result<Self, ApiError> {
        match value.to_lowercase().as_str() {
            "cs" => Ok(Self::Cs),
            "sc" => Ok(Self::Sc),
            "csys" => Ok(Self::Csys),
            other => Err(ApiError::validation(format!(
                "unknown department '{other}', expected one of: cs, sc, csys"
            ))),
        }
    }

    /// Canonical lowercase form, as stored and as rendered in projections.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::Sc => "sc",
            Self::Csys => "csys",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Department::parse("CS").unwrap(), Department::Cs);
        assert_eq!(Department::parse("cs").unwrap(), Department::Cs);
        assert_eq!(Department::parse("Csys").unwrap(), Department::Csys);
        assert_eq!(Department::parse("SC").unwrap(), Department::Sc);
    }

    #[test]
    fn test_canonical_form_is_lowercase() {
        assert_eq!(Department::parse("CS").unwrap().as_str(), "cs");
        assert_eq!(Department::parse("CSYS").unwrap().to_string(), "csys");
    }

    #[test]
    fn test_unknown_department_fails_validation() {
        assert!(Department::parse("math").is_err());
        assert!(Department::parse("").is_err());
    }
}
