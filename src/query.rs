/**
 * Common List-Query Parameters
 *
 * Every list endpoint accepts `skip` (offset, >= 0, default 0) and `limit`
 * (page size, 1-100, default 100). Out-of-range values are rejected as a
 * validation error before any persistence access.
 */

use serde::Deserialize;

use crate::error::ApiError;

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 100;

/// Raw `skip`/`limit` query parameters shared by all list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    /// Validate and resolve defaults, returning `(skip, limit)`.
    pub fn resolve(&self) -> Result<(i64, i64), ApiError> {
        let skip = self.skip.unwrap_or(0);
        if skip < 0 {
            return Err(ApiError::validation("skip must be >= 0"));
        }

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 1 || limit > MAX_LIMIT {
            return Err(ApiError::validation("limit must be between 1 and 100"));
        }

        Ok((skip, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let page = Pagination::default();
        assert_eq!(page.resolve().unwrap(), (0, 100));
    }

    #[test]
    fn test_explicit_values() {
        let page = Pagination {
            skip: Some(10),
            limit: Some(25),
        };
        assert_eq!(page.resolve().unwrap(), (10, 25));
    }

    #[test]
    fn test_negative_skip_rejected() {
        let page = Pagination {
            skip: Some(-1),
            limit: None,
        };
        assert!(page.resolve().is_err());
    }

    #[test]
    fn test_limit_bounds() {
        let zero = Pagination {
            skip: None,
            limit: Some(0),
        };
        assert!(zero.resolve().is_err());

        let over = Pagination {
            skip: None,
            limit: Some(101),
        };
        assert!(over.resolve().is_err());

        let max = Pagination {
            skip: None,
            limit: Some(100),
        };
        assert_eq!(max.resolve().unwrap(), (0, 100));
    }
}
