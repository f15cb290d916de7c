//! Error and pagination envelopes as the API returns them.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::Fixture;

/// Status, code and message triples seen on failure responses.
const ERROR_CASES: &[(u16, &str, &str)] = &[
    (400, "VALIDATION_ERROR", "Validation failed"),
    (401, "UNAUTHORIZED", "Authentication required"),
    (403, "FORBIDDEN", "Insufficient permissions"),
    (404, "NOT_FOUND", "Resource not found"),
    (409, "CONFLICT", "Resource already exists"),
    (429, "RATE_LIMITED", "Too many requests"),
    (500, "INTERNAL_ERROR", "Internal server error"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
    pub status: u16,
}

/// `{ "error": { "message", "code", "status" } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    pub fn new(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                code: code.into(),
                status,
            },
        }
    }
}

impl Fixture for ErrorResponse {
    fn generate() -> Self {
        let (status, code, message) = ERROR_CASES
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or((500, "INTERNAL_ERROR", "Internal server error"));
        Self::new(status, code, message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u32) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// `{ "data": [...], "pagination": {...} }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Wraps `items` as page `page` of a `total`-sized collection.
pub fn paginated<T>(items: Vec<T>, page: u32, limit: u32, total: u32) -> Paginated<T> {
    Paginated {
        data: items,
        pagination: Pagination::new(page, limit, total),
    }
}

impl<T: Fixture> Fixture for Paginated<T> {
    /// A random full-or-last page of generated items.
    fn generate() -> Self {
        let mut rng = rand::rng();
        let limit = *[10u32, 20, 25, 50].choose(&mut rng).unwrap_or(&10);
        let total = rng.random_range(0..=limit * 5);
        let total_pages = total.div_ceil(limit).max(1);
        let page = rng.random_range(1..=total_pages);

        let remaining = total.saturating_sub((page - 1) * limit);
        let items = (0..remaining.min(limit)).map(|_| T::generate()).collect();

        paginated(items, page, limit, total)
    }
}
