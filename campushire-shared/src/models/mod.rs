//! Database models for CampusHire
//!
//! One module per table, each exposing the model struct plus its CRUD
//! operations:
//!
//! - `admin`: admin console accounts
//! - `faculty`: registered faculty users
//! - `employer`: employer accounts
//! - `job`: job postings owned by employers
//! - `anonymous`: pre-registration placeholder records and their purge logic
//! - `dashboard`: read-only aggregate counts and growth series
//!
//! The paginated-listing vocabulary ([`ListQuery`] / [`Page`]) lives here
//! because all four listable resources share it.

pub mod admin;
pub mod anonymous;
pub mod dashboard;
pub mod employer;
pub mod faculty;
pub mod job;

use serde::{Deserialize, Serialize};

/// Parameters for a paginated, filterable listing
///
/// `page` and `limit` are clamped to at least 1; out-of-range client input
/// falls back to the defaults rather than producing a negative offset.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// 1-based page number (default 1)
    pub page: i64,

    /// Page size (default 10)
    pub limit: i64,

    /// Case-insensitive substring filter on the name column
    pub name: Option<String>,

    /// Case-insensitive substring filter on the email column(s)
    pub email: Option<String>,
}

impl ListQuery {
    /// Builds a query from raw request parameters, applying defaults and clamps
    pub fn new(
        page: Option<i64>,
        limit: Option<i64>,
        name: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(10).max(1),
            name: name.filter(|s| !s.is_empty()),
            email: email.filter(|s| !s.is_empty()),
        }
    }

    /// Number of rows to skip for the requested page
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// SQL LIKE pattern for the name filter, if set
    pub fn name_pattern(&self) -> Option<String> {
        self.name.as_ref().map(|n| format!("%{}%", n))
    }

    /// SQL LIKE pattern for the email filter, if set
    pub fn email_pattern(&self) -> Option<String> {
        self.email.as_ref().map(|e| format!("%{}%", e))
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}

/// One page of listing results plus the pagination metadata the console
/// renders its pager from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Rows for this page (at most `limit` of them)
    pub results: Vec<T>,

    /// 1-based page number that was served
    pub page: i64,

    /// Page size that was applied
    pub limit: i64,

    /// Total rows matching the filter, across all pages
    pub total: i64,

    /// ceil(total / limit)
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Assembles a page from listing results and the matching-row count
    pub fn new(results: Vec<T>, query: &ListQuery, total: i64) -> Self {
        Self {
            results,
            page: query.page,
            limit: query.limit,
            total,
            total_pages: (total + query.limit - 1) / query.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let q = ListQuery::new(None, None, None, None);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
        assert_eq!(q.offset(), 0);
        assert!(q.name.is_none());
        assert!(q.email.is_none());
    }

    #[test]
    fn test_list_query_clamps_out_of_range() {
        let q = ListQuery::new(Some(0), Some(-5), None, None);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 1);
        assert_eq!(q.offset(), 0);
    }

    #[test]
    fn test_list_query_offset() {
        let q = ListQuery::new(Some(3), Some(25), None, None);
        assert_eq!(q.offset(), 50);
    }

    #[test]
    fn test_empty_filters_are_dropped() {
        let q = ListQuery::new(None, None, Some(String::new()), Some(String::new()));
        assert!(q.name.is_none());
        assert!(q.email.is_none());
    }

    #[test]
    fn test_like_patterns() {
        let q = ListQuery::new(None, None, Some("smith".into()), Some("@uni".into()));
        assert_eq!(q.name_pattern().unwrap(), "%smith%");
        assert_eq!(q.email_pattern().unwrap(), "%@uni%");
    }

    #[test]
    fn test_page_total_pages_rounds_up() {
        let q = ListQuery::new(Some(1), Some(10), None, None);

        let page: Page<i32> = Page::new(vec![], &q, 0);
        assert_eq!(page.total_pages, 0);

        let page: Page<i32> = Page::new(vec![], &q, 10);
        assert_eq!(page.total_pages, 1);

        let page: Page<i32> = Page::new(vec![], &q, 11);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_page_serializes_total_pages_camel_case() {
        let q = ListQuery::default();
        let page: Page<i32> = Page::new(vec![1, 2], &q, 2);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["total"], 2);
        assert_eq!(json["results"], serde_json::json!([1, 2]));
    }
}
