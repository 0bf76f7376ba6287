//! API route handlers
//!
//! One module per mounted resource:
//!
//! - `auth`: login and anonymous-record purges
//! - `dashboard`: admin profile and aggregate charts
//! - `admins`: Admin CRUD (mounted at `/users`)
//! - `faculty`: Faculty CRUD
//! - `employers`: Employer CRUD
//! - `jobs`: Job CRUD

pub mod admins;
pub mod auth;
pub mod dashboard;
pub mod employers;
pub mod faculty;
pub mod jobs;

use serde::Deserialize;

/// Raw pagination/filter query parameters shared by every list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Normalizes a required text field: present and non-blank, or `None`
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
