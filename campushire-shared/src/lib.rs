//! # CampusHire Shared Library
//!
//! Shared types and data-access code used by the CampusHire admin API:
//!
//! - `db`: PostgreSQL connection pool management
//! - `models`: database models and their CRUD operations
//! - `auth`: password hashing and JWT utilities

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the CampusHire shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
