//! Database layer for CampusHire
//!
//! Provides the PostgreSQL connection pool used by every handler. Models live
//! in the `models` module at crate root level.

pub mod pool;
