//! # CampusHire Admin API Library
//!
//! Core functionality for the CampusHire admin API server.
//!
//! ## Modules
//!
//! - `app`: application state and router builder
//! - `config`: configuration management
//! - `error`: error handling and HTTP response mapping
//! - `response`: the JSON response envelope
//! - `routes`: API route handlers
//! - `uploads`: profile image storage

pub mod app;
pub mod config;
pub mod error;
pub mod response;
pub mod routes;
pub mod uploads;
