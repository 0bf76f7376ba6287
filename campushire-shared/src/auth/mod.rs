//! Authentication primitives for the admin console
//!
//! - [`password`]: bcrypt password hashing and verification
//! - [`jwt`]: signed, time-bounded session tokens
//!
//! # Example
//!
//! ```no_run
//! use campushire_shared::auth::password::{hash_password, verify_password};
//! use campushire_shared::auth::jwt::{create_token, Claims};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let hash = hash_password("admin_password")?;
//! assert!(verify_password("admin_password", &hash)?);
//!
//! let claims = Claims::new(42, "admin@example.com");
//! let token = create_token(&claims, "secret-key-at-least-32-bytes-long!!")?;
//! # Ok(())
//! # }
//! ```

pub mod jwt;
pub mod password;
