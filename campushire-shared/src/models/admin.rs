//! Admin model and database operations
//!
//! Admin accounts drive the console itself: they authenticate via
//! `/auth/login` and manage every other resource. Passwords are stored as
//! bcrypt hashes and are never serialized into responses.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE admin (
//!     "adminID" BIGSERIAL PRIMARY KEY,
//!     name VARCHAR(255) NOT NULL,
//!     email VARCHAR(255) NOT NULL UNIQUE,
//!     mobile VARCHAR(32) NOT NULL UNIQUE,
//!     password VARCHAR(255) NOT NULL,
//!     official_email VARCHAR(255),
//!     official_mobile VARCHAR(32),
//!     image VARCHAR(512),
//!     dob DATE,
//!     joining_date DATE,
//!     gender VARCHAR(16),
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use super::ListQuery;

const COLUMNS: &str = r#""adminID", name, email, mobile, password, official_email,
                         official_mobile, image, dob, joining_date, gender, created_at"#;

/// Admin console account
///
/// The password hash travels with the row internally but is skipped during
/// serialization, so it can never leak into a response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Admin {
    /// Primary key
    #[sqlx(rename = "adminID")]
    #[serde(rename = "adminID")]
    pub admin_id: i64,

    /// Display name
    pub name: String,

    /// Login email (unique)
    pub email: String,

    /// Contact number (unique)
    pub mobile: String,

    /// bcrypt password hash, excluded from every response
    #[serde(skip_serializing)]
    pub password: String,

    /// Work email, searched alongside `email` in listings
    pub official_email: Option<String>,

    /// Work contact number
    pub official_mobile: Option<String>,

    /// Profile image path under the public uploads directory
    pub image: Option<String>,

    /// Date of birth
    pub dob: Option<NaiveDate>,

    /// Date the admin joined
    pub joining_date: Option<NaiveDate>,

    pub gender: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Input for creating a new admin
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub name: String,
    pub email: String,
    pub mobile: String,

    /// bcrypt hash (NOT the plaintext password)
    pub password_hash: String,

    pub official_email: Option<String>,
    pub official_mobile: Option<String>,
    pub dob: Option<NaiveDate>,
    pub joining_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// Input for the basic admin update (name/email/mobile only)
#[derive(Debug, Clone)]
pub struct UpdateAdmin {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Input for the full profile update issued by the dashboard
#[derive(Debug, Clone)]
pub struct UpdateAdminProfile {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub official_email: Option<String>,
    pub official_mobile: Option<String>,
    pub dob: Option<NaiveDate>,
    pub joining_date: Option<NaiveDate>,
    pub gender: Option<String>,

    /// Image path to persist; callers pass the existing path through when no
    /// new file was uploaded
    pub image: Option<String>,
}

impl Admin {
    /// Lists admins for one page, newest first
    ///
    /// The optional name filter matches `name`; the optional email filter
    /// matches `email` OR `official_email`. Both are case-insensitive
    /// substring matches.
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Vec<Self>, sqlx::Error> {
        let mut sql = format!("SELECT {} FROM admin WHERE 1=1", COLUMNS);
        let mut bind = 0;

        if query.name.is_some() {
            bind += 1;
            sql.push_str(&format!(" AND name ILIKE ${}", bind));
        }
        if query.email.is_some() {
            bind += 1;
            sql.push_str(&format!(
                " AND (email ILIKE ${0} OR official_email ILIKE ${0})",
                bind
            ));
        }
        sql.push_str(&format!(
            r#" ORDER BY "adminID" DESC LIMIT ${} OFFSET ${}"#,
            bind + 1,
            bind + 2
        ));

        let mut q = sqlx::query_as::<_, Self>(&sql);
        if let Some(pattern) = query.name_pattern() {
            q = q.bind(pattern);
        }
        if let Some(pattern) = query.email_pattern() {
            q = q.bind(pattern);
        }

        q.bind(query.limit).bind(query.offset()).fetch_all(pool).await
    }

    /// Counts admins matching the same filter predicate as [`Self::list`]
    pub async fn count(pool: &PgPool, query: &ListQuery) -> Result<i64, sqlx::Error> {
        let mut sql = String::from("SELECT COUNT(*) FROM admin WHERE 1=1");
        let mut bind = 0;

        if query.name.is_some() {
            bind += 1;
            sql.push_str(&format!(" AND name ILIKE ${}", bind));
        }
        if query.email.is_some() {
            bind += 1;
            sql.push_str(&format!(
                " AND (email ILIKE ${0} OR official_email ILIKE ${0})",
                bind
            ));
        }

        let mut q = sqlx::query_as::<_, (i64,)>(&sql);
        if let Some(pattern) = query.name_pattern() {
            q = q.bind(pattern);
        }
        if let Some(pattern) = query.email_pattern() {
            q = q.bind(pattern);
        }

        let (count,) = q.fetch_one(pool).await?;
        Ok(count)
    }

    /// Finds an admin by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(r#"SELECT {} FROM admin WHERE "adminID" = $1"#, COLUMNS);
        sqlx::query_as::<_, Self>(&sql).bind(id).fetch_optional(pool).await
    }

    /// Finds an admin by login email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!("SELECT {} FROM admin WHERE email = $1", COLUMNS);
        sqlx::query_as::<_, Self>(&sql)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Checks whether any admin already uses the given email or mobile
    pub async fn email_or_mobile_exists(
        executor: impl PgExecutor<'_>,
        email: &str,
        mobile: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> =
            sqlx::query_as(r#"SELECT "adminID" FROM admin WHERE email = $1 OR mobile = $2"#)
                .bind(email)
                .bind(mobile)
                .fetch_optional(executor)
                .await?;
        Ok(row.is_some())
    }

    /// Checks whether an admin other than `id` already uses the given email
    /// or mobile, used by the profile update conflict check
    pub async fn email_or_mobile_taken_by_other(
        executor: impl PgExecutor<'_>,
        email: &str,
        mobile: &str,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"SELECT "adminID" FROM admin WHERE (email = $1 OR mobile = $2) AND "adminID" != $3"#,
        )
        .bind(email)
        .bind(mobile)
        .bind(id)
        .fetch_optional(executor)
        .await?;
        Ok(row.is_some())
    }

    /// Inserts a new admin, returning the generated id
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        data: CreateAdmin,
    ) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO admin (name, email, mobile, password, official_email,
                               official_mobile, dob, joining_date, gender)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING "adminID"
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.mobile)
        .bind(data.password_hash)
        .bind(data.official_email)
        .bind(data.official_mobile)
        .bind(data.dob)
        .bind(data.joining_date)
        .bind(data.gender)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    /// Updates name/email/mobile, returning the number of rows affected
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: i64,
        data: &UpdateAdmin,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"UPDATE admin SET name = $1, email = $2, mobile = $3 WHERE "adminID" = $4"#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.mobile)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Applies the full dashboard profile update, returning rows affected
    pub async fn update_profile(
        executor: impl PgExecutor<'_>,
        id: i64,
        data: &UpdateAdminProfile,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE admin
            SET name = $1, email = $2, mobile = $3, official_email = $4,
                official_mobile = $5, dob = $6, joining_date = $7, gender = $8, image = $9
            WHERE "adminID" = $10
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.mobile)
        .bind(&data.official_email)
        .bind(&data.official_mobile)
        .bind(data.dob)
        .bind(data.joining_date)
        .bind(&data.gender)
        .bind(&data.image)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes an admin, returning the number of rows affected
    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM admin WHERE "adminID" = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_never_serializes_password() {
        let admin = Admin {
            admin_id: 1,
            name: "Root".into(),
            email: "root@example.com".into(),
            mobile: "9999999999".into(),
            password: "$2b$10$secret-hash".into(),
            official_email: None,
            official_mobile: None,
            image: None,
            dob: None,
            joining_date: None,
            gender: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&admin).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["adminID"], 1);
        assert_eq!(json["email"], "root@example.com");
    }
}
