//! Employer model and database operations
//!
//! Employers own job postings. Approval and visibility flags are set by a
//! separate review flow; the console reads and edits the account fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use super::ListQuery;

const COLUMNS: &str = r#""employerID", name, official_name, username, designation, email, mobile,
                         password, status, approval_status, hide_status, info_verified,
                         created_at, updated_at"#;

/// Employer account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employer {
    #[sqlx(rename = "employerID")]
    #[serde(rename = "employerID")]
    pub employer_id: i64,

    pub name: String,

    /// Registered company name
    pub official_name: Option<String>,

    pub username: Option<String>,
    pub designation: Option<String>,
    pub email: String,
    pub mobile: String,

    /// bcrypt password hash, excluded from every response
    #[serde(skip_serializing)]
    pub password: String,

    pub status: Option<String>,

    /// 0 = pending, 1 = approved
    pub approval_status: i32,

    pub hide_status: Option<String>,
    pub info_verified: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new employer
#[derive(Debug, Clone)]
pub struct CreateEmployer {
    pub name: String,
    pub email: String,
    pub mobile: String,

    /// bcrypt hash (NOT the plaintext password)
    pub password_hash: String,

    pub username: Option<String>,
    pub designation: Option<String>,
}

/// Input for updating an employer
#[derive(Debug, Clone)]
pub struct UpdateEmployer {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub username: Option<String>,
    pub designation: Option<String>,
}

impl Employer {
    /// Lists employers for one page, newest first, with optional
    /// case-insensitive name/email substring filters
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Vec<Self>, sqlx::Error> {
        let mut sql = format!("SELECT {} FROM employer_user WHERE 1=1", COLUMNS);
        let mut bind = 0;

        if query.name.is_some() {
            bind += 1;
            sql.push_str(&format!(" AND name ILIKE ${}", bind));
        }
        if query.email.is_some() {
            bind += 1;
            sql.push_str(&format!(" AND email ILIKE ${}", bind));
        }
        sql.push_str(&format!(
            r#" ORDER BY "employerID" DESC LIMIT ${} OFFSET ${}"#,
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

    /// Counts employers matching the same filter predicate as [`Self::list`]
    pub async fn count(pool: &PgPool, query: &ListQuery) -> Result<i64, sqlx::Error> {
        let mut sql = String::from("SELECT COUNT(*) FROM employer_user WHERE 1=1");
        let mut bind = 0;

        if query.name.is_some() {
            bind += 1;
            sql.push_str(&format!(" AND name ILIKE ${}", bind));
        }
        if query.email.is_some() {
            bind += 1;
            sql.push_str(&format!(" AND email ILIKE ${}", bind));
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

    /// Finds an employer by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(
            r#"SELECT {} FROM employer_user WHERE "employerID" = $1"#,
            COLUMNS
        );
        sqlx::query_as::<_, Self>(&sql).bind(id).fetch_optional(pool).await
    }

    /// Checks whether any employer already uses the given email or mobile
    pub async fn email_or_mobile_exists(
        executor: impl PgExecutor<'_>,
        email: &str,
        mobile: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"SELECT "employerID" FROM employer_user WHERE email = $1 OR mobile = $2"#,
        )
        .bind(email)
        .bind(mobile)
        .fetch_optional(executor)
        .await?;
        Ok(row.is_some())
    }

    /// Inserts a new employer, returning the generated id
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        data: CreateEmployer,
    ) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO employer_user (name, email, mobile, password, username, designation)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING "employerID"
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.mobile)
        .bind(data.password_hash)
        .bind(data.username)
        .bind(data.designation)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    /// Updates the editable account fields, returning rows affected
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: i64,
        data: &UpdateEmployer,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE employer_user
            SET name = $1, email = $2, mobile = $3, username = $4, designation = $5,
                updated_at = NOW()
            WHERE "employerID" = $6
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.mobile)
        .bind(&data.username)
        .bind(&data.designation)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes an employer, returning the number of rows affected
    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM employer_user WHERE "employerID" = $1"#)
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
    fn test_employer_never_serializes_password() {
        let employer = Employer {
            employer_id: 3,
            name: "Acme Schools".into(),
            official_name: Some("Acme Education Pvt Ltd".into()),
            username: None,
            designation: None,
            email: "hr@acme.example".into(),
            mobile: "222".into(),
            password: "$2b$10$hash".into(),
            status: None,
            approval_status: 0,
            hide_status: None,
            info_verified: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&employer).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["employerID"], 3);
    }
}
