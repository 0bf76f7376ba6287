//! Job posting model and database operations
//!
//! A job is owned by an employer and carries a posting contact
//! (name/email/mobile) plus draft and approval flags. Unlike the account
//! resources there is no password; create only requires the contact fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use super::ListQuery;

const COLUMNS: &str =
    r#""jobID", "employerID", name, email, mobile, draft_status, approval_status, created_at"#;

/// Job posting
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    #[sqlx(rename = "jobID")]
    #[serde(rename = "jobID")]
    pub job_id: i64,

    /// Owning employer, if assigned
    #[sqlx(rename = "employerID")]
    #[serde(rename = "employerID")]
    pub employer_id: Option<i64>,

    /// Posting title / contact name
    pub name: String,

    /// Posting contact email
    pub email: String,

    /// Posting contact number
    pub mobile: String,

    /// "yes" while the posting is still a draft
    pub draft_status: String,

    /// 0 = pending, 1 = approved
    pub approval_status: i32,

    pub created_at: DateTime<Utc>,
}

/// Input for creating a new job posting
#[derive(Debug, Clone)]
pub struct CreateJob {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub employer_id: Option<i64>,
}

/// Input for updating a job posting
#[derive(Debug, Clone)]
pub struct UpdateJob {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl Job {
    /// Lists jobs for one page, newest first, with optional case-insensitive
    /// name/email substring filters
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Vec<Self>, sqlx::Error> {
        let mut sql = format!("SELECT {} FROM jobs WHERE 1=1", COLUMNS);
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
            r#" ORDER BY "jobID" DESC LIMIT ${} OFFSET ${}"#,
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

    /// Counts jobs matching the same filter predicate as [`Self::list`]
    pub async fn count(pool: &PgPool, query: &ListQuery) -> Result<i64, sqlx::Error> {
        let mut sql = String::from("SELECT COUNT(*) FROM jobs WHERE 1=1");
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

    /// Finds a job by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(r#"SELECT {} FROM jobs WHERE "jobID" = $1"#, COLUMNS);
        sqlx::query_as::<_, Self>(&sql).bind(id).fetch_optional(pool).await
    }

    /// Checks whether any job already uses the given contact email or mobile
    pub async fn email_or_mobile_exists(
        executor: impl PgExecutor<'_>,
        email: &str,
        mobile: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> =
            sqlx::query_as(r#"SELECT "jobID" FROM jobs WHERE email = $1 OR mobile = $2"#)
                .bind(email)
                .bind(mobile)
                .fetch_optional(executor)
                .await?;
        Ok(row.is_some())
    }

    /// Inserts a new job posting, returning the generated id
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        data: CreateJob,
    ) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO jobs (name, email, mobile, "employerID")
            VALUES ($1, $2, $3, $4)
            RETURNING "jobID"
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.mobile)
        .bind(data.employer_id)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    /// Updates the posting contact fields, returning rows affected
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: i64,
        data: &UpdateJob,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"UPDATE jobs SET name = $1, email = $2, mobile = $3 WHERE "jobID" = $4"#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.mobile)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a job posting, returning the number of rows affected
    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM jobs WHERE "jobID" = $1"#)
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
    fn test_job_serializes_key_fields() {
        let job = Job {
            job_id: 5,
            employer_id: Some(2),
            name: "Physics Lecturer".into(),
            email: "jobs@acme.example".into(),
            mobile: "333".into(),
            draft_status: "no".into(),
            approval_status: 1,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["jobID"], 5);
        assert_eq!(json["employerID"], 2);
        assert_eq!(json["draft_status"], "no");
    }
}
