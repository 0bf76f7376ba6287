//! Faculty user model and database operations
//!
//! Faculty rows carry a large optional profile (skills, experience, salary,
//! location and so on) captured progressively after signup; the dashboard
//! counts rows with placeholder values in those columns as "incomplete".
//! Deletion through the console is a hard delete; the soft-delete columns are
//! written by the public-facing application and only read here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use super::ListQuery;

const COLUMNS: &str = r#""faculityID", name, email, mobile, password, gender, dob, state, city,
                         skill, job_function, industry_type, qualification, university,
                         experience, salary, current_employer, current_position, status, image,
                         is_deleted, deleted_at, deleted_by, created_at, updated_at"#;

/// Registered faculty user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Faculty {
    #[sqlx(rename = "faculityID")]
    #[serde(rename = "faculityID")]
    pub faculity_id: i64,

    pub name: String,
    pub email: String,
    pub mobile: String,

    /// bcrypt password hash, excluded from every response
    #[serde(skip_serializing)]
    pub password: String,

    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub skill: Option<String>,
    pub job_function: Option<String>,
    pub industry_type: Option<String>,
    pub qualification: Option<String>,
    pub university: Option<String>,
    pub experience: Option<String>,
    pub salary: Option<String>,
    pub current_employer: Option<String>,
    pub current_position: Option<String>,
    pub status: Option<String>,
    pub image: Option<String>,

    /// Soft-delete marker written by the public application
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<i64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new faculty user
#[derive(Debug, Clone)]
pub struct CreateFaculty {
    pub name: String,
    pub email: String,
    pub mobile: String,

    /// bcrypt hash (NOT the plaintext password)
    pub password_hash: String,

    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// Input for updating a faculty user
#[derive(Debug, Clone)]
pub struct UpdateFaculty {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl Faculty {
    /// Lists faculty users for one page, newest first, with optional
    /// case-insensitive name/email substring filters
    pub async fn list(pool: &PgPool, query: &ListQuery) -> Result<Vec<Self>, sqlx::Error> {
        let mut sql = format!("SELECT {} FROM faculity_users WHERE 1=1", COLUMNS);
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
            r#" ORDER BY "faculityID" DESC LIMIT ${} OFFSET ${}"#,
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

    /// Counts faculty users matching the same filter predicate as [`Self::list`]
    pub async fn count(pool: &PgPool, query: &ListQuery) -> Result<i64, sqlx::Error> {
        let mut sql = String::from("SELECT COUNT(*) FROM faculity_users WHERE 1=1");
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

    /// Finds a faculty user by id
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let sql = format!(
            r#"SELECT {} FROM faculity_users WHERE "faculityID" = $1"#,
            COLUMNS
        );
        sqlx::query_as::<_, Self>(&sql).bind(id).fetch_optional(pool).await
    }

    /// Checks whether any faculty user already uses the given email or mobile
    pub async fn email_or_mobile_exists(
        executor: impl PgExecutor<'_>,
        email: &str,
        mobile: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"SELECT "faculityID" FROM faculity_users WHERE email = $1 OR mobile = $2"#,
        )
        .bind(email)
        .bind(mobile)
        .fetch_optional(executor)
        .await?;
        Ok(row.is_some())
    }

    /// Inserts a new faculty user, returning the generated id
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        data: CreateFaculty,
    ) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO faculity_users (name, email, mobile, password, dob, gender)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING "faculityID"
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.mobile)
        .bind(data.password_hash)
        .bind(data.dob)
        .bind(data.gender)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    /// Updates name/email/mobile, returning the number of rows affected
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: i64,
        data: &UpdateFaculty,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE faculity_users
            SET name = $1, email = $2, mobile = $3, updated_at = NOW()
            WHERE "faculityID" = $4
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.mobile)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a faculty user, returning the number of rows affected
    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM faculity_users WHERE "faculityID" = $1"#)
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
    fn test_faculty_never_serializes_password() {
        let faculty = Faculty {
            faculity_id: 9,
            name: "Asha".into(),
            email: "asha@example.com".into(),
            mobile: "111".into(),
            password: "$2b$10$hash".into(),
            gender: None,
            dob: None,
            state: None,
            city: None,
            skill: None,
            job_function: None,
            industry_type: None,
            qualification: None,
            university: None,
            experience: None,
            salary: None,
            current_employer: None,
            current_position: None,
            status: None,
            image: None,
            is_deleted: false,
            deleted_at: None,
            deleted_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&faculty).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["faculityID"], 9);
    }
}
