//! Anonymous faculty records and their purge logic
//!
//! An anonymous record holds a mobile/email pair captured before a visitor
//! registered. Once a faculty user or employer registers with either
//! identifier, the record is superseded and must be removed. There is no
//! foreign-key or trigger enforcing this; the two purge operations below are
//! the mechanism.
//!
//! A record is eligible for deletion if *either* identifier appears in
//! *either* registered-user table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Pre-registration placeholder record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AnonymousFaculty {
    pub id: i64,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AnonymousFaculty {
    /// Deletes every anonymous record whose mobile or email matches a
    /// registered faculty user or employer, returning the number deleted
    ///
    /// One unbounded statement; use [`Self::purge_page`] for incremental
    /// sweeps over large backlogs.
    pub async fn purge_matched(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM anonymous_facuilty
            WHERE mobile IN (SELECT mobile FROM faculity_users WHERE mobile IS NOT NULL)
               OR email IN (SELECT email FROM faculity_users WHERE email IS NOT NULL)
               OR mobile IN (SELECT mobile FROM employer_user WHERE mobile IS NOT NULL)
               OR email IN (SELECT email FROM employer_user WHERE email IS NOT NULL)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes one bounded page of matched anonymous records
    ///
    /// Selects up to `limit` candidate ids at `offset` (ordered by id so
    /// pages are stable), then deletes exactly that id set. Both steps run in
    /// one transaction, so ids cannot shift between the select and the delete
    /// even with concurrent sweeps. Returns the number actually deleted; zero
    /// means the page had no candidates.
    pub async fn purge_page(pool: &PgPool, limit: i64, offset: i64) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let candidates: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT af.id
            FROM anonymous_facuilty af
            LEFT JOIN faculity_users fu
                ON af.mobile = fu.mobile OR af.email = fu.email
            LEFT JOIN employer_user eu
                ON af.mobile = eu.mobile OR af.email = eu.email
            WHERE fu.mobile IS NOT NULL
               OR fu.email IS NOT NULL
               OR eu.mobile IS NOT NULL
               OR eu.email IS NOT NULL
            ORDER BY af.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *tx)
        .await?;

        if candidates.is_empty() {
            return Ok(0);
        }

        let ids: Vec<i64> = candidates.into_iter().map(|(id,)| id).collect();

        let result = sqlx::query("DELETE FROM anonymous_facuilty WHERE id = ANY($1)")
            .bind(&ids)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_record_roundtrip() {
        let record = AnonymousFaculty {
            id: 1,
            mobile: Some("111".into()),
            email: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["mobile"], "111");
        assert!(json["email"].is_null());
    }

    // Purge semantics are exercised against a live database in
    // tests/db_models_tests.rs.
}
