//! Dashboard aggregation queries
//!
//! Read-only counts and time-bucketed growth series for the console landing
//! page. Each chart is a single statement; the growth series picks its
//! bucketing and lookback window from the requested [`GrowthFilter`].

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::str::FromStr;

/// Faculty aggregate counts for the user chart
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FacultyCounts {
    /// All faculty rows
    pub total_faculity_users: i64,

    /// Faculty registered today
    pub total_today_faculty_users: i64,

    /// Faculty whose profile still has placeholder values
    pub total_incomplete_faculty_users: i64,

    /// Faculty with a block request on file
    pub total_blocked_faculty_users: i64,
}

impl FacultyCounts {
    pub async fn fetch(pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM faculity_users) AS total_faculity_users,
                (SELECT COUNT(*) FROM faculity_users
                 WHERE DATE(created_at) = CURRENT_DATE) AS total_today_faculty_users,
                (SELECT COUNT(*) FROM faculity_users
                 WHERE experience = '0' OR salary = '0' OR university = ''
                    OR job_function = '0') AS total_incomplete_faculty_users,
                (SELECT COUNT(*) FROM block_request
                 JOIN faculity_users
                   ON faculity_users."faculityID" = block_request.user_id)
                    AS total_blocked_faculty_users
            "#,
        )
        .fetch_one(pool)
        .await
    }
}

/// Job aggregate counts for the job chart
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobCounts {
    pub total_jobs: i64,
    pub total_applied_jobs: i64,
    pub total_drafted_jobs: i64,
    pub total_rejected_jobs: i64,
    pub total_approval_jobs: i64,
}

impl JobCounts {
    pub async fn fetch(pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM jobs) AS total_jobs,
                (SELECT COUNT(*) FROM applied_jobs) AS total_applied_jobs,
                (SELECT COUNT(*) FROM jobs WHERE draft_status = 'yes') AS total_drafted_jobs,
                (SELECT COUNT(*) FROM applied_jobs aj
                 JOIN jobs j ON aj."jobID" = j."jobID"
                 WHERE aj.status = 'Rejected') AS total_rejected_jobs,
                (SELECT COUNT(*) FROM jobs WHERE approval_status = 1) AS total_approval_jobs
            "#,
        )
        .fetch_one(pool)
        .await
    }
}

/// Time bucketing for the employer/job growth series
///
/// Each variant pairs a bucket size with a fixed lookback window:
/// daily buckets over the current month, daily buckets over the current week
/// (Monday start), monthly buckets over the current year, yearly buckets over
/// the last 10 years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthFilter {
    Day,
    Week,
    Month,
    Year,
}

impl FromStr for GrowthFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(()),
        }
    }
}

impl GrowthFilter {
    /// The bucketing statement for this filter
    ///
    /// Every variant counts distinct employers created in the bucket and the
    /// distinct jobs they own, so an employer with many postings still counts
    /// once.
    fn query(&self) -> &'static str {
        match self {
            GrowthFilter::Day => {
                r#"
                SELECT to_char(DATE(e.created_at), 'FMDD Mon') AS time,
                       COUNT(DISTINCT e."employerID") AS employers,
                       COUNT(DISTINCT j."jobID") AS jobs
                FROM employer_user e
                LEFT JOIN jobs j ON e."employerID" = j."employerID"
                WHERE e.created_at >= date_trunc('month', CURRENT_DATE)
                  AND e.created_at < CURRENT_DATE + INTERVAL '1 day'
                GROUP BY DATE(e.created_at)
                ORDER BY DATE(e.created_at)
                "#
            }
            GrowthFilter::Week => {
                r#"
                SELECT to_char(DATE(e.created_at), 'Dy FMDD Mon') AS time,
                       COUNT(DISTINCT e."employerID") AS employers,
                       COUNT(DISTINCT j."jobID") AS jobs
                FROM employer_user e
                LEFT JOIN jobs j ON e."employerID" = j."employerID"
                WHERE e.created_at >= date_trunc('week', CURRENT_DATE)
                  AND e.created_at < date_trunc('week', CURRENT_DATE) + INTERVAL '7 days'
                GROUP BY DATE(e.created_at)
                ORDER BY DATE(e.created_at)
                "#
            }
            GrowthFilter::Month => {
                r#"
                SELECT to_char(date_trunc('month', e.created_at), 'Mon YYYY') AS time,
                       COUNT(DISTINCT e."employerID") AS employers,
                       COUNT(DISTINCT j."jobID") AS jobs
                FROM employer_user e
                LEFT JOIN jobs j ON e."employerID" = j."employerID"
                WHERE date_part('year', e.created_at) = date_part('year', CURRENT_DATE)
                GROUP BY date_trunc('month', e.created_at)
                ORDER BY date_trunc('month', e.created_at)
                "#
            }
            GrowthFilter::Year => {
                r#"
                SELECT to_char(e.created_at, 'YYYY') AS time,
                       COUNT(DISTINCT e."employerID") AS employers,
                       COUNT(DISTINCT j."jobID") AS jobs
                FROM employer_user e
                LEFT JOIN jobs j ON e."employerID" = j."employerID"
                WHERE date_part('year', e.created_at) >= date_part('year', CURRENT_DATE) - 9
                GROUP BY to_char(e.created_at, 'YYYY')
                ORDER BY to_char(e.created_at, 'YYYY')
                "#
            }
        }
    }
}

/// One bucket of the employer/job growth series
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GrowthPoint {
    /// Bucket label, e.g. "5 Sep", "Fri 5 Sep", "Sep 2026" or "2026"
    pub time: String,

    /// Distinct employers created in the bucket
    pub employers: i64,

    /// Distinct jobs owned by those employers
    pub jobs: i64,
}

impl GrowthPoint {
    /// Fetches the growth series for the requested bucketing
    pub async fn series(pool: &PgPool, filter: GrowthFilter) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(filter.query()).fetch_all(pool).await
    }
}
