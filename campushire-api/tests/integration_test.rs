/// Integration tests for the CampusHire admin API
///
/// These tests drive the assembled router end-to-end:
/// - Request validation on every create/update surface
/// - The uniform response envelope on failures
/// - Routing and status-code mapping
/// - The anonymous-purge and CRUD contracts against a live database
///
/// The validation and routing tests use a lazy pool and fail before the
/// first query, so they need no database. The tests built on
/// `TestContext::with_database` require PostgreSQL and are skipped when
/// `DATABASE_URL` is not set.

mod common;

use axum::http::StatusCode;
use campushire_shared::models::anonymous::AnonymousFaculty;
use campushire_shared::models::faculty::{CreateFaculty, Faculty};
use common::TestContext;
use serde_json::json;

#[tokio::test]
async fn test_login_requires_email_and_password() {
    let mut ctx = TestContext::new().unwrap();

    let (status, body) = ctx
        .request_json("POST", "/auth/login", Some(json!({})))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email and password are required");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_login_rejects_blank_fields() {
    let mut ctx = TestContext::new().unwrap();

    let (status, body) = ctx
        .request_json(
            "POST",
            "/auth/login",
            Some(json!({"email": "   ", "password": ""})),
        )
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email and password are required");
}

#[tokio::test]
async fn test_create_admin_requires_all_fields() {
    let mut ctx = TestContext::new().unwrap();

    let (status, body) = ctx
        .request_json(
            "POST",
            "/users",
            Some(json!({"name": "Admin", "email": "a@example.com"})),
        )
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Name, email, mobile, and password are required"
    );
}

#[tokio::test]
async fn test_update_admin_requires_all_fields() {
    let mut ctx = TestContext::new().unwrap();

    let (status, body) = ctx
        .request_json("PUT", "/users/1", Some(json!({"name": "Only Name"})))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name, email, and mobile are required to update");
}

#[tokio::test]
async fn test_create_faculty_requires_all_fields() {
    let mut ctx = TestContext::new().unwrap();

    let (status, body) = ctx
        .request_json("POST", "/faculty", Some(json!({"email": "f@example.com"})))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Name, email, mobile, and password are required"
    );
}

#[tokio::test]
async fn test_create_employer_requires_all_fields() {
    let mut ctx = TestContext::new().unwrap();

    let (status, body) = ctx
        .request_json(
            "POST",
            "/employers",
            Some(json!({"name": "Acme", "mobile": "123"})),
        )
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Name, email, mobile, and password are required"
    );
}

#[tokio::test]
async fn test_create_job_requires_contact_but_no_password() {
    let mut ctx = TestContext::new().unwrap();

    let (status, body) = ctx
        .request_json("POST", "/job", Some(json!({"name": "Lecturer"})))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    // Jobs are postings, not accounts: the message never mentions a password
    assert_eq!(body["message"], "Name, email, and mobile are required");
}

#[tokio::test]
async fn test_employer_job_chart_rejects_unknown_filter() {
    let mut ctx = TestContext::new().unwrap();

    let (status, body) = ctx
        .request_json("GET", "/dashboard/employer-job-chart?filter=hour", None)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid filter");
}

#[tokio::test]
async fn test_employer_job_chart_filter_is_case_sensitive() {
    let mut ctx = TestContext::new().unwrap();

    let (status, _) = ctx
        .request_json("GET", "/dashboard/employer-job-chart?filter=Week", None)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let mut ctx = TestContext::new().unwrap();

    let (status, _) = ctx.request_json("GET", "/nope", None).await.unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Full purge contract through the HTTP surface, serialized into one test
/// so the table-wide sweeps cannot race each other:
/// - no overlap with registered users → 404
/// - a paginated call never deletes more than `limit` records
/// - matched records are gone afterwards
/// - repeating the sweep → 404 again
#[tokio::test]
async fn test_anonymous_purge_endpoints() {
    let Some(mut ctx) = TestContext::with_database().await.unwrap() else {
        return;
    };

    // Start from a drained table
    AnonymousFaculty::purge_matched(&ctx.db).await.unwrap();

    let (status, body) = ctx
        .request_json("GET", "/auth/deleteAnonymousUser", None)
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No matching anonymous users found");

    let suffix = common::unique_suffix();
    let email = format!("purge-api-{}@example.com", suffix);
    let mobile = format!("{}", suffix % 10_000_000_000);

    let faculty_id = Faculty::insert(
        &ctx.db,
        CreateFaculty {
            name: "Purge Api Faculty".to_string(),
            email: email.clone(),
            mobile: mobile.clone(),
            password_hash: "$2b$10$test-hash".to_string(),
            dob: None,
            gender: None,
        },
    )
    .await
    .unwrap();

    for _ in 0..3 {
        sqlx::query("INSERT INTO anonymous_facuilty (email) VALUES ($1)")
            .bind(&email)
            .execute(&ctx.db)
            .await
            .unwrap();
    }

    let (status, body) = ctx
        .request_json("GET", "/auth/deleteAnonymousUsers?limit=2", None)
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["deletedCount"], 2);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["limit"], 2);

    let (status, body) = ctx
        .request_json("GET", "/auth/deleteAnonymousUser", None)
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deletedCount"], 1);

    let (status, body) = ctx
        .request_json("GET", "/auth/deleteAnonymousUsers?limit=2", None)
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "No matching anonymous users found for this page"
    );

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM anonymous_facuilty WHERE email = $1")
            .bind(&email)
            .fetch_one(&ctx.db)
            .await
            .unwrap();
    assert_eq!(count, 0);

    Faculty::delete(&ctx.db, faculty_id).await.unwrap();
}

/// Create → get-by-id echo, duplicate conflict, list totals and delete,
/// all through the HTTP surface
#[tokio::test]
async fn test_admin_crud_round_trip() {
    let Some(mut ctx) = TestContext::with_database().await.unwrap() else {
        return;
    };

    let suffix = common::unique_suffix();
    let marker = format!("CrudMarker{}", suffix);

    let mut ids = Vec::new();
    for i in 0..3 {
        let (status, body) = ctx
            .request_json(
                "POST",
                "/users",
                Some(json!({
                    "name": format!("{} {}", marker, i),
                    "email": format!("crud-{}-{}@example.com", suffix, i),
                    "mobile": format!("{}{}", suffix % 1_000_000_000, i),
                    "password": "admin_password",
                })),
            )
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        ids.push(body["data"]["id"].as_i64().unwrap());
    }

    // Get-by-id echoes the created fields, without the password
    let (status, body) = ctx
        .request_json("GET", &format!("/users/{}", ids[0]), None)
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], format!("{} 0", marker));
    assert_eq!(
        body["data"]["email"],
        format!("crud-{}-0@example.com", suffix)
    );
    assert!(body["data"].get("password").is_none());

    // Reusing an existing email is a conflict
    let (status, body) = ctx
        .request_json(
            "POST",
            "/users",
            Some(json!({
                "name": "Duplicate",
                "email": format!("crud-{}-0@example.com", suffix),
                "mobile": "0000000001",
                "password": "admin_password",
            })),
        )
        .await
        .unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email or mobile already exists");

    // Filtered listing reports the full matching total across pages
    let (status, body) = ctx
        .request_json(
            "GET",
            &format!("/users?name={}&limit=2&page=1", marker),
            None,
        )
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["results"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["totalPages"], 2);

    for id in &ids {
        let (status, body) = ctx
            .request_json("DELETE", &format!("/users/{}", id), None)
            .await
            .unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["message"], "User deleted successfully");
    }

    let (status, _) = ctx
        .request_json("GET", &format!("/users/{}", ids[0]), None)
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_rejects_non_numeric_page() {
    let mut ctx = TestContext::new().unwrap();

    let (status, _) = ctx
        .request_json("GET", "/users?page=abc", None)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
