//! Authentication and anonymous-record cleanup endpoints
//!
//! Login issues a 24-hour session token for an admin account. The two purge
//! endpoints remove anonymous pre-registration records whose mobile or email
//! now belongs to a registered faculty user or employer; one sweeps the whole
//! table, the other walks it a page at a time.

use axum::extract::{Query, State};
use axum::Json;
use campushire_shared::{
    auth::{jwt, password},
    models::{admin::Admin, anonymous::AnonymousFaculty},
};
use serde::Deserialize;
use serde_json::json;

use super::required;
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    response,
};

/// Default page size for the paginated purge
const DEFAULT_PURGE_LIMIT: i64 = 50;

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Pagination parameters for the paginated purge
#[derive(Debug, Default, Deserialize)]
pub struct PurgeParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Authenticates an admin and issues a session token
///
/// The two failure cases deliberately return different messages: an unknown
/// email and a wrong password are both 401, but the console surfaces them
/// distinctly.
///
/// # Errors
///
/// - `400 Bad Request`: email or password missing
/// - `401 Unauthorized`: unknown email, or password mismatch
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let (Some(email), Some(plain_password)) = (required(req.email), required(req.password)) else {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    };

    let admin = Admin::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| {
            ApiError::InvalidCredentials("Invalid email or password, user not found".to_string())
        })?;

    if !password::verify_password(&plain_password, &admin.password)? {
        return Err(ApiError::InvalidCredentials(
            "Invalid email or password".to_string(),
        ));
    }

    let claims = jwt::Claims::new(admin.admin_id, &admin.email);
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    tracing::info!(admin_id = admin.admin_id, "Admin logged in");

    Ok(response::success_with(
        "Login successful",
        json!({
            "user": admin,
            "token": token,
        }),
    ))
}

/// Purges every anonymous record matched by a registered user
///
/// # Errors
///
/// - `404 Not Found`: no record matched
pub async fn delete_anonymous_user(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let deleted = AnonymousFaculty::purge_matched(&state.db).await?;

    if deleted == 0 {
        return Err(ApiError::NotFound(
            "No matching anonymous users found".to_string(),
        ));
    }

    tracing::info!(deleted, "Purged matched anonymous users");

    Ok(response::success(json!({
        "message": "Anonymous users deleted successfully",
        "deletedCount": deleted,
    })))
}

/// Purges one page of matched anonymous records
///
/// `page` defaults to 1 and `limit` to 50; both are clamped to at least 1.
///
/// # Errors
///
/// - `404 Not Found`: the requested page had no matched records
pub async fn delete_anonymous_users(
    State(state): State<AppState>,
    Query(params): Query<PurgeParams>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_PURGE_LIMIT).max(1);
    let offset = (page - 1) * limit;

    let deleted = AnonymousFaculty::purge_page(&state.db, limit, offset).await?;

    if deleted == 0 {
        return Err(ApiError::NotFound(
            "No matching anonymous users found for this page".to_string(),
        ));
    }

    tracing::info!(deleted, page, limit, "Purged one page of anonymous users");

    Ok(response::success(json!({
        "message": "Anonymous users deleted successfully",
        "deletedCount": deleted,
        "page": page,
        "limit": limit,
    })))
}
