//! Admin CRUD endpoints
//!
//! Mounted at `/users`. This is the reference instance of the shared
//! resource pattern: paginated filterable listing, get-by-id, create with a
//! uniqueness pre-check, update, delete.
//!
//! # Endpoints
//!
//! - `GET    /users?page&limit&name&email` - list admins
//! - `GET    /users/:id`                   - get admin by id
//! - `POST   /users`                       - create admin
//! - `PUT    /users/:id`                   - update admin
//! - `DELETE /users/:id`                   - delete admin

use axum::{
    extract::{Path, Query, State},
    Json,
};
use campushire_shared::{
    auth::password,
    models::{
        admin::{Admin, CreateAdmin, UpdateAdmin},
        ListQuery, Page,
    },
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{required, ListParams};
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    response,
};

/// Create admin request
#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password: Option<String>,
    pub official_email: Option<String>,
    pub official_mobile: Option<String>,
    pub dob: Option<NaiveDate>,
    pub joining_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// Create admin response: the inserted id plus the echoed fields
/// (the password is never echoed)
#[derive(Debug, Serialize)]
pub struct CreateAdminResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub official_email: Option<String>,
    pub official_mobile: Option<String>,
    pub dob: Option<NaiveDate>,
    pub joining_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// Update admin request
#[derive(Debug, Deserialize)]
pub struct UpdateAdminRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

/// Update admin response
#[derive(Debug, Serialize)]
pub struct UpdateAdminResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Lists admins with pagination and search
///
/// The `name` filter matches the name column; the `email` filter matches
/// `email` OR `official_email`. Both are case-insensitive substring matches.
///
/// # Errors
///
/// - `500 Internal Server Error`: database failure
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let query = ListQuery::new(params.page, params.limit, params.name, params.email);

    let results = Admin::list(&state.db, &query).await?;
    let total = Admin::count(&state.db, &query).await?;

    Ok(response::success(Page::new(results, &query, total)))
}

/// Gets a single admin by id
///
/// # Errors
///
/// - `404 Not Found`: no admin with that id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let admin = Admin::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(response::success(admin))
}

/// Creates a new admin
///
/// Requires `name`, `email`, `mobile` and `password`. The uniqueness check
/// and the insert run in one transaction so a concurrent create cannot slip
/// between them.
///
/// # Errors
///
/// - `400 Bad Request`: missing required fields, or email/mobile already used
/// - `500 Internal Server Error`: database failure
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAdminRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let (Some(name), Some(email), Some(mobile), Some(plain_password)) = (
        required(req.name),
        required(req.email),
        required(req.mobile),
        required(req.password),
    ) else {
        return Err(ApiError::Validation(
            "Name, email, mobile, and password are required".to_string(),
        ));
    };

    let mut tx = state.db.begin().await?;

    if Admin::email_or_mobile_exists(&mut *tx, &email, &mobile).await? {
        return Err(ApiError::Conflict(
            "Email or mobile already exists".to_string(),
        ));
    }

    let password_hash = password::hash_password(&plain_password)?;

    let id = Admin::insert(
        &mut *tx,
        CreateAdmin {
            name: name.clone(),
            email: email.clone(),
            mobile: mobile.clone(),
            password_hash,
            official_email: req.official_email.clone(),
            official_mobile: req.official_mobile.clone(),
            dob: req.dob,
            joining_date: req.joining_date,
            gender: req.gender.clone(),
        },
    )
    .await?;

    tx.commit().await?;

    Ok(response::created(CreateAdminResponse {
        id,
        name,
        email,
        mobile,
        official_email: req.official_email,
        official_mobile: req.official_mobile,
        dob: req.dob,
        joining_date: req.joining_date,
        gender: req.gender,
    }))
}

/// Updates an admin's name, email and mobile
///
/// # Errors
///
/// - `400 Bad Request`: missing required fields
/// - `404 Not Found`: no admin with that id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateAdminRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let (Some(name), Some(email), Some(mobile)) = (
        required(req.name),
        required(req.email),
        required(req.mobile),
    ) else {
        return Err(ApiError::Validation(
            "Name, email, and mobile are required to update".to_string(),
        ));
    };

    let affected = Admin::update(
        &state.db,
        id,
        &UpdateAdmin {
            name: name.clone(),
            email: email.clone(),
            mobile: mobile.clone(),
        },
    )
    .await?;

    if affected == 0 {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(response::success(UpdateAdminResponse {
        id,
        name,
        email,
        mobile,
    }))
}

/// Deletes an admin
///
/// # Errors
///
/// - `404 Not Found`: no admin with that id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let affected = Admin::delete(&state.db, id).await?;

    if affected == 0 {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(response::success(json!({
        "message": "User deleted successfully"
    })))
}
