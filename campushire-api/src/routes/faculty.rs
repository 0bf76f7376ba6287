//! Faculty CRUD endpoints
//!
//! Same resource pattern as `admins`, against the faculty table.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use campushire_shared::{
    auth::password,
    models::{
        faculty::{CreateFaculty, Faculty, UpdateFaculty},
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

/// Create faculty request
#[derive(Debug, Deserialize)]
pub struct CreateFacultyRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password: Option<String>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// Create faculty response (password never echoed)
#[derive(Debug, Serialize)]
pub struct CreateFacultyResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// Update faculty request
#[derive(Debug, Deserialize)]
pub struct UpdateFacultyRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

/// Update faculty response
#[derive(Debug, Serialize)]
pub struct UpdateFacultyResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Lists faculty users with pagination and search
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let query = ListQuery::new(params.page, params.limit, params.name, params.email);

    let results = Faculty::list(&state.db, &query).await?;
    let total = Faculty::count(&state.db, &query).await?;

    Ok(response::success(Page::new(results, &query, total)))
}

/// Gets a single faculty user by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let faculty = Faculty::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(response::success(faculty))
}

/// Creates a new faculty user
///
/// Requires `name`, `email`, `mobile` and `password`; rejects duplicates of
/// an existing email or mobile. Check and insert share a transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateFacultyRequest>,
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

    if Faculty::email_or_mobile_exists(&mut *tx, &email, &mobile).await? {
        return Err(ApiError::Conflict(
            "Email or mobile already exists".to_string(),
        ));
    }

    let password_hash = password::hash_password(&plain_password)?;

    let id = Faculty::insert(
        &mut *tx,
        CreateFaculty {
            name: name.clone(),
            email: email.clone(),
            mobile: mobile.clone(),
            password_hash,
            dob: req.dob,
            gender: req.gender.clone(),
        },
    )
    .await?;

    tx.commit().await?;

    Ok(response::created(CreateFacultyResponse {
        id,
        name,
        email,
        mobile,
        dob: req.dob,
        gender: req.gender,
    }))
}

/// Updates a faculty user's name, email and mobile
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateFacultyRequest>,
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

    let affected = Faculty::update(
        &state.db,
        id,
        &UpdateFaculty {
            name: name.clone(),
            email: email.clone(),
            mobile: mobile.clone(),
        },
    )
    .await?;

    if affected == 0 {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(response::success(UpdateFacultyResponse {
        id,
        name,
        email,
        mobile,
    }))
}

/// Deletes a faculty user
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let affected = Faculty::delete(&state.db, id).await?;

    if affected == 0 {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(response::success(json!({
        "message": "User deleted successfully"
    })))
}
