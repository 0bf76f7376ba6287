//! Employer CRUD endpoints
//!
//! Same resource pattern as `admins`, plus the optional `username` and
//! `designation` account fields.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use campushire_shared::{
    auth::password,
    models::{
        employer::{CreateEmployer, Employer, UpdateEmployer},
        ListQuery, Page,
    },
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{required, ListParams};
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    response,
};

/// Create employer request
#[derive(Debug, Deserialize)]
pub struct CreateEmployerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub designation: Option<String>,
}

/// Create employer response (password never echoed)
#[derive(Debug, Serialize)]
pub struct CreateEmployerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub username: Option<String>,
    pub designation: Option<String>,
}

/// Update employer request
#[derive(Debug, Deserialize)]
pub struct UpdateEmployerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub username: Option<String>,
    pub designation: Option<String>,
}

/// Update employer response
#[derive(Debug, Serialize)]
pub struct UpdateEmployerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub username: Option<String>,
    pub designation: Option<String>,
}

/// Lists employers with pagination and search
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let query = ListQuery::new(params.page, params.limit, params.name, params.email);

    let results = Employer::list(&state.db, &query).await?;
    let total = Employer::count(&state.db, &query).await?;

    Ok(response::success(Page::new(results, &query, total)))
}

/// Gets a single employer by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let employer = Employer::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Employer not found".to_string()))?;

    Ok(response::success(employer))
}

/// Creates a new employer
///
/// Requires `name`, `email`, `mobile` and `password`; rejects duplicates of
/// an existing email or mobile. Check and insert share a transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployerRequest>,
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

    if Employer::email_or_mobile_exists(&mut *tx, &email, &mobile).await? {
        return Err(ApiError::Conflict(
            "Email or mobile already exists".to_string(),
        ));
    }

    let password_hash = password::hash_password(&plain_password)?;

    let id = Employer::insert(
        &mut *tx,
        CreateEmployer {
            name: name.clone(),
            email: email.clone(),
            mobile: mobile.clone(),
            password_hash,
            username: req.username.clone(),
            designation: req.designation.clone(),
        },
    )
    .await?;

    tx.commit().await?;

    Ok(response::created(CreateEmployerResponse {
        id,
        name,
        email,
        mobile,
        username: req.username,
        designation: req.designation,
    }))
}

/// Updates an employer's account fields
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEmployerRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let (Some(name), Some(email), Some(mobile)) = (
        required(req.name),
        required(req.email),
        required(req.mobile),
    ) else {
        return Err(ApiError::Validation(
            "Name, email, and mobile are required".to_string(),
        ));
    };

    let affected = Employer::update(
        &state.db,
        id,
        &UpdateEmployer {
            name: name.clone(),
            email: email.clone(),
            mobile: mobile.clone(),
            username: req.username.clone(),
            designation: req.designation.clone(),
        },
    )
    .await?;

    if affected == 0 {
        return Err(ApiError::NotFound("Employer not found".to_string()));
    }

    Ok(response::success(UpdateEmployerResponse {
        id,
        name,
        email,
        mobile,
        username: req.username,
        designation: req.designation,
    }))
}

/// Deletes an employer
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let affected = Employer::delete(&state.db, id).await?;

    if affected == 0 {
        return Err(ApiError::NotFound("Employer not found".to_string()));
    }

    Ok(response::success(json!({
        "message": "Employer deleted successfully"
    })))
}
