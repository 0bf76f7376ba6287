//! Job CRUD endpoints
//!
//! Mounted at `/job`. Jobs are not accounts: create takes the posting
//! contact fields and an optional owning employer, and no password is
//! involved anywhere.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use campushire_shared::models::{
    job::{CreateJob, Job, UpdateJob},
    ListQuery, Page,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{required, ListParams};
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    response,
};

/// Create job request
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    #[serde(rename = "employerID")]
    pub employer_id: Option<i64>,
}

/// Create job response
#[derive(Debug, Serialize)]
pub struct CreateJobResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(rename = "employerID")]
    pub employer_id: Option<i64>,
}

/// Update job request
#[derive(Debug, Deserialize)]
pub struct UpdateJobRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

/// Update job response
#[derive(Debug, Serialize)]
pub struct UpdateJobResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Lists job postings with pagination and search
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let query = ListQuery::new(params.page, params.limit, params.name, params.email);

    let results = Job::list(&state.db, &query).await?;
    let total = Job::count(&state.db, &query).await?;

    Ok(response::success(Page::new(results, &query, total)))
}

/// Gets a single job posting by id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let job = Job::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    Ok(response::success(job))
}

/// Creates a new job posting
///
/// Requires `name`, `email` and `mobile`; rejects duplicates of an existing
/// posting contact. Check and insert share a transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
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

    let mut tx = state.db.begin().await?;

    if Job::email_or_mobile_exists(&mut *tx, &email, &mobile).await? {
        return Err(ApiError::Conflict(
            "Email or mobile already exists".to_string(),
        ));
    }

    let id = Job::insert(
        &mut *tx,
        CreateJob {
            name: name.clone(),
            email: email.clone(),
            mobile: mobile.clone(),
            employer_id: req.employer_id,
        },
    )
    .await?;

    tx.commit().await?;

    Ok(response::created(CreateJobResponse {
        id,
        name,
        email,
        mobile,
        employer_id: req.employer_id,
    }))
}

/// Updates a job posting's contact fields
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateJobRequest>,
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

    let affected = Job::update(
        &state.db,
        id,
        &UpdateJob {
            name: name.clone(),
            email: email.clone(),
            mobile: mobile.clone(),
        },
    )
    .await?;

    if affected == 0 {
        return Err(ApiError::NotFound("Job not found".to_string()));
    }

    Ok(response::success(UpdateJobResponse {
        id,
        name,
        email,
        mobile,
    }))
}

/// Deletes a job posting
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let affected = Job::delete(&state.db, id).await?;

    if affected == 0 {
        return Err(ApiError::NotFound("Job not found".to_string()));
    }

    Ok(response::success(json!({
        "message": "Job deleted successfully"
    })))
}
