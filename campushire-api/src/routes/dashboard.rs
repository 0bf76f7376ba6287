//! Dashboard endpoints: admin profile and aggregate charts
//!
//! The profile update accepts `multipart/form-data` so the console can send
//! text fields and an optional replacement image in one request.

use axum::extract::{Multipart, Path, Query, State};
use campushire_shared::models::{
    admin::{Admin, UpdateAdminProfile},
    dashboard::{FacultyCounts, GrowthFilter, GrowthPoint, JobCounts},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use std::path::Path as FsPath;

use super::required;
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    response, uploads,
};

/// Text fields and optional image collected from the profile update form
#[derive(Debug, Default)]
struct ProfileForm {
    name: Option<String>,
    email: Option<String>,
    mobile: Option<String>,
    official_email: Option<String>,
    official_mobile: Option<String>,
    dob: Option<NaiveDate>,
    joining_date: Option<NaiveDate>,
    gender: Option<String>,

    /// Uploaded image, as (original file name, bytes)
    image: Option<(String, Vec<u8>)>,
}

/// Chart query string for the growth series
#[derive(Debug, Deserialize)]
pub struct ChartParams {
    pub filter: Option<String>,
}

/// Gets an admin's profile
///
/// # Errors
///
/// - `404 Not Found`: no admin with that id
pub async fn profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let admin = Admin::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(response::success(admin))
}

fn parse_date(field: &str, value: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation(format!("Invalid {} date, expected YYYY-MM-DD", field)))
}

/// Drains the multipart stream into a [`ProfileForm`]
async fn read_profile_form(mut multipart: Multipart) -> ApiResult<ProfileForm> {
    let mut form = ProfileForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| ApiError::Validation("Image file name missing".to_string()))?;
                let data = field.bytes().await?;
                form.image = Some((file_name, data.to_vec()));
            }
            _ => {
                let value = field.text().await?;
                let value = required(Some(value));
                match name.as_str() {
                    "name" => form.name = value,
                    "email" => form.email = value,
                    "mobile" => form.mobile = value,
                    "official_email" => form.official_email = value,
                    "official_mobile" => form.official_mobile = value,
                    "gender" => form.gender = value,
                    "dob" => {
                        if let Some(v) = value {
                            form.dob = Some(parse_date("dob", &v)?);
                        }
                    }
                    "joining_date" => {
                        if let Some(v) = value {
                            form.joining_date = Some(parse_date("joining_date", &v)?);
                        }
                    }
                    // Unknown fields are ignored
                    _ => {}
                }
            }
        }
    }

    Ok(form)
}

/// Updates an admin's profile, optionally replacing the profile image
///
/// The new image is written to disk before the row is updated; if a previous
/// image existed it is removed after the update commits. Without a new
/// upload, the existing image path is carried through unchanged.
///
/// # Errors
///
/// - `400 Bad Request`: missing required fields, bad date, or rejected image
/// - `404 Not Found`: no admin with that id
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> ApiResult<impl axum::response::IntoResponse> {
    let form = read_profile_form(multipart).await?;

    let (Some(name), Some(email), Some(mobile)) = (form.name, form.email, form.mobile) else {
        return Err(ApiError::Validation(
            "Name, email, and mobile are required".to_string(),
        ));
    };

    let existing = Admin::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Admin not found".to_string()))?;

    let mut tx = state.db.begin().await?;

    if Admin::email_or_mobile_taken_by_other(&mut *tx, &email, &mobile, id).await? {
        return Err(ApiError::Conflict(
            "Email or mobile already exists for another admin".to_string(),
        ));
    }

    let upload_dir = FsPath::new(state.upload_dir());

    let image = match &form.image {
        Some((file_name, data)) => Some(uploads::save_image(upload_dir, file_name, data).await?),
        None => existing.image.clone(),
    };

    let update = UpdateAdminProfile {
        name,
        email,
        mobile,
        official_email: form.official_email,
        official_mobile: form.official_mobile,
        dob: form.dob,
        joining_date: form.joining_date,
        gender: form.gender,
        image,
    };

    Admin::update_profile(&mut *tx, id, &update).await?;

    tx.commit().await?;

    // The old image only becomes garbage once the new path is committed
    if form.image.is_some() {
        if let Some(old) = &existing.image {
            uploads::remove_image(upload_dir, old).await;
        }
    }

    Ok(response::success_with(
        "Profile updated successfully",
        json!({
            "id": id,
            "name": update.name,
            "email": update.email,
            "mobile": update.mobile,
            "official_email": update.official_email,
            "official_mobile": update.official_mobile,
            "dob": update.dob,
            "joining_date": update.joining_date,
            "gender": update.gender,
            "image": update.image,
        }),
    ))
}

/// Faculty counts for the user chart
pub async fn user_chart(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let counts = FacultyCounts::fetch(&state.db).await?;
    Ok(response::success(counts))
}

/// Job counts for the job chart
pub async fn job_chart(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let counts = JobCounts::fetch(&state.db).await?;
    Ok(response::success(counts))
}

/// Employer/job growth series bucketed by the requested filter
///
/// # Errors
///
/// - `400 Bad Request`: filter is not one of day/week/month/year
/// - `404 Not Found`: no data in the requested window
pub async fn employer_job_chart(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let filter = params
        .filter
        .as_deref()
        .unwrap_or("day")
        .parse::<GrowthFilter>()
        .map_err(|_| ApiError::Validation("Invalid filter".to_string()))?;

    let series = GrowthPoint::series(&state.db, filter).await?;

    if series.is_empty() {
        return Err(ApiError::NotFound("No data found".to_string()));
    }

    Ok(response::success(series))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("dob", "1990-02-17").unwrap(),
            NaiveDate::from_ymd_opt(1990, 2, 17).unwrap()
        );
        assert!(parse_date("dob", "17/02/1990").is_err());
        assert!(parse_date("dob", "").is_err());
    }
}
