//! The JSON response envelope
//!
//! Every response, success or failure, is wrapped in the same envelope:
//!
//! ```json
//! { "success": true,  "message": "Success", "data": { ... } }
//! { "success": false, "message": "User not found" }
//! ```
//!
//! Handlers build success envelopes through [`success`] / [`created`]; error
//! envelopes come from `ApiError::into_response`.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Uniform JSON wrapper distinguishing success from failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the request succeeded
    pub success: bool,

    /// Human-readable outcome message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Payload, present on success only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Success envelope carrying a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Error envelope carrying only a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// 200 response with the default "Success" message
pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope::ok("Success", data)))
}

/// 200 response with a custom message
pub fn success_with<T: Serialize>(
    message: impl Into<String>,
    data: T,
) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope::ok(message, data)))
}

/// 201 response for newly created resources
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, Json(Envelope::ok("Success", data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let (status, Json(envelope)) = success(json!({"id": 1}));

        assert_eq!(status, StatusCode::OK);
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Success");
        assert_eq!(value["data"]["id"], 1);
    }

    #[test]
    fn test_created_envelope_status() {
        let (status, _) = created(json!({"id": 1}));
        assert_eq!(status, StatusCode::CREATED);
    }

    #[test]
    fn test_error_envelope_has_no_data_key() {
        let envelope = Envelope::<()>::error("User not found");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "User not found");
        assert!(value.get("data").is_none());
    }
}
