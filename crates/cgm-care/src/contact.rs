//! Contact and clinic-partnership requests from the about and for-clinics pages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::coverage::domain::has_text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactRequestType {
    #[default]
    General,
    Support,
    Demo,
    Partnership,
}

impl ContactRequestType {
    pub const fn label(self) -> &'static str {
        match self {
            ContactRequestType::General => "general",
            ContactRequestType::Support => "support",
            ContactRequestType::Demo => "demo",
            ContactRequestType::Partnership => "partnership",
        }
    }

    pub const fn follow_up(self) -> &'static str {
        match self {
            ContactRequestType::General => "We'll reply within 1 business day.",
            ContactRequestType::Support => "A support specialist will reach out within 1 business day.",
            ContactRequestType::Demo => "Our provider team will contact you to schedule a demo.",
            ContactRequestType::Partnership => {
                "Our partnerships team will contact you about referral setup."
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Clinic or practice name; only expected for demo and partnership requests.
    pub practice: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub request_type: ContactRequestType,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("missing required contact fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ContactError> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if !has_text(value) {
                missing.push(name);
            }
        }
        if matches!(
            self.request_type,
            ContactRequestType::Demo | ContactRequestType::Partnership
        ) && !has_text(&self.practice)
        {
            missing.push("practice");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields(missing))
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactAcknowledgement {
    pub status: &'static str,
    pub request_type: ContactRequestType,
    pub follow_up: &'static str,
    pub received_at: DateTime<Utc>,
}

pub fn contact_router() -> Router {
    Router::new().route("/api/v1/contact", post(contact_handler))
}

pub(crate) async fn contact_handler(Json(request): Json<ContactRequest>) -> Response {
    match request.validate() {
        Ok(()) => {
            info!(
                request_type = request.request_type.label(),
                has_phone = has_text(&request.phone),
                has_practice = has_text(&request.practice),
                "contact request received"
            );
            let ack = ContactAcknowledgement {
                status: "received",
                request_type: request.request_type,
                follow_up: request.request_type.follow_up(),
                received_at: Utc::now(),
            };
            (StatusCode::ACCEPTED, Json(ack)).into_response()
        }
        Err(err) => {
            warn!(
                request_type = request.request_type.label(),
                error = %err,
                "contact request rejected"
            );
            let ContactError::MissingFields(fields) = &err;
            let payload = json!({
                "error": err.to_string(),
                "missing_fields": fields,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn demo_request() -> ContactRequest {
        ContactRequest {
            first_name: Some("Priya".to_string()),
            last_name: Some("Natarajan".to_string()),
            email: Some("front-desk@clinic.test".to_string()),
            practice: Some("Lakeside Endocrinology".to_string()),
            message: Some("Interested in the referral portal".to_string()),
            request_type: ContactRequestType::Demo,
            ..ContactRequest::default()
        }
    }

    #[test]
    fn demo_requests_need_a_practice_name() {
        assert!(demo_request().validate().is_ok());

        let mut request = demo_request();
        request.practice = None;
        request.email = Some(" ".to_string());
        assert_eq!(
            request.validate(),
            Err(ContactError::MissingFields(vec!["email", "practice"]))
        );

        request.request_type = ContactRequestType::General;
        request.email = Some("patient@example.com".to_string());
        assert!(request.validate().is_ok());
    }

    #[tokio::test]
    async fn accepted_requests_return_202() {
        let response = contact_router()
            .oneshot(
                Request::post("/api/v1/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"firstName":"Sam","lastName":"Ortiz","email":"sam@example.com","message":"My G7 sensor stopped reading after two days","type":"support"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let ack: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(ack["status"], "received");
        assert_eq!(ack["request_type"], "support");
    }

    #[tokio::test]
    async fn incomplete_requests_return_422() {
        let response = contact_router()
            .oneshot(
                Request::post("/api/v1/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"type":"partnership"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let payload: Value = serde_json::from_slice(&body).unwrap();
        let missing = payload["missing_fields"].as_array().unwrap();
        assert_eq!(missing.len(), 5);
    }
}
