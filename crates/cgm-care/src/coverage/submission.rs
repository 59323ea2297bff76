use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// Local storage key the unsent form is parked under when delivery fails.
pub const FALLBACK_STORAGE_KEY: &str = "coverageFormData";

pub const SUBMISSION_ACCEPTED_MESSAGE: &str = "Form submitted successfully";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to submit form";

/// Body returned by the submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl SubmissionReceipt {
    pub fn accepted(data: Value) -> Self {
        Self {
            success: true,
            message: SUBMISSION_ACCEPTED_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: SUBMISSION_FAILED_MESSAGE.to_string(),
            data: None,
        }
    }
}

/// Outbound delivery of a completed form (the submission endpoint or a stand-in).
pub trait SubmissionSink: Send + Sync {
    fn deliver(
        &self,
        payload: &Value,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmissionError>> + Send;
}

/// Server side of `POST /api/submit-coverage`: no validation, no persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionEndpoint {
    processing_delay: Duration,
}

impl SubmissionEndpoint {
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Parse the raw body, log its shape, wait out the processing delay, and echo it back.
    pub async fn receive(&self, body: &[u8]) -> Result<SubmissionReceipt, serde_json::Error> {
        let payload: Value = serde_json::from_slice(body)?;
        let (size, keys) = payload_shape(&payload);
        info!(bytes = size, fields = ?keys, "coverage form submission received");

        if !self.processing_delay.is_zero() {
            tokio::time::sleep(self.processing_delay).await;
        }

        Ok(SubmissionReceipt::accepted(payload))
    }
}

/// Key/value store the client falls back to when delivery fails.
pub trait FallbackStore: Send + Sync {
    fn set_item(&self, key: &str, value: String) -> Result<(), FallbackError>;
    fn get_item(&self, key: &str) -> Result<Option<String>, FallbackError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission transport unavailable: {0}")]
    Transport(String),
    #[error("submission payload could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum FallbackError {
    #[error("fallback storage unavailable: {0}")]
    Unavailable(String),
}

/// What happened to the payload after the wizard completed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Delivered { receipt: SubmissionReceipt },
    /// The endpoint answered but did not accept the form; nothing is stored locally.
    Rejected { message: String },
    StoredLocally { key: &'static str },
    Dropped { reason: String },
}

impl DeliveryOutcome {
    pub fn status_label(&self) -> &'static str {
        match self {
            DeliveryOutcome::Delivered { .. } => "delivered",
            DeliveryOutcome::Rejected { .. } => "rejected",
            DeliveryOutcome::StoredLocally { .. } => "stored_locally",
            DeliveryOutcome::Dropped { .. } => "dropped",
        }
    }
}

/// Summarize a posted payload without echoing contact details into the logs.
pub fn payload_shape(payload: &Value) -> (usize, Vec<String>) {
    let keys = match payload {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };
    let size = serde_json::to_vec(payload)
        .map(|bytes| bytes.len())
        .unwrap_or_default();
    (size, keys)
}
