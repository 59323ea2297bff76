use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::content::SiteContext;
use crate::coverage::domain::{CoverageForm, DiabetesType, InsuranceType, MonitoringMethod};
use crate::coverage::submission::{
    FallbackError, FallbackStore, SubmissionError, SubmissionReceipt, SubmissionSink,
};
use crate::coverage::{coverage_router, CoverageService};

#[derive(Default)]
pub(super) struct MemorySink {
    pub(super) delivered: Mutex<Vec<Value>>,
}

impl SubmissionSink for MemorySink {
    async fn deliver(&self, payload: &Value) -> Result<SubmissionReceipt, SubmissionError> {
        self.delivered
            .lock()
            .expect("sink mutex poisoned")
            .push(payload.clone());
        Ok(SubmissionReceipt::accepted(payload.clone()))
    }
}

pub(super) struct OfflineSink;

impl SubmissionSink for OfflineSink {
    async fn deliver(&self, _payload: &Value) -> Result<SubmissionReceipt, SubmissionError> {
        Err(SubmissionError::Transport("network unreachable".to_string()))
    }
}

pub(super) struct RejectingSink;

impl SubmissionSink for RejectingSink {
    async fn deliver(&self, _payload: &Value) -> Result<SubmissionReceipt, SubmissionError> {
        Ok(SubmissionReceipt::failed())
    }
}

#[derive(Default)]
pub(super) struct MemoryFallback {
    items: Mutex<HashMap<String, String>>,
}

impl FallbackStore for MemoryFallback {
    fn set_item(&self, key: &str, value: String) -> Result<(), FallbackError> {
        self.items
            .lock()
            .expect("fallback mutex poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, FallbackError> {
        Ok(self
            .items
            .lock()
            .expect("fallback mutex poisoned")
            .get(key)
            .cloned())
    }
}

pub(super) struct FullFallback;

impl FallbackStore for FullFallback {
    fn set_item(&self, _key: &str, _value: String) -> Result<(), FallbackError> {
        Err(FallbackError::Unavailable("quota exceeded".to_string()))
    }

    fn get_item(&self, _key: &str) -> Result<Option<String>, FallbackError> {
        Ok(None)
    }
}

pub(super) fn service_with<S, F>(sink: Arc<S>, fallback: Arc<F>) -> CoverageService<S, F>
where
    S: SubmissionSink + 'static,
    F: FallbackStore + 'static,
{
    CoverageService::new(sink, fallback, Duration::ZERO)
}

pub(super) fn build_service() -> (
    CoverageService<MemorySink, MemoryFallback>,
    Arc<MemorySink>,
    Arc<MemoryFallback>,
) {
    let sink = Arc::new(MemorySink::default());
    let fallback = Arc::new(MemoryFallback::default());
    (
        service_with(Arc::clone(&sink), Arc::clone(&fallback)),
        sink,
        fallback,
    )
}

pub(super) fn router_with<S, F>(service: CoverageService<S, F>) -> Router
where
    S: SubmissionSink + 'static,
    F: FallbackStore + 'static,
{
    coverage_router(Arc::new(service), Arc::new(SiteContext::default()))
}

/// A Medicare type 2 patient with every step answered.
pub(super) fn complete_form() -> CoverageForm {
    CoverageForm {
        insurance_type: Some(InsuranceType::Medicare),
        diabetes_type: Some(DiabetesType::Type2),
        current_monitoring: Some(MonitoringMethod::Fingersticks),
        hypoglycemic_events: Some(true),
        insulin_use: Some(false),
        has_doctor: Some(true),
        doctor_name: Some("Dr. Okafor".to_string()),
        doctor_city: Some("Tulsa".to_string()),
        member_id: Some("1EG4-TE5-MK72".to_string()),
        first_name: Some("Morgan".to_string()),
        last_name: Some("Avery".to_string()),
        email: Some("morgan.avery@example.com".to_string()),
        phone: Some("9185550142".to_string()),
        hipaa_consent: Some(true),
        tcpa_consent: Some(true),
        benefits_check_consent: Some(true),
        ..CoverageForm::default()
    }
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_html_body(response: Response) -> String {
    String::from_utf8(read_body(response).await).expect("utf-8 html")
}
