use cgm_care::coverage::{
    DiabetesType, FallbackError, FallbackStore, InsuranceType, MonitoringMethod,
    SubmissionEndpoint, SubmissionError, SubmissionReceipt, SubmissionSink,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Hands completed forms to the in-process submission endpoint as a serialized request body.
#[derive(Clone)]
pub(crate) struct EndpointSubmissionSink {
    endpoint: SubmissionEndpoint,
    delivered: Arc<Mutex<usize>>,
}

impl SubmissionSink for EndpointSubmissionSink {
    async fn deliver(&self, payload: &Value) -> Result<SubmissionReceipt, SubmissionError> {
        let body = serde_json::to_vec(payload)?;
        // The endpoint answers malformed bodies with its generic failure receipt.
        let receipt = self
            .endpoint
            .receive(&body)
            .await
            .unwrap_or_else(|_| SubmissionReceipt::failed());

        let total = {
            let mut guard = self.delivered.lock().expect("sink mutex poisoned");
            *guard += 1;
            *guard
        };
        debug!(bytes = body.len(), total, "coverage form delivered");
        Ok(receipt)
    }
}

impl EndpointSubmissionSink {
    pub(crate) fn new(endpoint: SubmissionEndpoint) -> Self {
        Self {
            endpoint,
            delivered: Arc::new(Mutex::new(0)),
        }
    }

    pub(crate) fn delivered(&self) -> usize {
        *self.delivered.lock().expect("sink mutex poisoned")
    }
}

/// Process-local key/value store used when delivery fails.
#[derive(Default, Clone)]
pub(crate) struct InMemoryFallbackStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl FallbackStore for InMemoryFallbackStore {
    fn set_item(&self, key: &str, value: String) -> Result<(), FallbackError> {
        let mut guard = self.items.lock().expect("fallback mutex poisoned");
        guard.insert(key.to_string(), value);
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, FallbackError> {
        let guard = self.items.lock().expect("fallback mutex poisoned");
        Ok(guard.get(key).cloned())
    }
}

pub(crate) fn parse_insurance(raw: &str) -> Result<InsuranceType, String> {
    InsuranceType::from_value(raw).ok_or_else(|| {
        format!("unknown insurance type '{raw}' (expected medicare, ppo, or none)")
    })
}

pub(crate) fn parse_diabetes(raw: &str) -> Result<DiabetesType, String> {
    DiabetesType::from_value(raw).ok_or_else(|| {
        format!("unknown diabetes type '{raw}' (expected type1, type2, gestational, or other)")
    })
}

pub(crate) fn parse_monitoring(raw: &str) -> Result<MonitoringMethod, String> {
    MonitoringMethod::from_value(raw).ok_or_else(|| {
        format!("unknown monitoring method '{raw}' (expected fingersticks, cgm, both, or none)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn endpoint_sink_echoes_and_counts_deliveries() {
        let sink = EndpointSubmissionSink::new(SubmissionEndpoint::new(Duration::ZERO));
        let receipt = sink
            .deliver(&json!({ "insuranceType": "ppo" }))
            .await
            .expect("endpoint accepts json");
        assert!(receipt.success);
        assert_eq!(receipt.data, Some(json!({ "insuranceType": "ppo" })));
        assert_eq!(sink.delivered(), 1);
    }

    #[tokio::test]
    async fn endpoint_sink_waits_for_the_endpoint_delay() {
        let sink = EndpointSubmissionSink::new(SubmissionEndpoint::new(Duration::from_millis(30)));
        let started = Instant::now();
        sink.deliver(&json!({ "memberId": "W123" }))
            .await
            .expect("endpoint accepts json");
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn fallback_store_round_trips_values() {
        let store = InMemoryFallbackStore::default();
        store.set_item("coverageFormData", "{}".to_string()).unwrap();
        assert_eq!(
            store.get_item("coverageFormData").unwrap().as_deref(),
            Some("{}")
        );
        assert_eq!(store.get_item("missing").unwrap(), None);
    }

    #[test]
    fn value_parsers_explain_rejections() {
        assert_eq!(parse_insurance("Medicare"), Ok(InsuranceType::Medicare));
        assert!(parse_diabetes("type3").unwrap_err().contains("type3"));
        assert_eq!(parse_monitoring("cgm"), Ok(MonitoringMethod::Cgm));
    }
}
