use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use cgm_care::contact::contact_router;
use cgm_care::content::{content_router, SiteContext};
use cgm_care::coverage::{coverage_router, CoverageService, FallbackStore, SubmissionSink};
use serde_json::json;
use std::sync::Arc;

/// Full application router: coverage intake, contact, content pages, and operational probes.
///
/// The content router is merged last because it owns the 404 fallback.
pub(crate) fn with_site_routes<S, F>(
    service: Arc<CoverageService<S, F>>,
    site: Arc<SiteContext>,
) -> Router
where
    S: SubmissionSink + 'static,
    F: FallbackStore + 'static,
{
    coverage_router(service, Arc::clone(&site))
        .merge(contact_router())
        .merge(content_router(site))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    if ready {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{EndpointSubmissionSink, InMemoryFallbackStore};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use cgm_care::coverage::SubmissionEndpoint;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::{Duration, Instant};
    use tower::ServiceExt;

    fn app(readiness: Arc<AtomicBool>) -> Router {
        app_with_delay(readiness, Duration::ZERO)
    }

    fn app_with_delay(readiness: Arc<AtomicBool>, delay: Duration) -> Router {
        let service = Arc::new(CoverageService::new(
            Arc::new(EndpointSubmissionSink::new(SubmissionEndpoint::new(delay))),
            Arc::new(InMemoryFallbackStore::default()),
            delay,
        ));
        let state = AppState {
            readiness,
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_site_routes(service, Arc::new(SiteContext::default())).layer(Extension(state))
    }

    async fn get_status(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let (status, body) = get_status(app(Arc::new(AtomicBool::new(false))), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let payload: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_tracks_the_bind_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let (status, _) = get_status(app(Arc::clone(&flag)), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        flag.store(true, Ordering::Release);
        let (status, body) = get_status(app(flag), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        let payload: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["status"], "ready");
    }

    #[tokio::test]
    async fn merged_router_serves_pages_wizard_and_404() {
        let flag = Arc::new(AtomicBool::new(true));

        let (status, body) = get_status(app(Arc::clone(&flag)), "/pricing").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("Transparent Pricing"));

        let (status, body) = get_status(app(Arc::clone(&flag)), "/check-coverage").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body)
            .unwrap()
            .contains("Check Coverage - Step 1 of 5"));

        let (status, _) = get_status(app(flag), "/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn submission_endpoint_is_mounted() {
        let response = app(Arc::new(AtomicBool::new(true)))
            .oneshot(
                Request::post("/api/submit-coverage")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"insuranceType":"medicare"}"#))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let payload: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload["success"], true);
        assert_eq!(payload["data"]["insuranceType"], "medicare");
    }

    #[tokio::test]
    async fn completing_the_wizard_waits_for_submission_delay() {
        let delay = Duration::from_millis(40);
        let body = "step=4&action=next&insuranceType=medicare&diabetesType=type2\
                    &currentMonitoring=fingersticks&memberId=1EG4-TE5-MK72\
                    &firstName=Ana&lastName=Reyes&email=ana%40example.com&phone=6025550117\
                    &hipaaConsent=true&tcpaConsent=true&benefitsCheckConsent=true";

        let started = Instant::now();
        let response = app_with_delay(Arc::new(AtomicBool::new(true)), delay)
            .oneshot(
                Request::post("/check-coverage")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert!(started.elapsed() >= delay);
        assert_eq!(response.status(), StatusCode::OK);
        let html = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        assert!(String::from_utf8(html.to_vec())
            .unwrap()
            .contains("You're likely eligible!"));
    }
}
