use crate::cli::ServeArgs;
use crate::infra::{AppState, EndpointSubmissionSink, InMemoryFallbackStore};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cgm_care::config::AppConfig;
use cgm_care::content::SiteContext;
use cgm_care::coverage::{CoverageService, SubmissionEndpoint};
use cgm_care::error::AppError;
use cgm_care::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let endpoint = SubmissionEndpoint::new(config.intake.submission_delay);
    let coverage_service = Arc::new(CoverageService::new(
        Arc::new(EndpointSubmissionSink::new(endpoint)),
        Arc::new(InMemoryFallbackStore::default()),
        config.intake.submission_delay,
    ));
    let site = Arc::new(SiteContext::from_config(&config.site));

    let app = with_site_routes(coverage_service, site)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, site = %config.site.base_url, "coverage site ready");

    axum::serve(listener, app).await?;
    Ok(())
}
