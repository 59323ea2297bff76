use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::catalog::{
    find_device, CgmDevice, FaqEntry, PlanCoverageRules, PriceListGroup, SupplyCategory, CGM_DEVICES, FAQ,
    PLAN_COVERAGE_RULES, SUPPLY_CATEGORIES, SUPPLY_PRICE_LIST,
};
use super::pages::{render_not_found, Page};
use super::SiteContext;

#[derive(Debug, Serialize)]
pub struct SuppliesCatalog {
    pub categories: &'static [SupplyCategory],
    pub coverage_rules: &'static [PlanCoverageRules],
    pub price_list: &'static [PriceListGroup],
}

/// Router serving the content pages, the read-only catalog API, and the 404 page.
///
/// `/check-coverage` is left to the coverage router. This router owns the fallback, so it must be
/// the only merged router that sets one.
pub fn content_router(site: Arc<SiteContext>) -> Router {
    let mut router: Router<Arc<SiteContext>> = Router::new();
    for page in Page::ALL {
        if page == Page::CheckCoverage {
            continue;
        }
        router = router.route(
            page.path(),
            get(move |State(site): State<Arc<SiteContext>>| async move {
                Html(page.render(&site))
            }),
        );
    }

    router
        .route("/api/v1/catalog/devices", get(devices_handler))
        .route("/api/v1/catalog/devices/:key", get(device_handler))
        .route("/api/v1/catalog/supplies", get(supplies_handler))
        .route("/api/v1/faq", get(faq_handler))
        .fallback(not_found_handler)
        .with_state(site)
}

async fn devices_handler() -> Json<&'static [CgmDevice]> {
    Json(CGM_DEVICES)
}

async fn device_handler(Path(key): Path<String>) -> Response {
    match find_device(&key) {
        Some(device) => Json(device).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no device '{key}' in the catalog") })),
        )
            .into_response(),
    }
}

async fn supplies_handler() -> Json<SuppliesCatalog> {
    Json(SuppliesCatalog {
        categories: SUPPLY_CATEGORIES,
        coverage_rules: PLAN_COVERAGE_RULES,
        price_list: SUPPLY_PRICE_LIST,
    })
}

async fn faq_handler() -> Json<&'static [FaqEntry]> {
    Json(FAQ)
}

async fn not_found_handler(State(site): State<Arc<SiteContext>>, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(&site, uri.path())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        content_router(Arc::new(SiteContext::default()))
    }

    #[tokio::test]
    async fn serves_content_pages() {
        let response = router()
            .oneshot(Request::get("/how-it-works").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<title>How It Works | CGM Care</title>"));
    }

    #[tokio::test]
    async fn unknown_paths_render_not_found() {
        let response = router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn device_catalog_lists_cash_prices() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/catalog/devices")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let devices: Value = serde_json::from_slice(&body).unwrap();
        let devices = devices.as_array().expect("array of devices");
        assert_eq!(devices.len(), CGM_DEVICES.len());
        assert_eq!(devices[0]["name"], "Dexcom G7");
        assert_eq!(devices[0]["price_cents"], 29_900);
    }

    #[tokio::test]
    async fn single_device_lookup_by_key() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/catalog/devices/dexcom-g7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let device: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(device["name"], "Dexcom G7");
        assert_eq!(device["monthly_cents"], 8_900);

        let response = router()
            .oneshot(
                Request::get("/api/v1/catalog/devices/omnipod-5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let payload: Value = serde_json::from_slice(&body).unwrap();
        assert!(payload["error"].as_str().unwrap().contains("omnipod-5"));
    }
}
