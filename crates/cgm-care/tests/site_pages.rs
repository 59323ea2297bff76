use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use cgm_care::contact::contact_router;
use cgm_care::content::{content_router, Page, SiteContext};
use serde_json::Value;
use tower::ServiceExt;

fn site_router() -> Router {
    let site = Arc::new(SiteContext::new("https://cgmcare.test"));
    content_router(site).merge(contact_router())
}

async fn read_text(response: Response) -> String {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn every_content_page_is_served() {
    for page in Page::ALL {
        if page == Page::CheckCoverage {
            continue;
        }
        let response = site_router()
            .oneshot(Request::get(page.path()).body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK, "{}", page.path());
        let html = read_text(response).await;
        assert!(html.contains(&format!(
            "<link rel=\"canonical\" href=\"https://cgmcare.test{}\">",
            page.path()
        )));
    }
}

#[tokio::test]
async fn home_page_carries_site_wide_structured_data() {
    let response = site_router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .expect("route executes");

    let html = read_text(response).await;
    assert!(html.contains("\"@type\":\"Organization\""));
    assert!(html.contains("\"@type\":\"MedicalBusiness\""));
    assert!(html.contains("\"@type\":\"FAQPage\""));
    assert!(html.contains("\"@type\":\"SpeakableSpecification\""));
    assert!(html.contains("Get your CGM and diabetic supplies covered by your insurance"));
}

#[tokio::test]
async fn unknown_page_returns_404_html() {
    let response = site_router()
        .oneshot(Request::get("/blog/cgm-tips").body(Body::empty()).unwrap())
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = read_text(response).await;
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn supplies_catalog_reports_plan_coverage() {
    let response = site_router()
        .oneshot(
            Request::get("/api/v1/catalog/supplies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let catalog: Value = serde_json::from_str(&read_text(response).await).unwrap();
    let shoes = &catalog["categories"][0];
    assert_eq!(shoes["name"], "Diabetic Shoes");
    assert_eq!(shoes["coverage"]["prior_auth_required"], true);
    assert_eq!(catalog["coverage_rules"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn faq_endpoint_lists_questions() {
    let response = site_router()
        .oneshot(Request::get("/api/v1/faq").body(Body::empty()).unwrap())
        .await
        .expect("route executes");

    let faq: Value = serde_json::from_str(&read_text(response).await).unwrap();
    assert_eq!(faq[0]["question"], "Do I qualify under Medicare Part B?");
}

#[tokio::test]
async fn contact_route_is_reachable_through_merged_router() {
    let response = site_router()
        .oneshot(
            Request::post("/api/v1/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"type":"demo"}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
