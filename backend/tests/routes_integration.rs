//! Integration tests for the HTTP router

mod support;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

use spacex_dash::dataset::Dataset;
use spacex_dash::http::dto::{HealthResponse, SelectionResponse, SitesResponse};
use spacex_dash::http::{create_router, AppState};

use support::scenario_records;

/// Helper to create the router over the three-launch scenario
fn create_test_app() -> Router {
    create_router(AppState::new(Arc::new(Dataset::new(scenario_records()))))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let (status, body) = get_json(create_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.records, 3);
}

#[tokio::test]
async fn test_index_serves_dashboard_page() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = create_test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("success-payload-scatter-chart"));
}

#[tokio::test]
async fn test_layout_endpoint() {
    let (status, body) = get_json(create_test_app(), "/v1/layout").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heading"]["text"], "SpaceX Launch Records Dashboard");
    assert_eq!(body["site_dropdown"]["options"][0]["value"], "ALL");
    assert_eq!(body["site_dropdown"]["options"].as_array().unwrap().len(), 3);
    assert!(body["site_dropdown"]["value"].is_null());
    assert_eq!(body["payload_slider"]["max"], 10000.0);
    assert_eq!(body["payload_slider"]["value"], json!([500.0, 3000.0]));
}

#[tokio::test]
async fn test_sites_endpoint() {
    let (status, body) = get_json(create_test_app(), "/v1/sites").await;

    assert_eq!(status, StatusCode::OK);
    let sites: SitesResponse = serde_json::from_value(body).unwrap();
    assert_eq!(sites.sites, vec!["A", "B"]);
    assert_eq!(sites.summaries[0].success_rate, 0.5);
    assert_eq!(sites.summaries[1].success_rate, 1.0);
}

#[tokio::test]
async fn test_pie_chart_all_sites() {
    let (status, body) = get_json(create_test_app(), "/v1/charts/pie?site=ALL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Total Success Launches By Sites");
    assert_eq!(body["slices"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_pie_chart_single_site() {
    let (status, body) = get_json(create_test_app(), "/v1/charts/pie?site=A").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Total Success Launches For Site A");
    assert_eq!(body["slices"][0], json!({"label": "0", "value": 0.5}));
    assert_eq!(body["slices"][1], json!({"label": "1", "value": 0.5}));
}

#[tokio::test]
async fn test_scatter_chart_with_range() {
    let (status, body) = get_json(
        create_test_app(),
        "/v1/charts/scatter?site=ALL&payload_min=500&payload_max=1500",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["point_count"], 2);
    assert_eq!(body["traces"][0]["name"], "v1");
}

#[tokio::test]
async fn test_scatter_chart_defaults_to_initial_range() {
    let (status, body) = get_json(create_test_app(), "/v1/charts/scatter?site=ALL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["point_count"], 3);
}

#[tokio::test]
async fn test_scatter_chart_inverted_range_is_bad_request() {
    let (status, body) = get_json(
        create_test_app(),
        "/v1/charts/scatter?site=ALL&payload_min=2000&payload_max=1000",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_scatter_chart_non_numeric_bound_is_json_bad_request() {
    let (status, body) = get_json(
        create_test_app(),
        "/v1/charts/scatter?site=ALL&payload_min=abc&payload_max=1000",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_output_endpoint_malformed_query_is_json_bad_request() {
    let (status, body) = get_json(
        create_test_app(),
        "/v1/outputs/success-payload-scatter-chart?payload_min=&payload_max=5000",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_output_endpoint() {
    let (status, body) =
        get_json(create_test_app(), "/v1/outputs/success-pie-chart?site=B").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "pie");
    assert_eq!(body["slices"][0], json!({"label": "1", "value": 1.0}));

    let (status, body) = get_json(create_test_app(), "/v1/outputs/nope?site=B").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_selection_dispatch_all_inputs() {
    let request = json!({"site": "ALL", "payload_range": [0, 10000]});
    let (status, body) = post_json(create_test_app(), "/v1/selection", request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let response: SelectionResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.updates.len(), 2);
    assert_eq!(response.updates[0].output_id, "success-pie-chart");
    assert_eq!(
        response.updates[1].figure.as_scatter().unwrap().point_count,
        3
    );
}

#[tokio::test]
async fn test_selection_dispatch_slider_only() {
    let request = json!({
        "site": "A",
        "payload_range": [1000, 2000],
        "changed": ["payload-slider"],
    });
    let (status, body) = post_json(create_test_app(), "/v1/selection", request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let updates = body["updates"].as_array().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0]["output_id"], "success-payload-scatter-chart");
    assert_eq!(updates[0]["figure"]["point_count"], 1);
}

#[tokio::test]
async fn test_selection_unset_site_gives_empty_charts() {
    let request = json!({"site": null, "payload_range": [0, 10000]});
    let (status, body) = post_json(create_test_app(), "/v1/selection", request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updates"][0]["figure"]["slices"], json!([]));
    assert_eq!(body["updates"][1]["figure"]["point_count"], 0);
}

#[tokio::test]
async fn test_selection_invalid_range() {
    let request = json!({"site": "ALL", "payload_range": [-5, 100]});
    let (status, body) = post_json(create_test_app(), "/v1/selection", request.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["details"].as_str().unwrap().contains("non-negative"));
}

#[tokio::test]
async fn test_selection_malformed_body() {
    let (status, body) =
        post_json(create_test_app(), "/v1/selection", "{\"site\": 1}".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
