//! Integration tests for the dashboard route-statistics module.

mod common;

use common::*;
use serde_json::json;

const SESSION: Option<&str> = Some("session_id=test-session");

#[tokio::test]
async fn seeded_routes_are_listed() {
    let app = test_app();

    let response = send(&app, get("/api/dashboard/routes", SESSION)).await;
    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let routes = body["data"].as_array().unwrap();
    assert_eq!(routes.len(), 4);
    let names: Vec<&str> = routes
        .iter()
        .map(|route| route["route"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"North Route A"));
    assert!(names.contains(&"West Route D"));
    assert_eq!(routes[0]["status"], "Active");
    assert!(routes[0]["lastUpdate"].is_string());
}

#[tokio::test]
async fn create_then_delete_roundtrip() {
    let app = test_app();

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/dashboard/routes",
            json!({ "route": "Central Route E", "status": "Active", "vehicles": 7 }),
            SESSION,
        ),
    )
    .await;
    let created = body_json(response).await;
    assert_eq!(created["success"], true);
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let listed = body_json(send(&app, get("/api/dashboard/routes", SESSION)).await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 5);

    let deleted = body_json(
        send(
            &app,
            delete(&format!("/api/dashboard/routes/{id}"), SESSION),
        )
        .await,
    )
    .await;
    assert_eq!(deleted["success"], true);

    let listed = body_json(send(&app, get("/api/dashboard/routes", SESSION)).await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn deleting_unknown_route_reports_not_found() {
    let app = test_app();

    let response = send(&app, delete("/api/dashboard/routes/no-such-id", SESSION)).await;
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn stats_aggregate_the_seeded_routes() {
    let app = test_app();

    let response = send(&app, get("/api/dashboard/stats", SESSION)).await;
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalRoutes"], 4);
    assert_eq!(body["data"]["active"], 2);
    assert_eq!(body["data"]["delayed"], 1);
    assert_eq!(body["data"]["completed"], 1);
    assert_eq!(body["data"]["totalVehicles"], 45);
}
