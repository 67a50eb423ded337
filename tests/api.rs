//! Integration tests for the VanScout JSON API

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::Value;
use tower::ServiceExt;

use vanscout::Catalog;
use vanscout::api::AppState;
use vanscout::config::DefaultsConfig;
use vanscout::web;

#[fixture]
fn app() -> Router {
    web::app(AppState {
        catalog: Catalog::embedded().expect("embedded catalog loads"),
        defaults: DefaultsConfig::default(),
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ids(values: &Value) -> Vec<&str> {
    values
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect()
}

#[rstest]
#[tokio::test]
async fn test_search_returns_available_vans(app: Router) {
    let (status, body) = get(
        app,
        "/api/search?location=bordeaux&startDate=2026-07-10&endDate=2026-07-20",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["locationName"], "Bordeaux");
    assert_eq!(body["durationDays"], 10);
    assert_eq!(body["estimatedCost"], 850);
    assert_eq!(ids(&body["vehicles"]), vec!["van1", "van7"]);
    assert_eq!(body["vehicles"][0]["totalPrice"], 950);
    assert_eq!(body["vehicles"][1]["pricePerDay"], 130);
}

#[rstest]
#[tokio::test]
async fn test_search_outside_windows_is_empty(app: Router) {
    let (status, body) = get(
        app,
        "/api/search?location=lyon&startDate=2026-01-05&endDate=2026-01-10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // van4 only opens mid-June in 2026
    assert_eq!(ids(&body["vehicles"]), vec!["van10"]);
}

#[rstest]
#[case("/api/search?location=paris&startDate=2026-07-10")]
#[case("/api/search?startDate=2026-07-10&endDate=2026-07-20")]
#[case("/api/search?location=paris&startDate=2026-07-20&endDate=2026-07-10")]
#[case("/api/search?location=paris&startDate=10/07/2026&endDate=2026-07-20")]
#[tokio::test]
async fn test_search_rejects_bad_input(app: Router, #[case] uri: &str) {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[rstest]
#[tokio::test]
async fn test_get_van(app: Router) {
    let (status, body) = get(app.clone(), "/api/vans/van3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Volkswagen California");
    assert_eq!(body["location"], "paris");

    let (status, body) = get(app, "/api/vans/van99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("van99"));
}

#[rstest]
#[tokio::test]
async fn test_popular_vans(app: Router) {
    let (status, body) = get(app.clone(), "/api/vans/popular").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["van7", "van10", "van1"]);

    let (_, body) = get(app, "/api/vans/popular?limit=1").await;
    assert_eq!(ids(&body), vec!["van7"]);
}

#[rstest]
#[case("/api/vans", 10)]
#[case("/api/vans?location=marseille", 2)]
#[case("/api/vans?price=0-90", 4)]
#[case("/api/vans?sleeps=6", 2)]
#[case("/api/vans?q=&location=&price=&sleeps=", 10)]
#[tokio::test]
async fn test_list_vans_filters(app: Router, #[case] uri: &str, #[case] expected: usize) {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), expected);
}

#[rstest]
#[tokio::test]
async fn test_list_vans_rejects_bad_price(app: Router) {
    let (status, _) = get(app, "/api/vans?price=cheap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn test_locations(app: Router) {
    let (status, body) = get(app.clone(), "/api/locations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(body[0]["vanCount"], 12);

    let (_, body) = get(app, "/api/locations?q=occitanie").await;
    assert_eq!(ids(&body), vec!["toulouse"]);
}

#[rstest]
#[tokio::test]
async fn test_calendar_month(app: Router) {
    let (status, body) = get(app.clone(), "/api/calendar/2026/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Avril 2026");
    let cells = body["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 42);
    assert_eq!(cells[0]["date"], "2026-03-29");
    assert_eq!(cells[0]["isCurrentMonth"], false);
    assert_eq!(cells[3]["date"], "2026-04-01");

    let (status, _) = get(app, "/api/calendar/2026/13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[case("/api/vans/popular?limit=abc")]
#[case("/api/vans/popular?limit=-1")]
#[case("/api/calendar/abc/4")]
#[case("/api/calendar/2026/99999999999")]
#[case("/api/vans?sleeps=4&sleeps=5")]
#[tokio::test]
async fn test_malformed_parameters_get_json_errors(app: Router, #[case] uri: &str) {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{uri}: {body}");
}

#[rstest]
#[tokio::test]
async fn test_stats(app: Router) {
    let (status, body) = get(app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicleCount"], 10);
    assert_eq!(body["totalReviews"], 819);
    let average = body["averageRating"].as_f64().unwrap();
    assert!((average - 4.64).abs() < 1e-9);
}
