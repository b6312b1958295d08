//! Handler tests for the points API using an in-memory repository.
//!
//! These verify request deserialization, response shape, and status
//! codes without a database.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use core_config::media::MediaConfig;
use domain_points::{
    handlers,
    repository::InMemoryPointRepository,
    service::PointService,
};
use domain_items::models::Item;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

fn catalog() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            title: "Lâmpadas".to_string(),
            image: "lampadas.svg".to_string(),
        },
        Item {
            id: 2,
            title: "Pilhas e Baterias".to_string(),
            image: "baterias.svg".to_string(),
        },
    ]
}

fn test_app() -> Router {
    let repository = InMemoryPointRepository::with_catalog(catalog());
    let media = MediaConfig {
        uploads_base_url: "http://localhost:8080/uploads".to_string(),
        default_point_image: "https://images.example.com/placeholder.jpg".to_string(),
        ..MediaConfig::default()
    };
    let service = PointService::new(repository, media);
    handlers::router(service)
}

fn create_body(items: &[i32]) -> Body {
    Body::from(
        serde_json::to_string(&json!({
            "name": "Mercado Central",
            "email": "contato@mercado.com",
            "whatsapp": "5511999999999",
            "latitude": -22.87,
            "longitude": -42.34,
            "city": "Araruama",
            "uf": "RJ",
            "items": items
        }))
        .unwrap(),
    )
}

async fn json_body(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_point_returns_201_with_placeholder_image() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(create_body(&[1, 2]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let point = json_body(response.into_body()).await;
    assert_eq!(point["name"], "Mercado Central");
    assert_eq!(point["image"], "https://images.example.com/placeholder.jpg");
    assert!(point["id"].as_i64().unwrap() >= 1);
}

#[tokio::test]
async fn test_create_point_unknown_item_returns_400() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(create_body(&[1, 999]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = json_body(response.into_body()).await;
    assert_eq!(error["error"], "UNKNOWN_REFERENCE");

    // Nothing was stored: the city filter finds no point
    let response = app
        .oneshot(
            Request::builder()
                .uri("/?city=Araruama")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "No points were found with this filter");
}

#[tokio::test]
async fn test_create_point_invalid_email_returns_400() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({
                        "name": "Mercado Central",
                        "email": "not-an-email",
                        "whatsapp": "5511999999999",
                        "latitude": -22.87,
                        "longitude": -42.34,
                        "city": "Araruama",
                        "uf": "RJ",
                        "items": [1]
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = json_body(response.into_body()).await;
    assert_eq!(error["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_search_points_matches_city() {
    let app = test_app();

    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(create_body(&[1]))
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?city=Araruama&uf=RJ")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["city"], "Araruama");
}

#[tokio::test]
async fn test_search_points_unmatched_item_filter_still_matches_city() {
    let app = test_app();

    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(create_body(&[1]))
                .unwrap(),
        )
        .await
        .unwrap();

    // Item 99 belongs to no point; the city predicate still matches
    let response = app
        .oneshot(
            Request::builder()
                .uri("/?city=Araruama&items=99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["city"], "Araruama");
}

#[tokio::test]
async fn test_search_points_without_filters_returns_message() {
    let app = test_app();

    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(create_body(&[1]))
                .unwrap(),
        )
        .await
        .unwrap();

    // No filter matches nothing, even with points registered
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "No points were found with this filter");
    assert!(body.get("points").is_none());
}

#[tokio::test]
async fn test_search_points_malformed_items_returns_400() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?items=1,abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_point_detail() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(create_body(&[1, 2]))
                .unwrap(),
        )
        .await
        .unwrap();

    let created = json_body(response.into_body()).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let detail = json_body(response.into_body()).await;
    assert_eq!(detail["point"]["id"].as_i64().unwrap(), id);

    let items = detail["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0]["image_url"],
        "http://localhost:8080/uploads/lampadas.svg"
    );
}

#[tokio::test]
async fn test_get_point_unknown_id_returns_404() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_point_malformed_id_returns_400() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = json_body(response.into_body()).await;
    assert_eq!(error["error"], "INVALID_ID");
    assert_eq!(error["code"], 1002);
}
