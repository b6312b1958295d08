//! HTTP handler tests for the items API using an in-memory repository.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use core_config::media::MediaConfig;
use domain_items::{
    handlers,
    models::Item,
    repository::InMemoryItemRepository,
    service::ItemService,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_app(items: Vec<Item>) -> Router {
    let repository = InMemoryItemRepository::with_items(items);
    let media = MediaConfig {
        uploads_base_url: "http://localhost:8080/uploads".to_string(),
        ..MediaConfig::default()
    };
    let service = ItemService::new(repository, media);
    handlers::router(service)
}

fn seed_items() -> Vec<Item> {
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

#[tokio::test]
async fn test_list_items_returns_catalog() {
    let app = test_app(seed_items());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Lâmpadas");
    assert_eq!(
        items[0]["image_url"],
        "http://localhost:8080/uploads/lampadas.svg"
    );
    // Raw filename must not leak through the projection
    assert!(items[0].get("image").is_none());
}

#[tokio::test]
async fn test_list_items_empty_catalog() {
    let app = test_app(vec![]);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}
