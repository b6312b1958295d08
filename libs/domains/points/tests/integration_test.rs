//! Integration tests for the points repository against real PostgreSQL.
//!
//! Uses testcontainers with the full migration set applied, so the item
//! catalog seed and the foreign keys behave exactly as in production.

use domain_points::{
    CreatePoint, PgPointRepository, PointError, SearchCriteria,
    repository::PointRepository,
};
use test_utils::TestDatabase;

fn sample_point(name: &str, city: &str, uf: &str, items: Vec<i32>) -> CreatePoint {
    CreatePoint {
        name: name.to_string(),
        email: "contato@mercado.com".to_string(),
        whatsapp: "5511999999999".to_string(),
        latitude: -22.87,
        longitude: -42.34,
        city: city.to_string(),
        uf: uf.to_string(),
        items,
    }
}

const PLACEHOLDER: &str = "https://images.example.com/placeholder.jpg";

#[tokio::test]
async fn test_create_point_persists_associations() {
    let db = TestDatabase::new().await;
    let repo = PgPointRepository::new(db.connection());

    let point = repo
        .create(
            sample_point("Mercado Central", "Araruama", "RJ", vec![1, 2]),
            PLACEHOLDER.to_string(),
        )
        .await
        .unwrap();

    assert!(point.id >= 1);
    assert_eq!(point.image, PLACEHOLDER);

    let items = repo.items_for_point(point.id).await.unwrap();
    assert_eq!(items.len(), 2);
    // Seeded catalog titles
    assert_eq!(items[0].title, "Lâmpadas");
    assert_eq!(items[1].title, "Pilhas e Baterias");
}

#[tokio::test]
async fn test_create_point_unknown_item_rolls_back() {
    let db = TestDatabase::new().await;
    let repo = PgPointRepository::new(db.connection());

    let result = repo
        .create(
            sample_point("Mercado Central", "Araruama", "RJ", vec![1, 999]),
            PLACEHOLDER.to_string(),
        )
        .await;

    assert!(matches!(result, Err(PointError::UnknownItem)));

    // The point row was rolled back with the associations
    let found = repo
        .search(SearchCriteria {
            city: Some("Araruama".to_string()),
            ..SearchCriteria::default()
        })
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_create_point_collapses_duplicate_items() {
    let db = TestDatabase::new().await;
    let repo = PgPointRepository::new(db.connection());

    let point = repo
        .create(
            sample_point("Mercado Central", "Araruama", "RJ", vec![1, 1, 2]),
            PLACEHOLDER.to_string(),
        )
        .await
        .unwrap();

    let items = repo.items_for_point(point.id).await.unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_search_is_a_union_of_predicates() {
    let db = TestDatabase::new().await;
    let repo = PgPointRepository::new(db.connection());

    let in_city = repo
        .create(
            sample_point("Ponto A", "Araruama", "RJ", vec![1]),
            PLACEHOLDER.to_string(),
        )
        .await
        .unwrap();
    let by_item = repo
        .create(
            sample_point("Ponto B", "Niterói", "RJ", vec![3]),
            PLACEHOLDER.to_string(),
        )
        .await
        .unwrap();
    repo.create(
        sample_point("Ponto C", "Curitiba", "PR", vec![2]),
        PLACEHOLDER.to_string(),
    )
    .await
    .unwrap();

    // City OR item: Ponto A by city, Ponto B by item 3
    let found = repo
        .search(SearchCriteria {
            item_ids: vec![3],
            city: Some("Araruama".to_string()),
            uf: None,
        })
        .await
        .unwrap();

    let ids: Vec<i32> = found.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![in_city.id, by_item.id]);
}

#[tokio::test]
async fn test_search_unmatched_item_filter_still_matches_city() {
    let db = TestDatabase::new().await;
    let repo = PgPointRepository::new(db.connection());

    let in_city = repo
        .create(
            sample_point("Ponto A", "Diamantina", "MG", vec![1]),
            PLACEHOLDER.to_string(),
        )
        .await
        .unwrap();
    repo.create(
        sample_point("Ponto B", "Curitiba", "PR", vec![2]),
        PLACEHOLDER.to_string(),
    )
    .await
    .unwrap();

    // Item 99 is associated to no point, so the item branch of the
    // union contributes nothing; the city matches still come back
    let found = repo
        .search(SearchCriteria {
            item_ids: vec![99],
            city: Some("Diamantina".to_string()),
            uf: None,
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, in_city.id);
}

#[tokio::test]
async fn test_search_deduplicates_points_matching_multiple_items() {
    let db = TestDatabase::new().await;
    let repo = PgPointRepository::new(db.connection());

    let point = repo
        .create(
            sample_point("Mercado Central", "Araruama", "RJ", vec![1, 2]),
            PLACEHOLDER.to_string(),
        )
        .await
        .unwrap();

    // Matches through both associations, must come back once
    let found = repo
        .search(SearchCriteria {
            item_ids: vec![1, 2],
            city: None,
            uf: None,
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, point.id);
}

#[tokio::test]
async fn test_search_without_predicates_matches_nothing() {
    let db = TestDatabase::new().await;
    let repo = PgPointRepository::new(db.connection());

    repo.create(
        sample_point("Mercado Central", "Araruama", "RJ", vec![1]),
        PLACEHOLDER.to_string(),
    )
    .await
    .unwrap();

    let found = repo.search(SearchCriteria::default()).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_get_by_id_unknown_returns_none() {
    let db = TestDatabase::new().await;
    let repo = PgPointRepository::new(db.connection());

    assert!(repo.get_by_id(999).await.unwrap().is_none());
}
