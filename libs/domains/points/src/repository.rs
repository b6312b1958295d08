use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{PointError, PointResult};
use crate::models::{CreatePoint, Point, SearchCriteria};
use domain_items::models::Item;

/// Repository trait for Point persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointRepository: Send + Sync {
    /// Register a point and its item associations atomically.
    ///
    /// `image_url` is the full URL stored on the point row. Fails with
    /// [`PointError::UnknownItem`] when any supplied item id does not
    /// exist, in which case nothing is persisted.
    async fn create(&self, input: CreatePoint, image_url: String) -> PointResult<Point>;

    /// Get a point by ID
    async fn get_by_id(&self, id: i32) -> PointResult<Option<Point>>;

    /// Search points matching any of the supplied predicates, deduplicated
    async fn search(&self, criteria: SearchCriteria) -> PointResult<Vec<Point>>;

    /// Items accepted by a point
    async fn items_for_point(&self, point_id: i32) -> PointResult<Vec<Item>>;
}

/// In-memory implementation of PointRepository (for development/testing)
///
/// Carries its own item catalog so item-id integrity can be enforced
/// the way the foreign keys do in PostgreSQL.
#[derive(Debug, Default, Clone)]
pub struct InMemoryPointRepository {
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    next_id: i32,
    points: HashMap<i32, Point>,
    associations: HashMap<i32, Vec<i32>>,
    catalog: Vec<Item>,
}

impl InMemoryPointRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose integrity checks accept the given catalog
    pub fn with_catalog(catalog: Vec<Item>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                catalog,
                ..State::default()
            })),
        }
    }
}

#[async_trait]
impl PointRepository for InMemoryPointRepository {
    async fn create(&self, input: CreatePoint, image_url: String) -> PointResult<Point> {
        let mut state = self.state.write().await;

        // Same integrity rule the FK enforces in PostgreSQL: reject the
        // whole registration before anything is stored
        for item_id in &input.items {
            if !state.catalog.iter().any(|i| i.id == *item_id) {
                return Err(PointError::UnknownItem);
            }
        }

        state.next_id += 1;
        let point = Point {
            id: state.next_id,
            name: input.name,
            email: input.email,
            whatsapp: input.whatsapp,
            latitude: input.latitude,
            longitude: input.longitude,
            city: input.city,
            uf: input.uf,
            image: image_url,
        };

        state.points.insert(point.id, point.clone());
        state.associations.insert(point.id, input.items);

        tracing::info!(point_id = point.id, "Created point");
        Ok(point)
    }

    async fn get_by_id(&self, id: i32) -> PointResult<Option<Point>> {
        let state = self.state.read().await;
        Ok(state.points.get(&id).cloned())
    }

    async fn search(&self, criteria: SearchCriteria) -> PointResult<Vec<Point>> {
        let state = self.state.read().await;

        let mut result: Vec<Point> = state
            .points
            .values()
            .filter(|p| {
                let accepts_item = criteria.item_ids.iter().any(|id| {
                    state
                        .associations
                        .get(&p.id)
                        .is_some_and(|items| items.contains(id))
                });
                let in_city = criteria.city.as_deref().is_some_and(|c| p.city == c);
                let in_uf = criteria.uf.as_deref().is_some_and(|u| p.uf == u);

                accepts_item || in_city || in_uf
            })
            .cloned()
            .collect();

        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    async fn items_for_point(&self, point_id: i32) -> PointResult<Vec<Item>> {
        let state = self.state.read().await;

        let item_ids = state.associations.get(&point_id).cloned().unwrap_or_default();
        Ok(state
            .catalog
            .iter()
            .filter(|i| item_ids.contains(&i.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn create_input(city: &str, uf: &str, items: Vec<i32>) -> CreatePoint {
        CreatePoint {
            name: "Mercado Central".to_string(),
            email: "contato@mercado.com".to_string(),
            whatsapp: "5511999999999".to_string(),
            latitude: -22.87,
            longitude: -42.34,
            city: city.to_string(),
            uf: uf.to_string(),
            items,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_point() {
        let repo = InMemoryPointRepository::with_catalog(catalog());

        let point = repo
            .create(create_input("Araruama", "RJ", vec![1, 2]), "http://img".to_string())
            .await
            .unwrap();
        assert_eq!(point.image, "http://img");

        let fetched = repo.get_by_id(point.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, point.id);

        let items = repo.items_for_point(point.id).await.unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_create_with_unknown_item_stores_nothing() {
        let repo = InMemoryPointRepository::with_catalog(catalog());

        let result = repo
            .create(create_input("Araruama", "RJ", vec![99]), "http://img".to_string())
            .await;
        assert!(matches!(result, Err(PointError::UnknownItem)));

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
    async fn test_search_is_a_union_of_predicates() {
        let repo = InMemoryPointRepository::with_catalog(catalog());

        let in_city = repo
            .create(create_input("Araruama", "RJ", vec![]), "img".to_string())
            .await
            .unwrap();
        let with_item = repo
            .create(create_input("Niterói", "RJ", vec![1]), "img".to_string())
            .await
            .unwrap();
        repo.create(create_input("Campinas", "SP", vec![2]), "img".to_string())
            .await
            .unwrap();

        let found = repo
            .search(SearchCriteria {
                item_ids: vec![1],
                city: Some("Araruama".to_string()),
                uf: None,
            })
            .await
            .unwrap();

        let ids: Vec<i32> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![in_city.id, with_item.id]);
    }
}
