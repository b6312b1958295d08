use core_config::media::MediaConfig;
use std::sync::Arc;
use validator::Validate;

use crate::error::{PointError, PointResult};
use crate::models::{CreatePoint, Point, PointDetail, PointFilter, SearchCriteria};
use crate::repository::PointRepository;
use domain_items::models::ItemView;

/// Service layer for Point business logic
#[derive(Clone)]
pub struct PointService<R: PointRepository> {
    repository: Arc<R>,
    media: MediaConfig,
}

impl<R: PointRepository> PointService<R> {
    pub fn new(repository: R, media: MediaConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            media,
        }
    }

    /// Register a new collection point with its accepted items.
    ///
    /// The stored image is the configured placeholder URL; there is no
    /// upload pipeline.
    pub async fn register_point(&self, input: CreatePoint) -> PointResult<Point> {
        input
            .validate()
            .map_err(|e| PointError::Validation(e.to_string()))?;

        self.repository
            .create(input, self.media.default_point_image.clone())
            .await
    }

    /// Search points by accepted items, city, and state (union semantics)
    pub async fn search_points(&self, filter: PointFilter) -> PointResult<Vec<Point>> {
        let criteria = SearchCriteria::try_from_filter(filter)?;
        self.repository.search(criteria).await
    }

    /// Get a point with the item categories it accepts
    pub async fn get_point_detail(&self, id: i32) -> PointResult<PointDetail> {
        let point = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(PointError::NotFound(id))?;

        let items = self.repository.items_for_point(id).await?;

        Ok(PointDetail {
            point,
            items: items
                .iter()
                .map(|item| ItemView::from_item(item, &self.media))
                .collect(),
        })
    }
}
