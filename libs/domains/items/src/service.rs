use core_config::media::MediaConfig;
use std::sync::Arc;

use crate::error::ItemResult;
use crate::models::ItemView;
use crate::repository::ItemRepository;

/// Service layer for the item catalog
///
/// Holds the media configuration so stored icon filenames are projected
/// to absolute URLs exactly once, at the API boundary.
#[derive(Clone)]
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
    media: MediaConfig,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R, media: MediaConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            media,
        }
    }

    /// List the item catalog, projected for API output
    pub async fn list_items(&self) -> ItemResult<Vec<ItemView>> {
        let items = self.repository.list().await?;
        Ok(items
            .iter()
            .map(|item| ItemView::from_item(item, &self.media))
            .collect())
    }
}
