use core_config::media::MediaConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Item entity - a recyclable-material category a point can accept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier
    pub id: i32,
    /// Display title (e.g. "Papéis e Papelão")
    pub title: String,
    /// Icon filename, stored relative to the uploads directory
    pub image: String,
}

/// API projection of an [`Item`] with the icon resolved to a full URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemView {
    pub id: i32,
    pub title: String,
    /// Absolute URL for the item icon
    pub image_url: String,
}

impl ItemView {
    /// Project an item for API output, resolving the stored icon filename
    /// against the configured uploads base URL.
    pub fn from_item(item: &Item, media: &MediaConfig) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            image_url: media.image_url(&item.image),
        }
    }
}
