use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{PointError, PointResult};
use domain_items::models::ItemView;

/// Point entity - a registered collection point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Point {
    /// Unique identifier
    pub id: i32,
    /// Establishment name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact WhatsApp number
    pub whatsapp: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// City name
    pub city: String,
    /// Two-letter state code
    pub uf: String,
    /// Full image URL
    pub image: String,
}

/// Point detail: the point plus the item categories it accepts
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PointDetail {
    pub point: Point,
    pub items: Vec<ItemView>,
}

/// DTO for registering a new collection point
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePoint {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 20))]
    pub whatsapp: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(equal = 2))]
    pub uf: String,
    /// Ids of the item categories this point accepts
    #[serde(default)]
    pub items: Vec<i32>,
}

/// Query filters for point discovery
///
/// `items` arrives as a comma-separated id list ("1,2,6"), matching the
/// query-string convention of the public API.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct PointFilter {
    /// City to match exactly
    pub city: Option<String>,
    /// Two-letter state code to match exactly
    pub uf: Option<String>,
    /// Comma-separated item ids (e.g. "1,2,6")
    pub items: Option<String>,
}

/// Parsed search predicates, ready for the repository
///
/// Built from a [`PointFilter`] by [`SearchCriteria::try_from_filter`].
/// Matching is a union: a point qualifies when it accepts any of the
/// item ids, or sits in the city, or sits in the state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub item_ids: Vec<i32>,
    pub city: Option<String>,
    pub uf: Option<String>,
}

impl SearchCriteria {
    /// Parse a raw query filter into search predicates.
    ///
    /// - absent or empty `items` yields an empty id list, never an error
    /// - a malformed token ("1,abc") is rejected as a validation error
    /// - empty-string `city`/`uf` values drop that predicate entirely
    pub fn try_from_filter(filter: PointFilter) -> PointResult<Self> {
        Ok(Self {
            item_ids: parse_item_ids(filter.items.as_deref())?,
            city: filter.city.filter(|c| !c.is_empty()),
            uf: filter.uf.filter(|u| !u.is_empty()),
        })
    }

    /// True when no predicate was supplied at all
    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty() && self.city.is_none() && self.uf.is_none()
    }
}

/// Parse a comma-separated item id list ("1, 2,6") into ids.
///
/// Absent or blank input is an empty list. Duplicate ids are collapsed.
/// Any token that is not a valid integer rejects the whole list.
pub fn parse_item_ids(raw: Option<&str>) -> PointResult<Vec<i32>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let mut ids = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let id: i32 = token.parse().map_err(|_| {
            PointError::Validation(format!("Invalid item id in filter: '{}'", token))
        })?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Ok(ids)
}
