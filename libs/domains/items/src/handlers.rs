use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::errors::responses::InternalServerErrorResponse;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ItemResult;
use crate::models::ItemView;
use crate::repository::ItemRepository;
use crate::service::ItemService;

pub const TAG: &str = "items";

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items),
    components(
        schemas(ItemView, ItemsResponse),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Recyclable-material catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Response envelope for the item catalog
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemsResponse {
    pub items: Vec<ItemView>,
}

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items))
        .with_state(shared_service)
}

/// List the recyclable-material catalog
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Item catalog", body = ItemsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<ItemsResponse>> {
    let items = service.list_items().await?;
    Ok(Json(ItemsResponse { items }))
}
