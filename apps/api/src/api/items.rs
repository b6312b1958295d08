//! Item catalog routes.

use axum::Router;
use domain_items::{PgItemRepository, handlers, service::ItemService};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgItemRepository::new(state.db.clone());
    let service = ItemService::new(repository, state.config.media.clone());
    handlers::router(service)
}
