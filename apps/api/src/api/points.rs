//! Collection point routes.

use axum::Router;
use domain_points::{PgPointRepository, handlers, service::PointService};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgPointRepository::new(state.db.clone());
    let service = PointService::new(repository, state.config.media.clone());
    handlers::router(service)
}
