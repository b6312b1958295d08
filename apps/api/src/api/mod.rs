use axum::Router;

pub mod health;
pub mod items;
pub mod points;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Sub-routers have their state applied already, so the composed router
/// is stateless.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .nest("/points", points::router(state))
}

/// Creates a router with the /ready endpoint backed by a real database ping.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
