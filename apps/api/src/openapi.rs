use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Recoleta API",
        version = "0.1.0",
        description = "Directory of recyclable-waste collection points: register points and search them by accepted items, city, and state"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/items", api = domain_items::handlers::ApiDoc),
        (path = "/points", api = domain_points::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
