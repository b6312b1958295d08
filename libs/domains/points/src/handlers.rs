use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use axum_helpers::errors::responses::{
    BadRequestIdResponse, BadRequestReferenceResponse, BadRequestValidationResponse,
    InternalServerErrorResponse, NotFoundResponse,
};
use axum_helpers::extractors::{IdPath, ValidatedJson};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::PointResult;
use crate::models::{CreatePoint, Point, PointDetail, PointFilter};
use crate::repository::PointRepository;
use crate::service::PointService;

pub const TAG: &str = "points";

/// OpenAPI documentation for the Points API
#[derive(OpenApi)]
#[openapi(
    paths(search_points, get_point, create_point),
    components(
        schemas(Point, PointDetail, CreatePoint, PointFilter, SearchPointsResponse),
        responses(
            BadRequestIdResponse,
            BadRequestReferenceResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse,
            NotFoundResponse
        )
    ),
    tags(
        (name = TAG, description = "Collection point registration and discovery")
    )
)]
pub struct ApiDoc;

/// Search response: the matching points, or a human-readable message
/// when the filter matched nothing
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SearchPointsResponse {
    Found { points: Vec<Point> },
    Empty { message: String },
}

/// Create the points router with all HTTP endpoints
pub fn router<R: PointRepository + 'static>(service: PointService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(search_points).post(create_point))
        .route("/{id}", get(get_point))
        .with_state(shared_service)
}

/// Search collection points by accepted items, city, and state
///
/// Filters combine as a union: a point matches when it accepts any of
/// the requested item ids, or is in the requested city, or is in the
/// requested state. Results are deduplicated by point id.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PointFilter),
    responses(
        (status = 200, description = "Matching points, or a no-results message", body = SearchPointsResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_points<R: PointRepository>(
    State(service): State<Arc<PointService<R>>>,
    Query(filter): Query<PointFilter>,
) -> PointResult<Json<SearchPointsResponse>> {
    let points = service.search_points(filter).await?;

    let response = if points.is_empty() {
        SearchPointsResponse::Empty {
            message: "No points were found with this filter".to_string(),
        }
    } else {
        SearchPointsResponse::Found { points }
    };

    Ok(Json(response))
}

/// Get a collection point with the item categories it accepts
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Point id")
    ),
    responses(
        (status = 200, description = "Point detail", body = PointDetail),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_point<R: PointRepository>(
    State(service): State<Arc<PointService<R>>>,
    IdPath(id): IdPath,
) -> PointResult<Json<PointDetail>> {
    let detail = service.get_point_detail(id).await?;
    Ok(Json(detail))
}

/// Register a new collection point
///
/// Creates the point and its item associations in one transaction. An
/// unknown item id fails the whole request; nothing is stored.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreatePoint,
    responses(
        (status = 201, description = "Point created", body = Point),
        (status = 400, response = BadRequestReferenceResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_point<R: PointRepository>(
    State(service): State<Arc<PointService<R>>>,
    ValidatedJson(input): ValidatedJson<CreatePoint>,
) -> PointResult<(StatusCode, Json<Point>)> {
    let point = service.register_point(input).await?;
    Ok((StatusCode::CREATED, Json(point)))
}
