//! Example Handlers
//!
//! HTTP handlers for example CRUD operations. Each handler follows the same
//! shape: parse, validate, delegate to the service, render through the
//! response envelope.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::example::ExampleId;
use crate::infrastructure::driving_adapters::api_rest::dto::example::{
    CreateExampleDto, ExampleResponseDto, UpdateExampleDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;
use crate::shared::response::ApiSuccess;

/// Default page size when `limit` is absent or zero
const DEFAULT_LIST_LIMIT: u64 = 10;

/// Create the router for example endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_example))
        .route("/", get(list_examples))
        .route("/{id}", get(get_example_by_id))
        .route("/{id}", put(update_example))
        .route("/{id}", delete(delete_example))
}

/// POST /examples - Create a new example
///
/// # Responses
///
/// * 201 Created - Example created successfully
/// * 400 Bad Request - Malformed body or validation error
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn create_example(
    State(state): State<AppState>,
    payload: Result<Json<CreateExampleDto>, JsonRejection>,
) -> Result<ApiSuccess<ExampleResponseDto>, ApiError> {
    let Json(dto) = payload?;

    dto.validate()?;

    let example = state.example_service.create(dto.into()).await?;

    Ok(ApiSuccess::created(ExampleResponseDto::from(example)))
}

/// Pagination query parameters
#[derive(Debug, Deserialize)]
struct ListQuery {
    limit: Option<u64>,
    offset: Option<u64>,
}

/// GET /examples - List examples
///
/// `limit` defaults to 10 when absent or zero, `offset` to 0. No upper bound
/// is enforced.
///
/// # Responses
///
/// * 200 OK - Array of examples (possibly empty)
/// * 400 Bad Request - Malformed pagination parameters
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn list_examples(
    State(state): State<AppState>,
    params: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ApiSuccess<Vec<ExampleResponseDto>>, ApiError> {
    let Query(query) = params?;

    let limit = match query.limit {
        None | Some(0) => DEFAULT_LIST_LIMIT,
        Some(limit) => limit,
    };
    let offset = query.offset.unwrap_or(0);

    let examples = state.example_service.list(limit, offset).await?;

    let response: Vec<ExampleResponseDto> =
        examples.into_iter().map(ExampleResponseDto::from).collect();
    Ok(ApiSuccess::ok(response))
}

/// GET /examples/:id - Get an example by ID
///
/// # Responses
///
/// * 200 OK - Example found
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Example does not exist
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn get_example_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<ExampleResponseDto>, ApiError> {
    let uuid = Uuid::parse_str(&id)?;
    let example_id = ExampleId::from_uuid(uuid);

    let example = state.example_service.get_by_id(&example_id).await?;

    Ok(ApiSuccess::ok(ExampleResponseDto::from(example)))
}

/// PUT /examples/:id - Partially update an example
///
/// Only fields present in the body are written; an empty body still bumps
/// `updated_at`.
///
/// # Responses
///
/// * 200 OK - Example updated successfully
/// * 400 Bad Request - Malformed UUID or body
/// * 404 Not Found - Example does not exist
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn update_example(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateExampleDto>, JsonRejection>,
) -> Result<ApiSuccess<ExampleResponseDto>, ApiError> {
    let uuid = Uuid::parse_str(&id)?;
    let example_id = ExampleId::from_uuid(uuid);

    let Json(dto) = payload?;

    let example = state
        .example_service
        .update(&example_id, dto.into())
        .await?;

    Ok(ApiSuccess::ok(ExampleResponseDto::from(example)))
}

/// DELETE /examples/:id - Delete an example
///
/// # Responses
///
/// * 200 OK - Example deleted (empty data)
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Example does not exist
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn delete_example(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let uuid = Uuid::parse_str(&id)?;
    let example_id = ExampleId::from_uuid(uuid);

    state.example_service.delete(&example_id).await?;

    Ok(ApiSuccess::ok(()).with_message("example deleted"))
}
