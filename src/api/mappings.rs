//! Library-book mapping endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        mapping::{CreateMapping, LibraryBook, MappingDetails, MappingQuery, UpdateMapping},
        page::Paginated,
    },
    AppState,
};

/// List mappings with filters and pagination
#[utoipa::path(
    get,
    path = "/library-books",
    tag = "library-books",
    params(
        ("lib_id" = Option<i32>, Query, description = "Filter by library ID"),
        ("book_id" = Option<i32>, Query, description = "Filter by book ID"),
        ("status" = Option<String>, Query, description = "Filter by status (Active/Inactive)"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<i64>, Query, description = "Rows per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated list of mappings", body = Paginated<MappingDetails>),
        (status = 422, description = "Invalid pagination parameters")
    )
)]
pub async fn list_mappings(
    State(state): State<AppState>,
    Query(query): Query<MappingQuery>,
) -> AppResult<Json<Paginated<MappingDetails>>> {
    let page = state.services.mappings.list(&query).await?;
    Ok(Json(page))
}

/// Get mapping by ID
#[utoipa::path(
    get,
    path = "/library-books/{id}",
    tag = "library-books",
    params(
        ("id" = i32, Path, description = "Mapping ID")
    ),
    responses(
        (status = 200, description = "Mapping details", body = LibraryBook),
        (status = 404, description = "Mapping not found")
    )
)]
pub async fn get_mapping(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LibraryBook>> {
    let mapping = state.services.mappings.get_by_id(id).await?;
    Ok(Json(mapping))
}

/// Create a new library-book mapping
#[utoipa::path(
    post,
    path = "/library-books",
    tag = "library-books",
    request_body = CreateMapping,
    responses(
        (status = 201, description = "Mapping created", body = LibraryBook),
        (status = 404, description = "Referenced library or book not found"),
        (status = 409, description = "This library-book pair already exists"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_mapping(
    State(state): State<AppState>,
    Json(mapping): Json<CreateMapping>,
) -> AppResult<(StatusCode, Json<LibraryBook>)> {
    let created = state.services.mappings.create(mapping).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a mapping's status
#[utoipa::path(
    put,
    path = "/library-books/{id}",
    tag = "library-books",
    params(
        ("id" = i32, Path, description = "Mapping ID")
    ),
    request_body = UpdateMapping,
    responses(
        (status = 200, description = "Mapping updated", body = LibraryBook),
        (status = 404, description = "Mapping not found")
    )
)]
pub async fn update_mapping(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(mapping): Json<UpdateMapping>,
) -> AppResult<Json<LibraryBook>> {
    let updated = state.services.mappings.update(id, mapping).await?;
    Ok(Json(updated))
}

/// Delete a mapping
#[utoipa::path(
    delete,
    path = "/library-books/{id}",
    tag = "library-books",
    params(
        ("id" = i32, Path, description = "Mapping ID")
    ),
    responses(
        (status = 204, description = "Mapping deleted"),
        (status = 404, description = "Mapping not found")
    )
)]
pub async fn delete_mapping(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.mappings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
