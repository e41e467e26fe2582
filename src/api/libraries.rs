//! Library endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        library::{CreateLibrary, Library, LibraryQuery, UpdateLibrary},
        mapping::{BookInLibrary, JoinedQuery},
        page::Paginated,
    },
    AppState,
};

/// List libraries with filters and pagination
#[utoipa::path(
    get,
    path = "/libraries",
    tag = "libraries",
    params(
        ("status" = Option<String>, Query, description = "Filter by status (Active/Inactive)"),
        ("dept" = Option<String>, Query, description = "Filter by department"),
        ("search" = Option<String>, Query, description = "Search in name and department"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<i64>, Query, description = "Rows per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated list of libraries", body = Paginated<Library>),
        (status = 422, description = "Invalid pagination parameters")
    )
)]
pub async fn list_libraries(
    State(state): State<AppState>,
    Query(query): Query<LibraryQuery>,
) -> AppResult<Json<Paginated<Library>>> {
    let page = state.services.libraries.list(&query).await?;
    Ok(Json(page))
}

/// Get library by ID
#[utoipa::path(
    get,
    path = "/libraries/{id}",
    tag = "libraries",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    responses(
        (status = 200, description = "Library details", body = Library),
        (status = 404, description = "Library not found")
    )
)]
pub async fn get_library(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.get_by_id(id).await?;
    Ok(Json(library))
}

/// Create a new library
#[utoipa::path(
    post,
    path = "/libraries",
    tag = "libraries",
    request_body = CreateLibrary,
    responses(
        (status = 201, description = "Library created", body = Library),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_library(
    State(state): State<AppState>,
    Json(library): Json<CreateLibrary>,
) -> AppResult<(StatusCode, Json<Library>)> {
    let created = state.services.libraries.create(library).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing library (partial update)
#[utoipa::path(
    put,
    path = "/libraries/{id}",
    tag = "libraries",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    request_body = UpdateLibrary,
    responses(
        (status = 200, description = "Library updated", body = Library),
        (status = 404, description = "Library not found"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn update_library(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(library): Json<UpdateLibrary>,
) -> AppResult<Json<Library>> {
    let updated = state.services.libraries.update(id, library).await?;
    Ok(Json(updated))
}

/// Delete a library and all its book mappings
#[utoipa::path(
    delete,
    path = "/libraries/{id}",
    tag = "libraries",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    responses(
        (status = 204, description = "Library deleted"),
        (status = 404, description = "Library not found")
    )
)]
pub async fn delete_library(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.libraries.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Recompute a library's book count from its Active mappings
#[utoipa::path(
    post,
    path = "/libraries/{id}/refresh-count",
    tag = "libraries",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    responses(
        (status = 200, description = "Library with refreshed count", body = Library),
        (status = 404, description = "Library not found")
    )
)]
pub async fn refresh_library_count(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.refresh_count(id).await?;
    Ok(Json(library))
}

/// List books held by a library
#[utoipa::path(
    get,
    path = "/libraries/{id}/books",
    tag = "libraries",
    params(
        ("id" = i32, Path, description = "Library ID"),
        ("status" = Option<String>, Query, description = "Filter by mapping status (default: all)"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<i64>, Query, description = "Rows per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated list of books in the library", body = Paginated<BookInLibrary>),
        (status = 404, description = "Library not found")
    )
)]
pub async fn list_library_books(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<JoinedQuery>,
) -> AppResult<Json<Paginated<BookInLibrary>>> {
    let page = state.services.libraries.books_in_library(id, &query).await?;
    Ok(Json(page))
}
