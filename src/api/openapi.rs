//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, libraries, mappings};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "1.0.0",
        description = "Library and Book Mapping Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Libraries
        libraries::list_libraries,
        libraries::get_library,
        libraries::create_library,
        libraries::update_library,
        libraries::delete_library,
        libraries::refresh_library_count,
        libraries::list_library_books,
        // Books
        books::list_books,
        books::get_book,
        books::get_book_by_isbn,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::list_book_libraries,
        // Mappings
        mappings::list_mappings,
        mappings::get_mapping,
        mappings::create_mapping,
        mappings::update_mapping,
        mappings::delete_mapping,
    ),
    components(
        schemas(
            // Libraries
            crate::models::library::Library,
            crate::models::library::CreateLibrary,
            crate::models::library::UpdateLibrary,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Mappings
            crate::models::mapping::LibraryBook,
            crate::models::mapping::MappingDetails,
            crate::models::mapping::CreateMapping,
            crate::models::mapping::UpdateMapping,
            crate::models::mapping::BookInLibrary,
            crate::models::mapping::LibraryWithBook,
            // Enums
            crate::models::enums::LibraryStatus,
            crate::models::enums::MappingStatus,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "libraries", description = "Library management"),
        (name = "books", description = "Book management"),
        (name = "library-books", description = "Library-book mapping management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
