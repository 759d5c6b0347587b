//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admin, authors, books, health, home};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LocalLibrary API",
        version = "0.1.0",
        description = "Library catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        home::index,
        books::list_books,
        books::get_book,
        authors::list_authors,
        authors::get_author,
        // Admin
        admin::list_genres,
        admin::get_genre,
        admin::create_genre,
        admin::update_genre,
        admin::delete_genre,
        admin::list_languages,
        admin::get_language,
        admin::create_language,
        admin::update_language,
        admin::delete_language,
        admin::list_authors,
        admin::get_author,
        admin::create_author,
        admin::update_author,
        admin::delete_author,
        admin::list_books,
        admin::get_book,
        admin::create_book,
        admin::update_book,
        admin::delete_book,
        admin::list_book_instances,
        admin::get_book_instance,
        admin::create_book_instance,
        admin::update_book_instance,
        admin::delete_book_instance,
    ),
    components(
        schemas(
            crate::models::Genre,
            crate::models::genre::CreateGenre,
            crate::models::genre::UpdateGenre,
            crate::models::Language,
            crate::models::language::CreateLanguage,
            crate::models::language::UpdateLanguage,
            crate::models::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            crate::models::Book,
            crate::models::BookSummary,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::BookInstance,
            crate::models::LoanStatus,
            crate::models::book_instance::CreateBookInstance,
            crate::models::book_instance::UpdateBookInstance,
            home::HomePage,
            admin::AuthorRow,
            admin::BookRow,
            admin::BookInstanceRow,
            admin::BookInstanceDetail,
            admin::AvailabilityGroup,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Public catalog pages"),
        (name = "admin", description = "Administrative CRUD screens")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
