//! Administrative CRUD endpoints.
//!
//! Generic management screens per entity, mounted under `/admin`.
//! List screens expose curated column subsets; Author and Book details
//! embed their dependent records for inline editing.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        author::{CreateAuthor, UpdateAuthor},
        book::{CreateBook, UpdateBook},
        book_instance::{CreateBookInstance, UpdateBookInstance},
        genre::{CreateGenre, UpdateGenre},
        language::{CreateLanguage, UpdateLanguage},
        Author, Book, BookInstance, Genre, Language,
    },
    repository::book_instances::InstanceFilter,
};

/// Author list row (curated columns)
#[derive(Serialize, ToSchema)]
pub struct AuthorRow {
    pub last_name: String,
    pub first_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub id: i32,
}

impl From<&Author> for AuthorRow {
    fn from(author: &Author) -> Self {
        Self {
            last_name: author.last_name.clone(),
            first_name: author.first_name.clone(),
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
            id: author.id,
        }
    }
}

/// Book list row (curated columns)
#[derive(Serialize, ToSchema)]
pub struct BookRow {
    pub title: String,
    /// Author label ("Last, First"), when the book has one
    pub author: Option<String>,
    /// Comma-joined names of at most the first three genres
    pub genre: String,
    pub id: i32,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.as_ref().map(|a| a.to_string()),
            genre: book.display_genre(),
            id: book.id,
        }
    }
}

/// Book instance list row (curated columns)
#[derive(Serialize, ToSchema)]
pub struct BookInstanceRow {
    /// Book title, when the copy still references one
    pub book: Option<String>,
    pub status: String,
    pub due_back: Option<NaiveDate>,
    pub id: Uuid,
}

impl From<&BookInstance> for BookInstanceRow {
    fn from(instance: &BookInstance) -> Self {
        Self {
            book: instance.book_title.clone(),
            status: instance.status.clone(),
            due_back: instance.due_back,
            id: instance.id,
        }
    }
}

/// Book instance detail with admin field grouping: identification
/// fields at the top level, availability fields grouped.
#[derive(Serialize, ToSchema)]
pub struct BookInstanceDetail {
    pub book: Option<String>,
    pub imprint: String,
    pub id: Uuid,
    pub availability: AvailabilityGroup,
}

/// "Availability" field group of the book instance detail screen
#[derive(Serialize, ToSchema)]
pub struct AvailabilityGroup {
    pub status: String,
    pub status_label: String,
    pub due_back: Option<NaiveDate>,
}

impl From<&BookInstance> for BookInstanceDetail {
    fn from(instance: &BookInstance) -> Self {
        Self {
            book: instance.book_title.clone(),
            imprint: instance.imprint.clone(),
            id: instance.id,
            availability: AvailabilityGroup {
                status: instance.status.clone(),
                status_label: instance.loan_status().to_string(),
                due_back: instance.due_back,
            },
        }
    }
}

/// Filters for the book instance list screen
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct InstanceListQuery {
    /// One-character status code (d, o, a, r)
    pub status: Option<String>,
    /// Exact due date
    pub due_back: Option<NaiveDate>,
}

impl From<InstanceListQuery> for InstanceFilter {
    fn from(query: InstanceListQuery) -> Self {
        Self {
            status: query.status,
            due_back: query.due_back,
        }
    }
}

// =============================================================================
// GENRES
// =============================================================================

/// List genres
#[utoipa::path(
    get,
    path = "/admin/genres",
    tag = "admin",
    responses((status = 200, description = "All genres", body = [Genre]))
)]
pub async fn list_genres(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Genre>>> {
    Ok(Json(state.services.admin.list_genres().await?))
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/admin/genres/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre", body = Genre),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Genre>> {
    Ok(Json(state.services.admin.get_genre(id).await?))
}

/// Create a genre
#[utoipa::path(
    post,
    path = "/admin/genres",
    tag = "admin",
    request_body = CreateGenre,
    responses(
        (status = 201, description = "Genre created", body = Genre),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_genre(
    State(state): State<crate::AppState>,
    Json(genre): Json<CreateGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    let created = state.services.admin.create_genre(genre).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a genre
#[utoipa::path(
    put,
    path = "/admin/genres/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = UpdateGenre,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn update_genre(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(genre): Json<UpdateGenre>,
) -> AppResult<Json<Genre>> {
    Ok(Json(state.services.admin.update_genre(id, genre).await?))
}

/// Delete a genre
#[utoipa::path(
    delete,
    path = "/admin/genres/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn delete_genre(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.admin.delete_genre(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// LANGUAGES
// =============================================================================

/// List languages
#[utoipa::path(
    get,
    path = "/admin/languages",
    tag = "admin",
    responses((status = 200, description = "All languages", body = [Language]))
)]
pub async fn list_languages(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Language>>> {
    Ok(Json(state.services.admin.list_languages().await?))
}

/// Get language by ID
#[utoipa::path(
    get,
    path = "/admin/languages/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Language ID")),
    responses(
        (status = 200, description = "Language", body = Language),
        (status = 404, description = "Language not found")
    )
)]
pub async fn get_language(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Language>> {
    Ok(Json(state.services.admin.get_language(id).await?))
}

/// Create a language
#[utoipa::path(
    post,
    path = "/admin/languages",
    tag = "admin",
    request_body = CreateLanguage,
    responses(
        (status = 201, description = "Language created", body = Language),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_language(
    State(state): State<crate::AppState>,
    Json(language): Json<CreateLanguage>,
) -> AppResult<(StatusCode, Json<Language>)> {
    let created = state.services.admin.create_language(language).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a language
#[utoipa::path(
    put,
    path = "/admin/languages/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Language ID")),
    request_body = UpdateLanguage,
    responses(
        (status = 200, description = "Language updated", body = Language),
        (status = 404, description = "Language not found")
    )
)]
pub async fn update_language(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(language): Json<UpdateLanguage>,
) -> AppResult<Json<Language>> {
    Ok(Json(
        state.services.admin.update_language(id, language).await?,
    ))
}

/// Delete a language. Books written in it keep a null language reference.
#[utoipa::path(
    delete,
    path = "/admin/languages/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Language ID")),
    responses(
        (status = 204, description = "Language deleted"),
        (status = 404, description = "Language not found")
    )
)]
pub async fn delete_language(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.admin.delete_language(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// AUTHORS
// =============================================================================

/// List authors (curated columns)
#[utoipa::path(
    get,
    path = "/admin/authors",
    tag = "admin",
    responses((status = 200, description = "All authors", body = [AuthorRow]))
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<AuthorRow>>> {
    let authors = state.services.admin.list_authors().await?;
    Ok(Json(authors.iter().map(AuthorRow::from).collect()))
}

/// Get author by ID, with their books inline
#[utoipa::path(
    get,
    path = "/admin/authors/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author with books", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Author>> {
    Ok(Json(state.services.admin.get_author(id).await?))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/admin/authors",
    tag = "admin",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(author): Json<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let created = state.services.admin.create_author(author).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/admin/authors/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(author): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    Ok(Json(state.services.admin.update_author(id, author).await?))
}

/// Delete an author. Their books keep a null author reference.
#[utoipa::path(
    delete,
    path = "/admin/authors/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.admin.delete_author(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// BOOKS
// =============================================================================

/// List books (curated columns)
#[utoipa::path(
    get,
    path = "/admin/books",
    tag = "admin",
    responses((status = 200, description = "All books", body = [BookRow]))
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<BookRow>>> {
    let books = state.services.admin.list_books().await?;
    Ok(Json(books.iter().map(BookRow::from).collect()))
}

/// Get book by ID, with its copies inline
#[utoipa::path(
    get,
    path = "/admin/books/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book with copies", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    Ok(Json(state.services.admin.get_book(id).await?))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/admin/books",
    tag = "admin",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.admin.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/admin/books/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(book): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    Ok(Json(state.services.admin.update_book(id, book).await?))
}

/// Delete a book. Its copies keep a null book reference.
#[utoipa::path(
    delete,
    path = "/admin/books/{id}",
    tag = "admin",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.admin.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// BOOK INSTANCES
// =============================================================================

/// List book instances (curated columns), filterable by status and due date
#[utoipa::path(
    get,
    path = "/admin/book-instances",
    tag = "admin",
    params(InstanceListQuery),
    responses(
        (status = 200, description = "Book instances ordered by due date", body = [BookInstanceRow]),
        (status = 400, description = "Invalid status filter")
    )
)]
pub async fn list_book_instances(
    State(state): State<crate::AppState>,
    Query(query): Query<InstanceListQuery>,
) -> AppResult<Json<Vec<BookInstanceRow>>> {
    let instances = state
        .services
        .admin
        .list_book_instances(query.into())
        .await?;
    Ok(Json(instances.iter().map(BookInstanceRow::from).collect()))
}

/// Get book instance by ID, with admin field grouping
#[utoipa::path(
    get,
    path = "/admin/book-instances/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Book instance ID")),
    responses(
        (status = 200, description = "Book instance", body = BookInstanceDetail),
        (status = 404, description = "Book instance not found")
    )
)]
pub async fn get_book_instance(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookInstanceDetail>> {
    let instance = state.services.admin.get_book_instance(id).await?;
    Ok(Json(BookInstanceDetail::from(&instance)))
}

/// Create a book instance
#[utoipa::path(
    post,
    path = "/admin/book-instances",
    tag = "admin",
    request_body = CreateBookInstance,
    responses(
        (status = 201, description = "Book instance created", body = BookInstance),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book_instance(
    State(state): State<crate::AppState>,
    Json(instance): Json<CreateBookInstance>,
) -> AppResult<(StatusCode, Json<BookInstance>)> {
    let created = state.services.admin.create_book_instance(instance).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a book instance
#[utoipa::path(
    put,
    path = "/admin/book-instances/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Book instance ID")),
    request_body = UpdateBookInstance,
    responses(
        (status = 200, description = "Book instance updated", body = BookInstance),
        (status = 404, description = "Book instance not found")
    )
)]
pub async fn update_book_instance(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(instance): Json<UpdateBookInstance>,
) -> AppResult<Json<BookInstance>> {
    Ok(Json(
        state
            .services
            .admin
            .update_book_instance(id, instance)
            .await?,
    ))
}

/// Delete a book instance
#[utoipa::path(
    delete,
    path = "/admin/book-instances/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Book instance ID")),
    responses(
        (status = 204, description = "Book instance deleted"),
        (status = 404, description = "Book instance not found")
    )
)]
pub async fn delete_book_instance(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.admin.delete_book_instance(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
