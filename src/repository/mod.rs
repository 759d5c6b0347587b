//! Repository layer for database operations

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod languages;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, Book, BookSummary},
};

/// Fixed page size for the catalog list pages
pub const PAGE_SIZE: i64 = 2;

/// OFFSET for a 1-based page number. Saturates so absurd page numbers
/// produce an empty page instead of overflowing.
pub(crate) fn page_offset(page: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(PAGE_SIZE)
}

/// Read-side capability of the author store, as used by the catalog
/// list/detail pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// List one page of authors in insertion order, with the total count
    async fn list(&self, page: i64) -> AppResult<(Vec<Author>, i64)>;
    /// Fetch one author with their books, or None
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Author>>;
}

/// Read-side capability of the book store, as used by the catalog
/// list/detail pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// List one page of books in insertion order, with the total count
    async fn list(&self, page: i64) -> AppResult<(Vec<BookSummary>, i64)>;
    /// Fetch one book with author, language, genres and copies, or None
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub genres: genres::GenresRepository,
    pub languages: languages::LanguagesRepository,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub book_instances: book_instances::BookInstancesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            genres: genres::GenresRepository::new(pool.clone()),
            languages: languages::LanguagesRepository::new(pool.clone()),
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            book_instances: book_instances::BookInstancesRepository::new(pool.clone()),
            pool,
        }
    }
}
