//! Catalog read service backing the public list and detail pages

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookSummary},
    repository::{AuthorStore, BookStore},
};

/// Read-only access to the catalog, one page at a time. The stores are
/// injected so the pagination and not-found behaviour can be tested
/// without a database.
#[derive(Clone)]
pub struct CatalogService {
    authors: Arc<dyn AuthorStore>,
    books: Arc<dyn BookStore>,
}

impl CatalogService {
    pub fn new(authors: Arc<dyn AuthorStore>, books: Arc<dyn BookStore>) -> Self {
        Self { authors, books }
    }

    /// List one page of books in insertion order
    pub async fn list_books(&self, page: i64) -> AppResult<(Vec<BookSummary>, i64)> {
        self.books.list(page.max(1)).await
    }

    /// Get book by ID with author, language, genres and copies
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// List one page of authors in insertion order
    pub async fn list_authors(&self, page: i64) -> AppResult<(Vec<Author>, i64)> {
        self.authors.list(page.max(1)).await
    }

    /// Get author by ID with their books
    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.authors
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockAuthorStore, MockBookStore};

    fn summary(id: i32, title: &str) -> BookSummary {
        BookSummary {
            id,
            title: title.to_string(),
            isbn: "9780000000000".to_string(),
            author: None,
        }
    }

    fn service(authors: MockAuthorStore, books: MockBookStore) -> CatalogService {
        CatalogService::new(Arc::new(authors), Arc::new(books))
    }

    #[tokio::test]
    async fn list_books_passes_page_through() {
        let mut books = MockBookStore::new();
        books
            .expect_list()
            .withf(|page| *page == 3)
            .returning(|_| Ok((vec![summary(5, "Dune"), summary(6, "Emma")], 6)));

        let catalog = service(MockAuthorStore::new(), books);
        let (items, total) = catalog.list_books(3).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(total, 6);
    }

    #[tokio::test]
    async fn list_books_clamps_page_to_one() {
        let mut books = MockBookStore::new();
        books
            .expect_list()
            .withf(|page| *page == 1)
            .returning(|_| Ok((vec![], 0)));

        let catalog = service(MockAuthorStore::new(), books);
        catalog.list_books(0).await.unwrap();
    }

    #[tokio::test]
    async fn list_authors_passes_page_through_and_clamps() {
        let mut authors = MockAuthorStore::new();
        authors
            .expect_list()
            .withf(|page| *page == 1)
            .returning(|_| Ok((vec![], 0)));

        let catalog = service(authors, MockBookStore::new());
        catalog.list_authors(-2).await.unwrap();
    }

    #[tokio::test]
    async fn get_book_maps_missing_to_not_found() {
        let mut books = MockBookStore::new();
        books.expect_get_by_id().returning(|_| Ok(None));

        let catalog = service(MockAuthorStore::new(), books);
        let err = catalog.get_book(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_author_maps_missing_to_not_found() {
        let mut authors = MockAuthorStore::new();
        authors.expect_get_by_id().returning(|_| Ok(None));

        let catalog = service(authors, MockBookStore::new());
        let err = catalog.get_author(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_author_returns_found_author() {
        let mut authors = MockAuthorStore::new();
        authors.expect_get_by_id().returning(|id| {
            Ok(Some(Author {
                id,
                first_name: "Jane".to_string(),
                last_name: "Austen".to_string(),
                date_of_birth: None,
                date_of_death: None,
                books: vec![],
            }))
        });

        let catalog = service(authors, MockBookStore::new());
        let author = catalog.get_author(7).await.unwrap();
        assert_eq!(author.to_string(), "Austen, Jane");
    }
}
