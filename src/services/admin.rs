//! Administrative CRUD service.
//!
//! Backs the generic per-entity management screens. Catalog pages are
//! read-only; every write in the system goes through here.

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{CreateAuthor, UpdateAuthor},
        book::{CreateBook, UpdateBook},
        book_instance::{CreateBookInstance, LoanStatus, UpdateBookInstance},
        genre::{CreateGenre, UpdateGenre},
        language::{CreateLanguage, UpdateLanguage},
        Author, Book, BookInstance, Genre, Language,
    },
    repository::{book_instances::InstanceFilter, AuthorStore, BookStore, Repository},
};

/// Reject status values outside the fixed enumeration
fn validate_status(code: &str) -> AppResult<()> {
    if LoanStatus::from_code(code).is_none() {
        return Err(AppError::Validation(format!(
            "status must be one of d, o, a, r (got {:?})",
            code
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct AdminService {
    repository: Repository,
}

impl AdminService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // =========================================================================
    // GENRES
    // =========================================================================

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list_all().await
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<Genre> {
        self.repository
            .genres
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))
    }

    pub async fn create_genre(&self, genre: CreateGenre) -> AppResult<Genre> {
        genre.validate()?;
        self.repository.genres.create(&genre).await
    }

    pub async fn update_genre(&self, id: i32, genre: UpdateGenre) -> AppResult<Genre> {
        genre.validate()?;
        self.repository.genres.update(id, &genre).await
    }

    pub async fn delete_genre(&self, id: i32) -> AppResult<()> {
        self.repository.genres.delete(id).await
    }

    // =========================================================================
    // LANGUAGES
    // =========================================================================

    pub async fn list_languages(&self) -> AppResult<Vec<Language>> {
        self.repository.languages.list_all().await
    }

    pub async fn get_language(&self, id: i32) -> AppResult<Language> {
        self.repository
            .languages
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Language with id {} not found", id)))
    }

    pub async fn create_language(&self, language: CreateLanguage) -> AppResult<Language> {
        language.validate()?;
        self.repository.languages.create(&language).await
    }

    pub async fn update_language(&self, id: i32, language: UpdateLanguage) -> AppResult<Language> {
        language.validate()?;
        self.repository.languages.update(id, &language).await
    }

    pub async fn delete_language(&self, id: i32) -> AppResult<()> {
        self.repository.languages.delete(id).await
    }

    // =========================================================================
    // AUTHORS
    // =========================================================================

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list_all().await
    }

    /// Author with their books loaded (inline editor on the admin screen)
    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.repository
            .authors
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }

    pub async fn create_author(&self, author: CreateAuthor) -> AppResult<Author> {
        author.validate()?;
        self.repository.authors.create(&author).await
    }

    pub async fn update_author(&self, id: i32, author: UpdateAuthor) -> AppResult<Author> {
        author.validate()?;
        self.repository.authors.update(id, &author).await
    }

    /// Delete an author; their books survive with a null author reference
    pub async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }

    // =========================================================================
    // BOOKS
    // =========================================================================

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_all_detailed().await
    }

    /// Book with its copies loaded (inline editor on the admin screen)
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;
        self.repository.books.create(&book).await
    }

    pub async fn update_book(&self, id: i32, book: UpdateBook) -> AppResult<Book> {
        book.validate()?;
        self.repository.books.update(id, &book).await
    }

    /// Delete a book; its copies survive with a null book reference
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }

    // =========================================================================
    // BOOK INSTANCES
    // =========================================================================

    pub async fn list_book_instances(&self, filter: InstanceFilter) -> AppResult<Vec<BookInstance>> {
        if let Some(ref status) = filter.status {
            validate_status(status)?;
        }
        self.repository.book_instances.list(&filter).await
    }

    pub async fn get_book_instance(&self, id: Uuid) -> AppResult<BookInstance> {
        self.repository
            .book_instances
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    pub async fn create_book_instance(
        &self,
        instance: CreateBookInstance,
    ) -> AppResult<BookInstance> {
        instance.validate()?;
        if let Some(ref status) = instance.status {
            validate_status(status)?;
        }
        self.repository.book_instances.create(&instance).await
    }

    pub async fn update_book_instance(
        &self,
        id: Uuid,
        instance: UpdateBookInstance,
    ) -> AppResult<BookInstance> {
        instance.validate()?;
        if let Some(ref status) = instance.status {
            validate_status(status)?;
        }
        self.repository.book_instances.update(id, &instance).await
    }

    pub async fn delete_book_instance(&self, id: Uuid) -> AppResult<()> {
        self.repository.book_instances.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_codes_accepted() {
        for code in ["d", "o", "a", "r"] {
            assert!(validate_status(code).is_ok());
        }
    }

    #[test]
    fn unknown_status_code_rejected() {
        let err = validate_status("z").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
