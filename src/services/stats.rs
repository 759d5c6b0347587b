//! Homepage statistics service

use crate::{api::home::HomePage, error::AppResult, repository::Repository};

/// Substring counted against book titles on the homepage
const TITLE_SEARCH_TERM: &str = "elon";
/// Substring counted against genre names on the homepage
const GENRE_SEARCH_TERM: &str = "phy";

pub const HOME_TITLE: &str = "Local Library Home";

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Cheap connectivity probe backing the readiness endpoint
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.repository.pool)
            .await?;
        Ok(())
    }

    /// Compute the homepage aggregates. Six independent full-table
    /// counts, recomputed on every request, no caching.
    pub async fn get_home_page(&self) -> AppResult<HomePage> {
        let pool = &self.repository.pool;

        let number_of_books: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(pool)
            .await?;

        let number_of_book_instances: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
                .fetch_one(pool)
                .await?;

        let number_of_available_book_instances: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = 'a'")
                .fetch_one(pool)
                .await?;

        let number_of_authors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(pool)
            .await?;

        let number_of_books_with_title_containing_elon: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE title ILIKE '%' || $1 || '%'")
                .bind(TITLE_SEARCH_TERM)
                .fetch_one(pool)
                .await?;

        let number_of_genres_whose_name_contains_phy: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM genres WHERE name ILIKE '%' || $1 || '%'")
                .bind(GENRE_SEARCH_TERM)
                .fetch_one(pool)
                .await?;

        Ok(HomePage {
            title: HOME_TITLE.to_string(),
            number_of_books,
            number_of_book_instances,
            number_of_available_book_instances,
            number_of_authors,
            number_of_books_with_title_containing_elon,
            number_of_genres_whose_name_contains_phy,
        })
    }
}
