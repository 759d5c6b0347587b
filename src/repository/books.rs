//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookSummary, CreateBook, UpdateBook},
        genre::Genre,
        language::Language,
    },
    repository::{page_offset, BookStore, PAGE_SIZE},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books with their relations loaded (admin list screen)
    pub async fn list_all_detailed(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, summary, isbn, author_id, language_id
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut detailed = Vec::with_capacity(books.len());
        for book in books {
            detailed.push(self.load_relations(book).await?);
        }
        Ok(detailed)
    }

    /// Load author, language, genres and copies for a book row
    async fn load_relations(&self, mut book: Book) -> AppResult<Book> {
        if let Some(author_id) = book.author_id {
            book.author = sqlx::query_as::<_, Author>(
                r#"
                SELECT id, first_name, last_name, date_of_birth, date_of_death
                FROM authors WHERE id = $1
                "#,
            )
            .bind(author_id)
            .fetch_optional(&self.pool)
            .await?;
        }

        if let Some(language_id) = book.language_id {
            book.language =
                sqlx::query_as::<_, Language>("SELECT id, name FROM languages WHERE id = $1")
                    .bind(language_id)
                    .fetch_optional(&self.pool)
                    .await?;
        }

        book.genres = self.get_book_genres(book.id).await?;

        // Copies ordered by due date; rows without one sort last
        // (Postgres default for ASC).
        book.instances = sqlx::query_as(
            r#"
            SELECT id, book_id, imprint, due_back, status
            FROM book_instances
            WHERE book_id = $1
            ORDER BY due_back
            "#,
        )
        .bind(book.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(book)
    }

    /// Load genres for a book via the book_genres junction table,
    /// in relationship order
    async fn get_book_genres(&self, book_id: i32) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            WHERE bg.book_id = $1
            ORDER BY bg.genre_id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(genres)
    }

    /// Insert a book and its genre links in one transaction; a bad
    /// genre id rolls back the whole create.
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, summary, isbn, author_id, language_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.summary)
        .bind(&book.isbn)
        .bind(book.author_id)
        .bind(book.language_id)
        .fetch_one(&mut *tx)
        .await?;

        Self::sync_book_genres(&mut tx, id, &book.genre_ids).await?;
        tx.commit().await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Book {} vanished after insert", id)))
    }

    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE books SET
                title = COALESCE($1, title),
                summary = COALESCE($2, summary),
                isbn = COALESCE($3, isbn),
                author_id = COALESCE($4, author_id),
                language_id = COALESCE($5, language_id)
            WHERE id = $6
            "#,
        )
        .bind(book.title.as_deref())
        .bind(book.summary.as_deref())
        .bind(book.isbn.as_deref())
        .bind(book.author_id)
        .bind(book.language_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        if let Some(ref genre_ids) = book.genre_ids {
            Self::sync_book_genres(&mut tx, id, genre_ids).await?;
        }

        tx.commit().await?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Delete a book. Its copies keep a null book reference
    /// (FK is ON DELETE SET NULL); join-table rows are removed.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }

    /// Replace all genres for a book inside the caller's transaction:
    /// delete existing rows then insert new ones.
    async fn sync_book_genres(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        book_id: i32,
        genre_ids: &[i32],
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(book_id)
            .execute(&mut **tx)
            .await?;

        for genre_id in genre_ids {
            sqlx::query(
                r#"
                INSERT INTO book_genres (book_id, genre_id)
                VALUES ($1, $2)
                ON CONFLICT (book_id, genre_id) DO NOTHING
                "#,
            )
            .bind(book_id)
            .bind(genre_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn list(&self, page: i64) -> AppResult<(Vec<BookSummary>, i64)> {
        let offset = page_offset(page);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        let books = sqlx::query_as::<_, BookSummary>(
            r#"
            SELECT b.id, b.title, b.isbn,
                   a.last_name || ', ' || a.first_name AS author
            FROM books b
            LEFT JOIN authors a ON a.id = b.author_id
            ORDER BY b.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(PAGE_SIZE)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((books, total))
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, summary, isbn, author_id, language_id
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(book) = book else {
            return Ok(None);
        };

        Ok(Some(self.load_relations(book).await?))
    }
}
