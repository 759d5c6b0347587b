//! Book instances (physical copies) repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book_instance::{BookInstance, CreateBookInstance, LoanStatus, UpdateBookInstance},
};

/// Filters for the admin book instance list screen
#[derive(Debug, Default, Clone)]
pub struct InstanceFilter {
    pub status: Option<String>,
    pub due_back: Option<NaiveDate>,
}

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List copies ordered by due date ascending, optionally filtered
    /// by status and due date. Rows without a due date sort last
    /// (Postgres default for ASC).
    pub async fn list(&self, filter: &InstanceFilter) -> AppResult<Vec<BookInstance>> {
        let instances = sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT bi.id, bi.book_id, bi.imprint, bi.due_back, bi.status,
                   b.title AS book_title
            FROM book_instances bi
            LEFT JOIN books b ON b.id = bi.book_id
            WHERE ($1::text IS NULL OR bi.status = $1)
              AND ($2::date IS NULL OR bi.due_back = $2)
            ORDER BY bi.due_back
            "#,
        )
        .bind(filter.status.as_deref())
        .bind(filter.due_back)
        .fetch_all(&self.pool)
        .await?;
        Ok(instances)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        let instance = sqlx::query_as::<_, BookInstance>(
            r#"
            SELECT bi.id, bi.book_id, bi.imprint, bi.due_back, bi.status,
                   b.title AS book_title
            FROM book_instances bi
            LEFT JOIN books b ON b.id = bi.book_id
            WHERE bi.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(instance)
    }

    pub async fn create(&self, instance: &CreateBookInstance) -> AppResult<BookInstance> {
        let id = Uuid::new_v4();
        let status = instance
            .status
            .as_deref()
            .unwrap_or(LoanStatus::default().as_code());

        sqlx::query(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, due_back, status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(instance.book_id)
        .bind(&instance.imprint)
        .bind(instance.due_back)
        .bind(status)
        .execute(&self.pool)
        .await?;

        self.get_by_id(id).await?.ok_or_else(|| {
            AppError::Internal(format!("Book instance {} vanished after insert", id))
        })
    }

    pub async fn update(&self, id: Uuid, instance: &UpdateBookInstance) -> AppResult<BookInstance> {
        let result = sqlx::query(
            r#"
            UPDATE book_instances SET
                book_id = COALESCE($1, book_id),
                imprint = COALESCE($2, imprint),
                due_back = COALESCE($3, due_back),
                status = COALESCE($4, status)
            WHERE id = $5
            "#,
        )
        .bind(instance.book_id)
        .bind(instance.imprint.as_deref())
        .bind(instance.due_back)
        .bind(instance.status.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book instance {} not found",
                id
            )));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book instance {} not found",
                id
            )));
        }
        Ok(())
    }
}
