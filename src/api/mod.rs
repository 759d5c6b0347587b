//! API handlers for the LocalLibrary REST endpoints

pub mod admin;
pub mod authors;
pub mod books;
pub mod health;
pub mod home;
pub mod openapi;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::repository::PAGE_SIZE;

/// Page selector for the catalog list pages
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PageQuery {
    /// Page number, starting at 1
    pub page: Option<i64>,
}

impl PageQuery {
    /// Requested page, clamped to 1
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Records on this page
    pub items: Vec<T>,
    /// Total number of records
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Records per page
    pub per_page: i64,
}

impl<T> PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(items: Vec<T>, total: i64, page: i64) -> Self {
        Self {
            items,
            total,
            page,
            per_page: PAGE_SIZE,
        }
    }
}
