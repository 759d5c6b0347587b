//! Business logic services

pub mod admin;
pub mod catalog;
pub mod stats;

use std::sync::Arc;

use crate::repository::{AuthorStore, BookStore, Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub stats: stats::StatsService,
    pub admin: admin::AdminService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let authors: Arc<dyn AuthorStore> = Arc::new(repository.authors.clone());
        let books: Arc<dyn BookStore> = Arc::new(repository.books.clone());

        Self {
            catalog: catalog::CatalogService::new(authors, books),
            stats: stats::StatsService::new(repository.clone()),
            admin: admin::AdminService::new(repository),
        }
    }
}
