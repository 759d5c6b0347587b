//! LocalLibrary catalog server
//!
//! A small library-catalog web application: books, authors, genres,
//! languages and physical copies, served as a REST JSON API with
//! read-only catalog pages and administrative CRUD screens.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
