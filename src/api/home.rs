//! Homepage endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Homepage context: library-wide aggregate counts. Field names are the
/// contract consumed by the homepage template.
#[derive(Serialize, ToSchema)]
pub struct HomePage {
    pub title: String,
    pub number_of_books: i64,
    pub number_of_book_instances: i64,
    pub number_of_available_book_instances: i64,
    pub number_of_authors: i64,
    pub number_of_books_with_title_containing_elon: i64,
    pub number_of_genres_whose_name_contains_phy: i64,
}

/// Homepage with aggregate library counts
#[utoipa::path(
    get,
    path = "/",
    tag = "catalog",
    responses(
        (status = 200, description = "Homepage aggregate counts", body = HomePage)
    )
)]
pub async fn index(State(state): State<crate::AppState>) -> AppResult<Json<HomePage>> {
    let page = state.services.stats.get_home_page().await?;
    Ok(Json(page))
}
