//! Book instance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Availability status of a copy. Stored as a one-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LoanStatus {
    Maintenance,
    OnLoan,
    Available,
    Reserved,
}

impl LoanStatus {
    /// Stable one-character DB code for this status
    pub fn as_code(&self) -> &'static str {
        match self {
            LoanStatus::Maintenance => "d",
            LoanStatus::OnLoan => "o",
            LoanStatus::Available => "a",
            LoanStatus::Reserved => "r",
        }
    }

    /// Parse a one-character code; unknown codes are rejected
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "d" => Some(LoanStatus::Maintenance),
            "o" => Some(LoanStatus::OnLoan),
            "a" => Some(LoanStatus::Available),
            "r" => Some(LoanStatus::Reserved),
            _ => None,
        }
    }
}

impl Default for LoanStatus {
    fn default() -> Self {
        LoanStatus::Maintenance
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanStatus::Maintenance => "Maintenance",
            LoanStatus::OnLoan => "On loan",
            LoanStatus::Available => "Available",
            LoanStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

/// Full book instance model from database. The id is an opaque
/// 128-bit token unique across the whole library.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookInstance {
    pub id: Uuid,
    pub book_id: Option<i32>,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    /// One-character status code, see [`LoanStatus`]
    pub status: String,
    // Computed field (populated when queried with a JOIN, None otherwise)
    #[sqlx(default)]
    #[serde(default)]
    pub book_title: Option<String>,
}

impl BookInstance {
    /// Decoded availability status; unknown codes fall back to Maintenance
    pub fn loan_status(&self) -> LoanStatus {
        LoanStatus::from_code(&self.status).unwrap_or_default()
    }
}

impl std::fmt::Display for BookInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.book_title {
            Some(ref title) => write!(f, "{} ({})", self.id, title),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Create book instance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookInstance {
    pub book_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    /// One-character status code; defaults to maintenance
    pub status: Option<String>,
}

/// Update book instance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookInstance {
    pub book_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub imprint: Option<String>,
    pub due_back: Option<NaiveDate>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_round_trip() {
        for status in [
            LoanStatus::Maintenance,
            LoanStatus::OnLoan,
            LoanStatus::Available,
            LoanStatus::Reserved,
        ] {
            assert_eq!(LoanStatus::from_code(status.as_code()), Some(status));
        }
    }

    #[test]
    fn unknown_code_rejected() {
        assert_eq!(LoanStatus::from_code("x"), None);
        assert_eq!(LoanStatus::from_code(""), None);
    }

    #[test]
    fn default_status_is_maintenance() {
        assert_eq!(LoanStatus::default(), LoanStatus::Maintenance);
    }

    #[test]
    fn labels() {
        assert_eq!(LoanStatus::OnLoan.to_string(), "On loan");
        assert_eq!(LoanStatus::Available.to_string(), "Available");
    }

    #[test]
    fn label_includes_book_title_when_loaded() {
        let id = Uuid::new_v4();
        let instance = BookInstance {
            id,
            book_id: Some(3),
            imprint: "Houghton Mifflin, 2012".to_string(),
            due_back: None,
            status: "a".to_string(),
            book_title: Some("A Wizard of Earthsea".to_string()),
        };
        assert_eq!(
            instance.to_string(),
            format!("{} (A Wizard of Earthsea)", id)
        );
        assert_eq!(instance.loan_status(), LoanStatus::Available);
    }
}
