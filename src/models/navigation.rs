use serde::{Deserialize, Serialize};

use super::book::BookSummary;

pub const SUMMARY_ROUTE: &str = "/summary";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const NO_IMAGE_AVAILABLE: &str = "No Image Available";

/// Projection of a clicked book handed to the detail view as route state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPayload {
    pub title: String,
    pub author: String,
    pub book_image: String,
}

impl From<&BookSummary> for NavigationPayload {
    fn from(book: &BookSummary) -> Self {
        Self {
            title: book.title().to_string(),
            author: author_line(book),
            book_image: book.thumbnail().unwrap_or(NO_IMAGE_AVAILABLE).to_string(),
        }
    }
}

/// A route transition carrying in-memory state rather than URL parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub route: String,
    pub state: NavigationPayload,
}

impl Navigation {
    pub fn to_summary(payload: NavigationPayload) -> Self {
        Self {
            route: SUMMARY_ROUTE.to_string(),
            state: payload,
        }
    }
}

/// Authors joined by ", ", or the unknown-author fallback when the list is absent.
pub fn author_line(book: &BookSummary) -> String {
    match book.authors() {
        Some(authors) => authors.join(", "),
        None => UNKNOWN_AUTHOR.to_string(),
    }
}
