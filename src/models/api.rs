use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize)]
pub struct QueryInput {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct KeyPressRequest {
    #[validate(length(min = 1, max = 32))]
    pub key: String,
}

/// Which rendered list a clicked card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultList {
    Search,
    Discovery,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectBookRequest {
    pub list: ResultList,
    #[validate(length(min = 1))]
    pub book_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cover {
    Thumbnail { url: String, alt: String },
    Missing { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub cover: Cover,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub query: String,
    pub loading: bool,
    pub loading_text: Option<String>,
    pub placeholder: Option<String>,
    pub alert: Option<String>,
    pub search_results: Vec<BookCard>,
    pub discovery_queue: Vec<BookCard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateViewResponse {
    pub view_id: Uuid,
    pub view: ViewSnapshot,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub active_views: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
            timestamp: Utc::now(),
        }
    }
}
