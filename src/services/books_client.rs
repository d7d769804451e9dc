use async_trait::async_trait;
use std::time::Duration;

use crate::config::BooksApiConfig;
use crate::error::BooksApiError;
use crate::models::{BookSummary, VolumesResponse};

/// Read-only access to a volumes search endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksApi: Send + Sync {
    /// Issues one GET with `q=<query>&maxResults=<max_results>` and returns
    /// the items in response order.
    async fn volumes(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<BookSummary>, BooksApiError>;
}

#[derive(Clone)]
pub struct GoogleBooksClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleBooksClient {
    pub fn new(config: &BooksApiConfig) -> Result<Self, BooksApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl BooksApi for GoogleBooksClient {
    async fn volumes(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<BookSummary>, BooksApiError> {
        tracing::debug!(query, max_results, "requesting volumes");
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("maxResults", max_results.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BooksApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: VolumesResponse =
            serde_json::from_slice(&body).map_err(|e| BooksApiError::Parse(e.to_string()))?;
        Ok(parsed.into_items())
    }
}
