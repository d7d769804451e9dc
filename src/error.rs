use uuid::Uuid;

/// Why a raw search string never reached the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryRejection {
    #[error("search query is empty")]
    Empty,

    #[error("search query contains special character '{0}'")]
    ForbiddenCharacter(char),
}

/// Transport or decoding failure from the books endpoint.
#[derive(Debug, thiserror::Error)]
pub enum BooksApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Books API responded with status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("view {0} not found")]
    NotFound(Uuid),

    #[error("book {0} is not in the selected list")]
    BookNotFound(String),
}
