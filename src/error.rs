use thiserror::Error;

/// Failure of a single fetch or derivation step. The job logs these and
/// carries on with an empty sentence in place of the missing value.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A required key is not configured
    #[error("{0}")]
    Config(String),

    /// Malformed date or response body
    #[error("Parse error: {0}")]
    Parse(String),

    /// Non-2xx response from the API
    #[error("API returned status {status}: {body}")]
    Http { status: u16, body: String },

    /// The API answered but had nothing in it
    #[error("{0}")]
    EmptyResult(String),

    /// Network-level failure while fetching. The notifier reports its own
    /// network failures as `anyhow` errors with send context instead.
    #[error("Request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(format!("error decoding JSON: {}", err))
    }
}

impl From<chrono::ParseError> for FetchError {
    fn from(err: chrono::ParseError) -> Self {
        FetchError::Parse(format!("error parsing date: {}", err))
    }
}

/// Reads the body of a non-success response into an `Http` error.
pub async fn http_error(response: reqwest::Response) -> FetchError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    FetchError::Http { status, body }
}
