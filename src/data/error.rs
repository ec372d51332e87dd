use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
