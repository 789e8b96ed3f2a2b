use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to send request: {0}")]
    Request(String),
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to build request URL: {0}")]
    Url(#[from] url::ParseError),
}
