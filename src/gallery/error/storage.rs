use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Browser local storage is not available")]
    Unavailable,
    #[error("Failed to write key {key:?} to local storage: {reason}")]
    Write { key: String, reason: String },
}
