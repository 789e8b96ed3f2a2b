//! Error types for the character gallery.
//!
//! Errors fall into the categories the UI distinguishes: validation and
//! authorization errors are raised synchronously before any request is
//! issued, while transport, storage, and configuration errors come from the
//! browser environment. None of them are fatal to the running page; every
//! error ends up as a toast through [`Error::notice`].

pub mod auth;
pub mod config;
pub mod storage;
pub mod transport;
pub mod validation;

use dioxus_logger::tracing;
use thiserror::Error;

pub use auth::AuthError;
pub use config::ConfigError;
pub use storage::StorageError;
pub use transport::TransportError;
pub use validation::ValidationError;

/// Main error type for the character gallery.
///
/// Aggregates the domain-specific error types so operations can use `?`
/// across validation, authorization, and transport steps.
#[derive(Error, Debug)]
pub enum Error {
    /// A form field is empty or malformed, no request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The session may not perform the operation, no request was issued.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The remote store could not be reached or answered with a failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Browser storage is unavailable or rejected a write.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The application was built with an invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns true for errors raised before any request was issued.
    pub fn is_rejected_locally(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Auth(_))
    }

    /// Logs the error and returns the text to show the user.
    ///
    /// Validation and authorization messages are shown verbatim. Every other
    /// error is logged in full and replaced by `fallback` so the notice names
    /// the operation that failed rather than the transport detail.
    pub fn notice(&self, fallback: &str) -> String {
        match self {
            Self::Validation(err) => {
                tracing::debug!("Validation error: {}", err);

                err.to_string()
            }
            Self::Auth(err) => {
                tracing::debug!("Authorization error: {}", err);

                err.to_string()
            }
            err => {
                tracing::error!("{}: {}", fallback, err);

                fallback.to_string()
            }
        }
    }
}
