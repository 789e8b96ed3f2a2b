//! Status and body handling shared by every request, kept free of the
//! browser so it can be tested natively.

use dioxus_logger::tracing;
use serde_json::Value;

use crate::{gallery::error::TransportError, model::character::Character};

/// Which kind of request a response answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Reads or writes a collection or one of its records
    Collection,
    /// `GET` with a query filter such as `login?email=`
    FilteredLookup,
}

/// How a response is treated, decided from its status alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    /// mockapi answers a filter without matches with 404
    NoMatches,
    Failure,
}

pub fn classify(status: u16, kind: RequestKind) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        404 if kind == RequestKind::FilteredLookup => StatusClass::NoMatches,
        _ => StatusClass::Failure,
    }
}

/// Builds [`TransportError::Status`] from a failed response.
///
/// `body` is `None` when the body could not be read; it and an empty body
/// both become `"Unknown error"`.
pub fn status_error(status: u16, body: Option<String>) -> TransportError {
    let body = body
        .filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| "Unknown error".to_string());

    TransportError::Status { status, body }
}

/// Decodes a listing record by record, skipping entries that do not parse.
///
/// The collection is writable by anyone, so one malformed entry must not hide
/// the rest of the gallery.
pub fn parse_listing(values: Vec<Value>) -> Vec<Character> {
    let total = values.len();
    let characters: Vec<Character> = values
        .into_iter()
        .filter_map(|value| {
            let id = value.get("id").map(Value::to_string);
            serde_json::from_value(value)
                .inspect_err(|e| {
                    tracing::warn!(id = ?id, error = %e, "Skipping malformed character record")
                })
                .ok()
        })
        .collect();

    if characters.len() != total {
        tracing::warn!(
            skipped = total - characters.len(),
            count = characters.len(),
            "Listing contained malformed records"
        );
    }

    characters
}
