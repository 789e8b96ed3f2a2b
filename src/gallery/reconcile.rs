//! Applies the result of a successful remote call to the local list.
//!
//! The local list is only ever changed from the server's answer. Responses
//! are applied in the order they resolve, so two racing mutations on the same
//! record leave whichever answered last.

use crate::model::character::Character;

/// Outcome of a successful remote call against the character collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Full collection, already in display order
    Listed(Vec<Character>),
    /// Newly created record as returned by the store
    Created(Character),
    /// Record as returned by the store, placed in the slot of the requested ID
    Updated { id: String, record: Character },
    /// ID of the deleted record
    Deleted(String),
}

/// Returns the list that results from applying `mutation` to `current`.
///
/// # Behavior
/// - `Listed` replaces the list
/// - `Created` prepends the record, dropping any stale entry with the same ID
///   so the ID appears exactly once
/// - `Updated` replaces the record with the requested ID in place, even if the
///   store answered with a different ID; if no record matches the list is
///   returned unchanged
/// - `Deleted` removes every record with the matching ID, keeping the order of
///   the others
pub fn reconcile(current: Vec<Character>, mutation: Mutation) -> Vec<Character> {
    match mutation {
        Mutation::Listed(characters) => characters,
        Mutation::Created(created) => {
            let id = created.id.clone();
            let mut characters = Vec::with_capacity(current.len() + 1);
            characters.push(created);
            characters.extend(current.into_iter().filter(|c| c.id != id));
            characters
        }
        Mutation::Updated { id, record } => current
            .into_iter()
            .map(|c| if c.id == id { record.clone() } else { c })
            .collect(),
        Mutation::Deleted(id) => current.into_iter().filter(|c| c.id != id).collect(),
    }
}
