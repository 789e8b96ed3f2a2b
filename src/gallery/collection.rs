use dioxus_logger::tracing;

use crate::{
    gallery::{
        api::CharacterApi,
        error::{AuthError, Error},
        filter::filter_characters,
        reconcile::Mutation,
        validate::validate_draft,
    },
    model::{
        character::{Character, CharacterDraft, CharacterPayload},
        session::Session,
    },
};

/// Result of a delete attempt that passed the ownership check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Mutation),
    /// The user declined the confirmation, nothing was sent
    Cancelled,
}

/// Synchronizes the character list with the remote collection on behalf of
/// one session.
///
/// Operations never touch the local list themselves. They check their
/// preconditions against a snapshot of it, issue at most one request, and
/// return a [`Mutation`] for [`reconcile`](crate::gallery::reconcile::reconcile)
/// to apply. A rejected precondition returns before any request is issued and
/// a failed request is not retried.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterClient<A> {
    api: A,
    session: Session,
}

impl<A: CharacterApi> CharacterClient<A> {
    /// Creates a new instance of [`CharacterClient`]
    pub fn new(api: A, session: Session) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetches the whole collection, newest first.
    pub async fn list(&self) -> Result<Mutation, Error> {
        let mut characters = self.api.list_characters().await?;
        characters.reverse();

        tracing::debug!(count = characters.len(), "Loaded characters");

        Ok(Mutation::Listed(characters))
    }

    /// Creates a character owned by the current session.
    ///
    /// # Returns
    /// - `Ok(Mutation::Created(_))`: The record as stored, including its new ID
    /// - `Err(Error::Validation(_))`: A draft field is empty or malformed
    /// - `Err(Error::Auth(AuthError::NotLoggedIn))`: The session is anonymous
    /// - `Err(Error::Transport(_))`: The request failed
    pub async fn create(&self, draft: &CharacterDraft) -> Result<Mutation, Error> {
        let payload = self.payload(draft)?;

        let created = self.api.create_character(&payload).await?;

        tracing::info!(id = %created.id, "Created character");

        Ok(Mutation::Created(created))
    }

    /// Updates the character `id` from `draft`.
    ///
    /// `characters` is the list as currently displayed; the record with `id`
    /// must be in it and owned by the current session.
    ///
    /// # Returns
    /// - `Ok(Mutation::Updated { .. })`: The record as stored after the update
    /// - `Err(Error::Validation(_))`: A draft field is empty or malformed
    /// - `Err(Error::Auth(_))`: Anonymous session, unknown ID, or not the owner
    /// - `Err(Error::Transport(_))`: The request failed
    pub async fn update(
        &self,
        characters: &[Character],
        id: &str,
        draft: &CharacterDraft,
    ) -> Result<Mutation, Error> {
        let payload = self.payload(draft)?;
        self.check_owner(characters, id, AuthError::NotOwnerEdit)?;

        let updated = self.api.update_character(id, &payload).await?;

        tracing::info!(id = %id, "Updated character");

        Ok(Mutation::Updated {
            id: id.to_string(),
            record: updated,
        })
    }

    /// Deletes the character `id` after `confirm` approves it.
    ///
    /// `confirm` is only asked once the ownership check has passed, and a
    /// `false` answer returns [`DeleteOutcome::Cancelled`] without a request.
    pub async fn delete<F>(
        &self,
        characters: &[Character],
        id: &str,
        confirm: F,
    ) -> Result<DeleteOutcome, Error>
    where
        F: FnOnce(&Character) -> bool,
    {
        let character = self.check_owner(characters, id, AuthError::NotOwnerDelete)?;
        if !confirm(character) {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.api.delete_character(id).await?;

        tracing::info!(id = %id, "Deleted character");

        Ok(DeleteOutcome::Deleted(Mutation::Deleted(id.to_string())))
    }

    /// Characters matching `search_term`, restricted to the session's own when
    /// `mine_only` is set.
    pub fn filter<'a>(
        &self,
        characters: &'a [Character],
        search_term: &str,
        mine_only: bool,
    ) -> Vec<&'a Character> {
        filter_characters(characters, search_term, mine_only, self.session.email())
    }

    /// Returns true if the current session may edit or delete `character`.
    pub fn can_modify(&self, character: &Character) -> bool {
        self.session
            .email()
            .is_some_and(|email| character.is_owned_by(email))
    }

    /// Builds the request body, checking the draft fields before login.
    fn payload(&self, draft: &CharacterDraft) -> Result<CharacterPayload, Error> {
        validate_draft(draft)?;
        let email = self.session.email().ok_or(AuthError::NotLoggedIn)?;

        Ok(CharacterPayload {
            name: draft.name.clone(),
            image: draft.image.clone(),
            gender: draft.gender,
            world: draft.world.clone(),
            owner: email.to_string(),
        })
    }

    fn check_owner<'a>(
        &self,
        characters: &'a [Character],
        id: &str,
        not_owner: AuthError,
    ) -> Result<&'a Character, AuthError> {
        let email = self.session.email().ok_or(AuthError::NotLoggedIn)?;
        let character = characters
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| AuthError::CharacterNotFound(id.to_string()))?;

        if !character.is_owned_by(email) {
            return Err(not_owner);
        }

        Ok(character)
    }
}
