//! Remote collaborators of the gallery.
//!
//! The traits are the seam between the gallery logic and the network: the
//! browser build uses [`http::HttpApi`], tests substitute a recording fake.
//! Futures are not `Send` since everything runs on the browser UI thread.

#[cfg(feature = "web")]
pub mod http;
pub mod response;

use crate::{
    gallery::error::TransportError,
    model::{
        character::{Character, CharacterPayload},
        login::{LoginRecord, RegisterPayload},
    },
};

/// Requests against the `Characters` collection
#[allow(async_fn_in_trait)]
pub trait CharacterApi {
    /// `GET /Characters`, in the store's insertion order
    async fn list_characters(&self) -> Result<Vec<Character>, TransportError>;

    /// `POST /Characters`
    async fn create_character(&self, payload: &CharacterPayload)
        -> Result<Character, TransportError>;

    /// `PUT /Characters/{id}`
    async fn update_character(
        &self,
        id: &str,
        payload: &CharacterPayload,
    ) -> Result<Character, TransportError>;

    /// `DELETE /Characters/{id}`
    async fn delete_character(&self, id: &str) -> Result<(), TransportError>;
}

/// Requests against the `login` collection
#[allow(async_fn_in_trait)]
pub trait LoginApi {
    /// `GET /login?email=`, zero or one record in practice
    async fn find_logins(&self, email: &str) -> Result<Vec<LoginRecord>, TransportError>;

    /// `POST /login`
    async fn create_login(&self, payload: &RegisterPayload) -> Result<LoginRecord, TransportError>;
}
