//! Persisted login state.
//!
//! The session lives in three browser-local keys written at login and
//! removed at logout. It is read once when the app mounts and then handed to
//! the components that need it as an explicit [`Session`] value.

#[cfg(feature = "web")]
pub mod local;
pub mod memory;

#[cfg(feature = "web")]
pub use local::LocalStorage;
pub use memory::MemoryStorage;

use dioxus_logger::tracing;

use crate::{
    gallery::error::StorageError,
    model::session::{Identity, Session},
};

pub const AUTHENTICATED_KEY: &str = "isAuthenticated";
pub const FULL_NAME_KEY: &str = "fullName";
pub const EMAIL_KEY: &str = "email";

/// String key/value storage the session is persisted in
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Creates a new instance of [`SessionStore`]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the persisted session.
    ///
    /// Returns [`Session::Anonymous`] unless the authenticated flag is exactly
    /// `"true"` and both identity fields are present and non-empty.
    pub fn load(&self) -> Session {
        if self.storage.get(AUTHENTICATED_KEY).as_deref() != Some("true") {
            return Session::Anonymous;
        }

        let display_name = self.storage.get(FULL_NAME_KEY).filter(|v| !v.is_empty());
        let email = self.storage.get(EMAIL_KEY).filter(|v| !v.is_empty());

        match (display_name, email) {
            (Some(display_name), Some(email)) => Session::Authenticated(Identity {
                display_name,
                email,
            }),
            _ => {
                tracing::warn!("Ignoring persisted session with missing identity fields");

                Session::Anonymous
            }
        }
    }

    /// Persists `identity` as the current session.
    ///
    /// The flag is written last so a partial write never reads back as an
    /// authenticated session.
    pub fn save(&self, identity: &Identity) -> Result<(), StorageError> {
        self.storage.set(FULL_NAME_KEY, &identity.display_name)?;
        self.storage.set(EMAIL_KEY, &identity.email)?;
        self.storage.set(AUTHENTICATED_KEY, "true")?;

        tracing::debug!(email = %identity.email, "Saved session");

        Ok(())
    }

    /// Removes the persisted session, remote state is untouched.
    pub fn clear(&self) {
        self.storage.remove(AUTHENTICATED_KEY);
        self.storage.remove(FULL_NAME_KEY);
        self.storage.remove(EMAIL_KEY);
    }
}
