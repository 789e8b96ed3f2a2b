//! Declarative test setup.
//!
//! `TestBuilder` queues remote records, a persisted session, and failing
//! endpoints, then `build()` produces a [`TestSetup`] whose local list already
//! holds what the initial listing of the page would show.

use character_gallery::{
    gallery::session::{MemoryStorage, SessionStore},
    model::{character::Character, login::LoginRecord, session::Identity},
};

use crate::{
    error::TestError,
    fake::{Endpoint, FakeApi},
    setup::TestSetup,
};

#[derive(Default)]
pub struct TestBuilder {
    characters: Vec<Character>,
    logins: Vec<LoginRecord>,
    identity: Option<Identity>,
    failing: Vec<Endpoint>,
    skip_initial_list: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to the remote collection, in insertion order.
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    pub fn with_characters(mut self, characters: impl IntoIterator<Item = Character>) -> Self {
        self.characters.extend(characters);
        self
    }

    pub fn with_login(mut self, login: LoginRecord) -> Self {
        self.logins.push(login);
        self
    }

    /// Persists `identity` as the logged in session.
    pub fn with_session(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Makes `endpoint` fail once the setup is built.
    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.failing.push(endpoint);
        self
    }

    /// Leaves the local list empty instead of listing the collection.
    pub fn without_initial_list(mut self) -> Self {
        self.skip_initial_list = true;
        self
    }

    pub async fn build(self) -> Result<TestSetup, TestError> {
        let api = FakeApi::new();
        for character in self.characters {
            api.insert_character(character);
        }
        for login in self.logins {
            api.insert_login(login);
        }

        let store = SessionStore::new(MemoryStorage::default());
        if let Some(identity) = &self.identity {
            store.save(identity)?;
        }

        let mut setup = TestSetup {
            api: api.clone(),
            store,
            characters: Vec::new(),
        };

        if !self.skip_initial_list {
            let listed = setup.client().list().await?;
            setup.apply(listed);
            api.clear_calls();
        }

        for endpoint in self.failing {
            api.fail(endpoint);
        }

        Ok(setup)
    }
}
