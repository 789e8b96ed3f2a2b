use character_gallery::{
    gallery::{
        auth::AuthService,
        collection::CharacterClient,
        reconcile::{reconcile, Mutation},
        session::{MemoryStorage, SessionStore},
    },
    model::{character::Character, session::Session},
};

use crate::fake::FakeApi;

/// A configured fake API together with the session it was built for
pub struct TestSetup {
    pub api: FakeApi,
    pub store: SessionStore<MemoryStorage>,
    /// Local list as a page would hold it after the initial listing
    pub characters: Vec<Character>,
}

impl TestSetup {
    /// The session as read from storage, the way a page load reads it
    pub fn session(&self) -> Session {
        self.store.load()
    }

    pub fn client(&self) -> CharacterClient<FakeApi> {
        CharacterClient::new(self.api.clone(), self.session())
    }

    pub fn auth(&self) -> AuthService<'_, FakeApi, MemoryStorage> {
        AuthService::new(&self.api, &self.store)
    }

    /// Applies `mutation` to the local list
    pub fn apply(&mut self, mutation: Mutation) {
        self.characters = reconcile(std::mem::take(&mut self.characters), mutation);
    }
}
