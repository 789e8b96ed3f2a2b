//! In-memory stand-in for the mock REST API.
//!
//! Mirrors the store's behavior closely enough for the gallery logic: IDs are
//! assigned sequentially, listing returns insertion order, and the `email`
//! filter on `login` matches substrings. Every call is recorded so tests can
//! assert that rejected operations never reached the network.

use std::{cell::RefCell, collections::HashSet, rc::Rc};

use character_gallery::{
    gallery::{
        api::{CharacterApi, LoginApi},
        error::TransportError,
    },
    model::{
        character::{Character, CharacterPayload},
        login::{LoginRecord, RegisterPayload},
    },
};

/// Remote endpoint, used to make calls to it fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListCharacters,
    CreateCharacter,
    UpdateCharacter,
    DeleteCharacter,
    FindLogins,
    CreateLogin,
}

/// A request as received by the fake API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListCharacters,
    CreateCharacter(CharacterPayload),
    UpdateCharacter(String, CharacterPayload),
    DeleteCharacter(String),
    FindLogins(String),
    CreateLogin(RegisterPayload),
}

#[derive(Debug, Default)]
struct State {
    characters: Vec<Character>,
    logins: Vec<LoginRecord>,
    next_id: u64,
    calls: Vec<ApiCall>,
    failing: HashSet<Endpoint>,
}

impl State {
    fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

/// Clones share the same state
#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    state: Rc<RefCell<State>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `character` as if it had been created remotely.
    pub fn insert_character(&self, character: Character) {
        let mut state = self.state.borrow_mut();
        if let Ok(id) = character.id.parse::<u64>() {
            state.next_id = state.next_id.max(id);
        }
        state.characters.push(character);
    }

    pub fn insert_login(&self, login: LoginRecord) {
        self.state.borrow_mut().logins.push(login);
    }

    /// Makes every following call to `endpoint` answer with a 500.
    pub fn fail(&self, endpoint: Endpoint) {
        self.state.borrow_mut().failing.insert(endpoint);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn call_count(&self) -> usize {
        self.state.borrow().calls.len()
    }

    /// Characters as stored remotely, in insertion order
    pub fn stored_characters(&self) -> Vec<Character> {
        self.state.borrow().characters.clone()
    }

    pub fn stored_logins(&self) -> Vec<LoginRecord> {
        self.state.borrow().logins.clone()
    }

    fn record(&self, call: ApiCall, endpoint: Endpoint) -> Result<(), TransportError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);

        if state.failing.contains(&endpoint) {
            return Err(TransportError::Status {
                status: 500,
                body: "Internal server error".to_string(),
            });
        }

        Ok(())
    }

    fn not_found() -> TransportError {
        TransportError::Status {
            status: 404,
            body: "\"Not found\"".to_string(),
        }
    }
}

fn from_payload(id: String, payload: &CharacterPayload) -> Character {
    Character {
        id,
        name: payload.name.clone(),
        image: payload.image.clone(),
        gender: payload.gender,
        world: Some(payload.world.clone()),
        owner: Some(payload.owner.clone()),
    }
}

impl CharacterApi for FakeApi {
    async fn list_characters(&self) -> Result<Vec<Character>, TransportError> {
        self.record(ApiCall::ListCharacters, Endpoint::ListCharacters)?;

        Ok(self.stored_characters())
    }

    async fn create_character(
        &self,
        payload: &CharacterPayload,
    ) -> Result<Character, TransportError> {
        self.record(ApiCall::CreateCharacter(payload.clone()), Endpoint::CreateCharacter)?;

        let mut state = self.state.borrow_mut();
        let character = from_payload(state.next_id(), payload);
        state.characters.push(character.clone());

        Ok(character)
    }

    async fn update_character(
        &self,
        id: &str,
        payload: &CharacterPayload,
    ) -> Result<Character, TransportError> {
        self.record(
            ApiCall::UpdateCharacter(id.to_string(), payload.clone()),
            Endpoint::UpdateCharacter,
        )?;

        let mut state = self.state.borrow_mut();
        let stored = state
            .characters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(Self::not_found)?;
        *stored = from_payload(id.to_string(), payload);

        Ok(stored.clone())
    }

    async fn delete_character(&self, id: &str) -> Result<(), TransportError> {
        self.record(ApiCall::DeleteCharacter(id.to_string()), Endpoint::DeleteCharacter)?;

        let mut state = self.state.borrow_mut();
        let before = state.characters.len();
        state.characters.retain(|c| c.id != id);
        if state.characters.len() == before {
            return Err(Self::not_found());
        }

        Ok(())
    }
}

impl LoginApi for FakeApi {
    async fn find_logins(&self, email: &str) -> Result<Vec<LoginRecord>, TransportError> {
        self.record(ApiCall::FindLogins(email.to_string()), Endpoint::FindLogins)?;

        let needle = email.to_lowercase();
        Ok(self
            .state
            .borrow()
            .logins
            .iter()
            .filter(|login| login.email.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create_login(&self, payload: &RegisterPayload) -> Result<LoginRecord, TransportError> {
        self.record(ApiCall::CreateLogin(payload.clone()), Endpoint::CreateLogin)?;

        let mut state = self.state.borrow_mut();
        let login = LoginRecord {
            id: Some(state.next_id()),
            email: payload.email.clone(),
            password: payload.password.clone(),
            full_name: payload.full_name.clone(),
        };
        state.logins.push(login.clone());

        Ok(login)
    }
}
