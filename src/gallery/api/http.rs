use dioxus_logger::tracing;
use reqwasm::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    gallery::{
        api::{
            response::{classify, parse_listing, status_error, RequestKind, StatusClass},
            CharacterApi, LoginApi,
        },
        config::Config,
        error::TransportError,
    },
    model::{
        character::{Character, CharacterPayload},
        login::{LoginRecord, RegisterPayload},
    },
};

/// Browser `fetch` client for the mock REST API
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    config: Config,
}

impl HttpApi {
    /// Creates a new instance of [`HttpApi`]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

fn json_request<B: Serialize>(request: Request, body: &B) -> Result<Request, TransportError> {
    Ok(request
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(body)?))
}

async fn send(request: Request) -> Result<Response, TransportError> {
    request
        .send()
        .await
        .map_err(|e| TransportError::Request(e.to_string()))
}

async fn failure(response: Response) -> TransportError {
    let status = response.status();
    let body = response.text().await.ok();

    status_error(status, body)
}

/// Maps a non-2xx response into [`TransportError::Status`]
async fn ensure_success(response: Response) -> Result<Response, TransportError> {
    match classify(response.status(), RequestKind::Collection) {
        StatusClass::Success => Ok(response),
        _ => Err(failure(response).await),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
    response
        .json::<T>()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))
}

impl CharacterApi for HttpApi {
    async fn list_characters(&self) -> Result<Vec<Character>, TransportError> {
        let url = self.config.characters_url()?;

        let response = ensure_success(send(Request::get(url.as_str())).await?).await?;
        let characters = parse_listing(decode(response).await?);

        tracing::debug!(count = characters.len(), "Fetched characters");

        Ok(characters)
    }

    async fn create_character(
        &self,
        payload: &CharacterPayload,
    ) -> Result<Character, TransportError> {
        let url = self.config.characters_url()?;
        let request = json_request(Request::post(url.as_str()), payload)?;

        let response = ensure_success(send(request).await?).await?;

        decode(response).await
    }

    async fn update_character(
        &self,
        id: &str,
        payload: &CharacterPayload,
    ) -> Result<Character, TransportError> {
        let url = self.config.character_url(id)?;
        let request = json_request(Request::put(url.as_str()), payload)?;

        let response = ensure_success(send(request).await?).await?;

        decode(response).await
    }

    async fn delete_character(&self, id: &str) -> Result<(), TransportError> {
        let url = self.config.character_url(id)?;

        ensure_success(send(Request::delete(url.as_str())).await?).await?;

        Ok(())
    }
}

impl LoginApi for HttpApi {
    async fn find_logins(&self, email: &str) -> Result<Vec<LoginRecord>, TransportError> {
        let mut url = self.config.login_url()?;
        url.query_pairs_mut().append_pair("email", email);

        let response = send(Request::get(url.as_str())).await?;

        match classify(response.status(), RequestKind::FilteredLookup) {
            StatusClass::Success => decode(response).await,
            StatusClass::NoMatches => Ok(Vec::new()),
            StatusClass::Failure => Err(failure(response).await),
        }
    }

    async fn create_login(&self, payload: &RegisterPayload) -> Result<LoginRecord, TransportError> {
        let url = self.config.login_url()?;
        let request = json_request(Request::post(url.as_str()), payload)?;

        let response = ensure_success(send(request).await?).await?;

        decode(response).await
    }
}
