use url::Url;

use crate::gallery::error::ConfigError;

pub const API_URL_VAR: &str = "GALLERY_API_URL";
pub const DEFAULT_API_URL: &str = "https://68370703664e72d28e432cf6.mockapi.io/";

const CHARACTERS_COLLECTION: &str = "Characters";
const LOGIN_COLLECTION: &str = "login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the mock REST API, always ending in `/`
    pub api_base_url: Url,
}

impl Config {
    /// Builds the configuration from variables captured at compile time.
    ///
    /// The binary runs in the browser, so `GALLERY_API_URL` is read when the
    /// crate is built rather than at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_base_url(option_env!("GALLERY_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn from_base_url(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEnvValue {
            var: API_URL_VAR.to_string(),
            reason,
        };

        let mut api_base_url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if api_base_url.cannot_be_a_base() {
            return Err(invalid(format!("{} cannot be used as a base URL", raw)));
        }

        // Without a trailing slash `join` would replace the last path segment
        if !api_base_url.path().ends_with('/') {
            let path = format!("{}/", api_base_url.path());
            api_base_url.set_path(&path);
        }

        Ok(Self { api_base_url })
    }

    pub fn characters_url(&self) -> Result<Url, url::ParseError> {
        self.api_base_url.join(CHARACTERS_COLLECTION)
    }

    pub fn character_url(&self, id: &str) -> Result<Url, url::ParseError> {
        let mut url = self.characters_url()?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(id);
        Ok(url)
    }

    pub fn login_url(&self) -> Result<Url, url::ParseError> {
        self.api_base_url.join(LOGIN_COLLECTION)
    }
}
