use dioxus_logger::tracing;

use crate::{
    gallery::{
        api::LoginApi,
        error::{AuthError, Error},
        session::{SessionStorage, SessionStore},
        validate::{validate_login, validate_register},
    },
    model::{
        login::{LoginForm, LoginRecord, RegisterForm, RegisterPayload},
        session::Identity,
    },
};

/// Login, registration, and logout against the mock `login` collection.
///
/// The mock store returns account records with their password and the check
/// is a plain comparison in the browser. This gates the UI only; it is not
/// credential verification.
pub struct AuthService<'a, A, S> {
    api: &'a A,
    store: &'a SessionStore<S>,
}

impl<'a, A: LoginApi, S: SessionStorage> AuthService<'a, A, S> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(api: &'a A, store: &'a SessionStore<S>) -> Self {
        Self { api, store }
    }

    /// Logs in with `form`, persisting the session on success.
    ///
    /// # Returns
    /// - `Ok(Identity)`: The identity now stored in the session
    /// - `Err(Error::Validation(_))`: Email or password missing or malformed
    /// - `Err(Error::Auth(AuthError::AccountNotFound))`: No account has that email
    /// - `Err(Error::Auth(AuthError::IncorrectPassword))`: Password does not match
    /// - `Err(Error::Transport(_))` / `Err(Error::Storage(_))`: Request or
    ///   session write failed
    pub async fn login(&self, form: &LoginForm) -> Result<Identity, Error> {
        validate_login(form)?;

        let account = self
            .find_account(&form.email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if account.password != form.password {
            tracing::debug!(email = %form.email, "Login rejected");

            return Err(AuthError::IncorrectPassword.into());
        }

        let identity = Identity {
            display_name: account.full_name,
            email: account.email,
        };
        self.store.save(&identity)?;

        tracing::info!(email = %identity.email, "Logged in");

        Ok(identity)
    }

    /// Registers a new account; the caller is not logged in afterwards.
    ///
    /// # Returns
    /// - `Ok(LoginRecord)`: The account as stored
    /// - `Err(Error::Validation(_))`: A form field is missing or malformed
    /// - `Err(Error::Auth(AuthError::EmailTaken))`: The email is already registered,
    ///   nothing was created
    /// - `Err(Error::Transport(_))`: A request failed
    pub async fn register(&self, form: &RegisterForm) -> Result<LoginRecord, Error> {
        validate_register(form)?;

        if self.find_account(&form.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let account = self
            .api
            .create_login(&RegisterPayload {
                email: form.email.clone(),
                password: form.password.clone(),
                full_name: form.full_name.trim().to_string(),
            })
            .await?;

        tracing::info!(email = %account.email, "Registered account");

        Ok(account)
    }

    /// Removes the persisted session.
    pub fn logout(&self) {
        self.store.clear();

        tracing::info!("Logged out");
    }

    /// The account whose email equals `email`.
    ///
    /// The `email` query filter of the mock store matches substrings, so the
    /// result is narrowed to an exact, case-insensitive match.
    async fn find_account(&self, email: &str) -> Result<Option<LoginRecord>, Error> {
        let accounts = self.api.find_logins(email).await?;

        Ok(accounts
            .into_iter()
            .find(|account| account.email.eq_ignore_ascii_case(email)))
    }
}
