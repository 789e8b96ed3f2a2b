//! Synchronous form validation.
//!
//! Each validator checks fields in the order the form displays them and
//! returns the first failure, so the user sees one message at a time.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::{
    gallery::error::ValidationError,
    model::{
        character::CharacterDraft,
        login::{LoginForm, RegisterForm},
    },
};

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern is valid")
});

/// Validates a character draft before it is sent as a create or update.
///
/// # Behavior
/// - `name` and `world` must be non-empty after trimming
/// - `image` must be non-empty and parse as an absolute URL
pub fn validate_draft(draft: &CharacterDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if draft.image.trim().is_empty() {
        return Err(ValidationError::ImageRequired);
    }
    if Url::parse(&draft.image).is_err() {
        return Err(ValidationError::InvalidImageUrl);
    }
    if draft.world.trim().is_empty() {
        return Err(ValidationError::WorldRequired);
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    validate_email(&form.email)?;
    if form.password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }

    Ok(())
}

pub fn validate_register(form: &RegisterForm) -> Result<(), ValidationError> {
    if form.full_name.trim().is_empty() {
        return Err(ValidationError::FullNameRequired);
    }
    validate_email(&form.email)?;
    if form.password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}
