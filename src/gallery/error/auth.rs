use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("You must be logged in")]
    NotLoggedIn,
    #[error("You can only edit your own characters")]
    NotOwnerEdit,
    #[error("You can only delete your own characters")]
    NotOwnerDelete,
    #[error("Character {0} not found")]
    CharacterNotFound(String),
    #[error("No account found with that email.")]
    AccountNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("An account with that email already exists.")]
    EmailTaken,
}
