pub mod character;
pub mod login;
pub mod session;
