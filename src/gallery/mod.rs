pub mod api;
pub mod auth;
pub mod collection;
pub mod config;
pub mod error;
pub mod filter;
pub mod reconcile;
pub mod session;
pub mod toast;
pub mod validate;
