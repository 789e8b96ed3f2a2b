mod create;
mod delete;
mod filter;
mod list;
