pub mod gallery;
pub mod model;
