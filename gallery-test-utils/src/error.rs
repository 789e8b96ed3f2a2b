use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    GalleryError(#[from] character_gallery::gallery::error::Error),
    #[error(transparent)]
    StorageError(#[from] character_gallery::gallery::error::StorageError),
}
