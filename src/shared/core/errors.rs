use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("file storage failed: {0}")]
    FileStorage(#[from] std::io::Error),
}
