use thiserror::Error;

pub type Result<T> = std::result::Result<T, VendoError>;

#[derive(Error, Debug)]
pub enum VendoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
