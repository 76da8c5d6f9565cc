use thiserror::Error;

/// Errors raised while building contact records from external input.
#[derive(Error, Debug)]
pub enum VcardError {
    #[error("Invalid attributes JSON: {0}")]
    InvalidAttributes(#[from] serde_json::Error),

    #[error("Attributes must be a JSON object")]
    NotAnObject,
}

pub type VcardResult<T> = std::result::Result<T, VcardError>;
