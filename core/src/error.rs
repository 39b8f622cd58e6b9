use crate::types::AppConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("config error: {0}")]
    Config(#[from] AppConfigError),
}

/// Failures of the contact directory collaborator. The search core never raises these.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("access to contacts was denied")]
    PermissionDenied,

    #[error("access to contacts is restricted")]
    Restricted,

    #[error("contacts source not found: {0}")]
    NotFound(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
