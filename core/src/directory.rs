//! Contract with the external contact directory.
//!
//! The search core only consumes the records a provider yields. Permission
//! handling and fetch failures stay on this side of the boundary.

use crate::error::DirectoryError;
use crate::types::RawRecord;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Whether the user has allowed access to the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    Authorized,
    /// The user has not been asked yet.
    NotDetermined,
    Denied,
    Restricted,
}

/// A source of raw contact records.
pub trait DirectoryProvider {
    fn authorization_status(&self) -> AuthorizationStatus;

    /// Asks the user for access. Returns whether access was granted.
    fn request_access(&self) -> Result<bool, DirectoryError>;

    fn fetch_all(&self) -> Result<Vec<RawRecord>, DirectoryError>;
}

/// Fetches every record, asking for access first if it was never requested.
pub fn fetch_authorized(provider: &dyn DirectoryProvider) -> Result<Vec<RawRecord>, DirectoryError> {
    match provider.authorization_status() {
        AuthorizationStatus::Authorized => {}
        AuthorizationStatus::NotDetermined => {
            if !provider.request_access()? {
                return Err(DirectoryError::PermissionDenied);
            }
        }
        AuthorizationStatus::Denied => return Err(DirectoryError::PermissionDenied),
        AuthorizationStatus::Restricted => return Err(DirectoryError::Restricted),
    }

    let records = provider.fetch_all()?;
    tracing::debug!("fetched {} contacts", records.len());
    Ok(records)
}

/// In-memory directory that is always authorized.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    records: Vec<RawRecord>,
}

impl StaticDirectory {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl DirectoryProvider for StaticDirectory {
    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::Authorized
    }

    fn request_access(&self) -> Result<bool, DirectoryError> {
        Ok(true)
    }

    fn fetch_all(&self) -> Result<Vec<RawRecord>, DirectoryError> {
        Ok(self.records.clone())
    }
}

/// Directory backed by a TOML file of `[[contact]]` tables:
///
/// ```toml
/// [[contact]]
/// first_name = "John"
/// last_name = "Smith"
/// phone_numbers = ["555-0100"]
/// ```
#[derive(Debug, Clone)]
pub struct TomlDirectory {
    path: PathBuf,
}

#[derive(Deserialize)]
struct ContactsFile {
    #[serde(default)]
    contact: Vec<RawRecord>,
}

impl TomlDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DirectoryProvider for TomlDirectory {
    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::Authorized
    }

    fn request_access(&self) -> Result<bool, DirectoryError> {
        Ok(true)
    }

    fn fetch_all(&self) -> Result<Vec<RawRecord>, DirectoryError> {
        if !self.path.exists() {
            return Err(DirectoryError::NotFound(self.path.display().to_string()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let file: ContactsFile = toml::from_str(&content)?;
        Ok(file.contact)
    }
}

#[cfg(test)]
mod tests;
