use crate::indexer;
use crate::keypad::Normalization;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directory entry as yielded by a [`DirectoryProvider`](crate::directory::DirectoryProvider).
///
/// Every field is optional; a missing name is indexed as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_numbers: Vec<String>,
}

impl RawRecord {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone_numbers: Vec::new(),
        }
    }

    pub fn with_phone_number(mut self, number: impl Into<String>) -> Self {
        self.phone_numbers.push(number.into());
        self
    }
}

/// Keypad digits derived from a record's name. Contains only `'2'..='9'`.
///
/// Only the indexer can build one, so the digit invariant holds for every value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub(crate) fn from_digits(digits: String) -> Self {
        debug_assert!(digits.chars().all(crate::keypad::is_keypad_digit));
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `digits` occurs as a contiguous run in this fingerprint.
    pub fn contains(&self, digits: &str) -> bool {
        self.0.contains(digits)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An indexed directory entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    first_name: String,
    last_name: String,
    phone_numbers: Vec<String>,
    fingerprint: Fingerprint,
}

impl Record {
    pub fn from_raw(raw: RawRecord) -> Self {
        Self::from_raw_with(raw, Normalization::Never)
    }

    pub fn from_raw_with(raw: RawRecord, normalization: Normalization) -> Self {
        let first_name = raw.first_name.unwrap_or_default();
        let last_name = raw.last_name.unwrap_or_default();
        let fingerprint = indexer::build_fingerprint_with(&first_name, &last_name, normalization);

        Self {
            first_name,
            last_name,
            phone_numbers: raw.phone_numbers,
            fingerprint,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_numbers(&self) -> &[String] {
        &self.phone_numbers
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// `first_name + " " + last_name`, the text shown in a result row.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Self::from_raw(raw)
    }
}
