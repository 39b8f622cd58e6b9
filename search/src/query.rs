//! Search query types.

use dialpad_core::keypad;
use nutype::nutype;

/// Text typed on the dial pad, lowercased.
///
/// Matched literally against fingerprints, so only `'2'..='9'` can ever match.
#[nutype(
    sanitize(with = |s: String| s.to_lowercase()),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, Display)
)]
pub struct KeypadQuery(String);

impl KeypadQuery {
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Returns true if this query is `previous` with zero or more characters appended.
    ///
    /// An empty `previous` is never extended, since it imposes no filter.
    pub fn extends(&self, previous: &KeypadQuery) -> bool {
        !previous.is_empty() && self.starts_with(previous.as_str())
    }

    /// Returns false if the query holds a character no fingerprint can contain.
    pub fn is_satisfiable(&self) -> bool {
        self.chars().all(keypad::is_keypad_digit)
    }
}

impl From<&str> for KeypadQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw.to_string())
    }
}
