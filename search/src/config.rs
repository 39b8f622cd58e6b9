use dialpad_core::keypad::Normalization;
use dialpad_core::types::SearchSettings;

/// Behaviour of a [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Applied to names when records are indexed.
    pub normalization: Normalization,
    /// Re-check only the visible records when the query grows by appended digits.
    pub incremental_narrowing: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::default(),
            incremental_narrowing: true,
        }
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            normalization: settings.normalization,
            incremental_narrowing: settings.incremental_narrowing,
        }
    }
}
