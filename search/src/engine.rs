//! Search engine over a loaded contact list.

use crate::config::SearchConfig;
use crate::query::KeypadQuery;
use crate::results::SearchResults;
use dialpad_core::DirectoryError;
use dialpad_core::directory::{self, DirectoryProvider};
use dialpad_core::types::{RawRecord, Record};
use std::sync::Arc;

/// Keypad search over a contact list.
///
/// All operations run synchronously on the caller's thread. The visible set is
/// derived from the loaded records and the current query only.
pub struct SearchEngine {
    records: Vec<Record>,
    /// Indices into `records`, ascending.
    visible: Vec<usize>,
    query: KeypadQuery,
    config: SearchConfig,
    notify: Arc<dyn Fn() + Send + Sync>,
}

/// Create operations.
impl SearchEngine {
    /// Creates an empty engine.
    ///
    /// The `notify` callback is invoked after every change to the visible
    /// records. This is typically used to trigger a list re-render.
    pub fn new(config: SearchConfig, notify: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self {
            records: Vec::new(),
            visible: Vec::new(),
            query: KeypadQuery::empty(),
            config,
            notify,
        }
    }
}

/// Load operations.
impl SearchEngine {
    /// Replaces all records, in input order, and shows every one of them.
    pub fn load(&mut self, raw_records: impl IntoIterator<Item = RawRecord>) {
        let normalization = self.config.normalization;
        self.records = raw_records
            .into_iter()
            .map(|raw| Record::from_raw_with(raw, normalization))
            .collect();
        self.visible = (0..self.records.len()).collect();
        self.query = KeypadQuery::empty();

        tracing::debug!("indexed {} contacts", self.records.len());
        (self.notify)();
    }

    /// Fetches from `provider` and loads the result.
    ///
    /// On failure nothing is loaded and the engine keeps its previous state.
    /// Returns the number of records loaded.
    pub fn load_from(&mut self, provider: &dyn DirectoryProvider) -> Result<usize, DirectoryError> {
        match directory::fetch_authorized(provider) {
            Ok(raw_records) => {
                self.load(raw_records);
                Ok(self.records.len())
            }
            Err(err) => {
                tracing::warn!("contacts unavailable, keeping current list: {}", err);
                Err(err)
            }
        }
    }
}

/// Search operations.
impl SearchEngine {
    /// Filters to records whose fingerprint contains the lowercased `raw_query`.
    ///
    /// An empty query behaves like [`clear_query`](Self::clear_query).
    pub fn on_query_changed(&mut self, raw_query: &str) {
        let query = KeypadQuery::from(raw_query);
        if query.is_empty() {
            self.clear_query();
            return;
        }

        let narrowing = self.config.incremental_narrowing && query.extends(&self.query);

        self.visible = if !query.is_satisfiable() {
            Vec::new()
        } else if narrowing {
            self.filter(self.visible.iter().copied(), &query)
        } else {
            self.filter(0..self.records.len(), &query)
        };

        tracing::debug!(
            query = %query,
            narrowing,
            visible = self.visible.len(),
            "query changed"
        );
        self.query = query;
        (self.notify)();
    }

    /// Shows every loaded record again.
    pub fn clear_query(&mut self) {
        self.query = KeypadQuery::empty();
        self.visible = (0..self.records.len()).collect();
        (self.notify)();
    }

    /// Cancel action from the presentation layer.
    pub fn on_query_cleared(&mut self) {
        self.clear_query();
    }

    pub fn current_results(&self) -> SearchResults<'_> {
        SearchResults {
            records: &self.records,
            visible: &self.visible,
        }
    }

    fn filter(&self, candidates: impl Iterator<Item = usize>, query: &KeypadQuery) -> Vec<usize> {
        candidates
            .filter(|&index| self.records[index].fingerprint().contains(query.as_str()))
            .collect()
    }
}

/// Inspection operations.
impl SearchEngine {
    pub fn query(&self) -> &KeypadQuery {
        &self.query
    }

    pub fn all_records(&self) -> &[Record] {
        &self.records
    }

    /// Number of loaded records, visible or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
