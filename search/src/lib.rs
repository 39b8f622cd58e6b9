//! Keypad contact search.
//!
//! Filters an in-memory contact list by a digit query typed on a phone
//! keypad. A record is visible when its fingerprint contains the query as a
//! contiguous substring.
//!
//! # Design
//!
//! - Records are indexed once per load; each keeps its precomputed fingerprint.
//! - The visible set is a list of indices into the loaded records, so it is
//!   always an order-preserving subsequence of them.
//! - When a query only grows (a keystroke appended), just the currently
//!   visible records are re-checked.
//! - Every change to the visible set fires the `notify` callback.
//!
//! # API
//!
//! - `load()` / `load_from()`: Replaces the records and shows all of them
//! - `on_query_changed()`: Filters by the typed text
//! - `clear_query()`: Shows every record again
//! - `current_results()`: Borrows the visible records

mod config;
mod engine;
mod query;
mod results;

pub use config::SearchConfig;
pub use dialpad_core::keypad::Normalization;
pub use engine::SearchEngine;
pub use query::KeypadQuery;
pub use results::SearchResults;
