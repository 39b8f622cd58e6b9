//! Keypad contact lookup core.
//!
//! Maps names to telephone keypad digits (`"John Smith"` -> `"564676484"`) so
//! a digit query typed on a dial pad can be matched as a substring.
//!
//! - [`keypad`]: the fixed letter-to-digit table.
//! - [`indexer`]: builds a record's [`Fingerprint`](types::Fingerprint) from its names.
//! - [`directory`]: the contract for the external contact source.

pub mod directory;
mod error;
pub mod indexer;
pub mod keypad;
pub mod types;

pub use error::{DirectoryError, Error, Result};
