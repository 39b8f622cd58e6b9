pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, DirectorySettings, SearchSettings};

pub(crate) mod record;
pub use record::{Fingerprint, RawRecord, Record};
