mod app;

pub use app::{AppConfig, AppConfigError, DirectorySettings, SearchSettings};
