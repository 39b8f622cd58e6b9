//! Dial-pad contact lookup from the command line.
//!
//! Loads contacts from a TOML file and replays each query one keystroke at a
//! time, printing the contacts still visible after the last key.
//!
//! Run with: cargo run -p dialpad_cli -- --contacts contacts.toml 5646 269

use anyhow::{Context, Result, bail};
use clap::Parser;
use dialpad_core::directory::TomlDirectory;
use dialpad_core::keypad::Normalization;
use dialpad_core::types::AppConfig;
use dialpad_search::{SearchConfig, SearchEngine};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Contacts file (overrides `directory.contacts_path` from the config)
    #[arg(short, long)]
    contacts: Option<PathBuf>,

    /// Path to config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fold accented letters to their base letter when indexing
    #[arg(long)]
    fold: bool,

    /// Digit queries to run. Reads one query per line from stdin when omitted.
    queries: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dialpad=info,dialpad_search=info,dialpad_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let app_config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    for problem in app_config.validate() {
        tracing::warn!("invalid config value, using default: {}", problem);
    }
    let app_config = app_config.with_defaults_for_invalid();

    let mut search_config = SearchConfig::from(&app_config.search);
    if args.fold {
        search_config.normalization = Normalization::Fold;
    }

    let Some(contacts_path) = args.contacts.or(app_config.directory.contacts_path) else {
        bail!("no contacts file given; pass --contacts or set directory.contacts_path");
    };

    let notify = Arc::new(|| tracing::trace!("results changed"));
    let mut engine = SearchEngine::new(search_config, notify);
    let loaded = engine
        .load_from(&TomlDirectory::new(&contacts_path))
        .with_context(|| format!("failed to read contacts from {}", contacts_path.display()))?;
    tracing::info!("loaded {} contacts from {}", loaded, contacts_path.display());

    if args.queries.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("failed to read query from stdin")?;
            run_query(&mut engine, line.trim());
        }
    } else {
        for query in &args.queries {
            run_query(&mut engine, query);
        }
    }

    Ok(())
}

/// Types `query` key by key, then prints the visible contacts.
fn run_query(engine: &mut SearchEngine, query: &str) {
    engine.clear_query();
    for (end, _) in query.char_indices().skip(1) {
        engine.on_query_changed(&query[..end]);
    }
    engine.on_query_changed(query);

    let results = engine.current_results();
    println!("{} ({} of {})", query, results.len(), engine.len());
    for record in results.iter() {
        if record.phone_numbers().is_empty() {
            println!("  {}", record.display_name());
        } else {
            println!("  {}  {}", record.display_name(), record.phone_numbers().join(", "));
        }
    }
}
