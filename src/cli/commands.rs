//! Subcommand execution
//!
//! Documents go to `out` and user-facing notices to `notices`, so the
//! commands can be driven from tests.

use std::io::Write;

use super::args::{Commands, Verbosity};
use super::display;
use crate::config::Config;
use crate::errors::{GuideError, Result};
use crate::selector::{SelectOptions, Selector};
use crate::store::DocumentStore;

/// Exit code for load and configuration failures
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for usage errors, matching clap
pub const EXIT_USAGE: u8 = 2;

/// Process exit code for a failed command
pub fn exit_code(err: &GuideError) -> u8 {
    match err {
        GuideError::UnknownTopic(_) => EXIT_USAGE,
        GuideError::Load(_)
        | GuideError::Config(_)
        | GuideError::Serialization(_)
        | GuideError::Io(_) => EXIT_FAILURE,
    }
}

/// Execute one subcommand against the given configuration
pub fn execute(
    command: &Commands,
    config: &Config,
    verbosity: Verbosity,
    out: &mut dyn Write,
    notices: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Lookup { query, limit, json } => {
            let store = DocumentStore::load(&config.store)?;
            let limit = limit.unwrap_or(config.selector.default_limit);
            lookup(&store, &query.join(" "), limit, *json, verbosity, out, notices)
        }
        Commands::List => {
            let store = DocumentStore::load(&config.store)?;
            write!(out, "{}", display::render_list(&store))?;
            Ok(())
        }
        Commands::Show { topic } => {
            let store = DocumentStore::load(&config.store)?;
            show(&store, topic, out)
        }
        Commands::Config => {
            write!(out, "{}", config.to_toml()?)?;
            Ok(())
        }
    }
}

/// Print the documents matching `query`; `limit` 0 means unlimited
pub fn lookup(
    store: &DocumentStore,
    query: &str,
    limit: usize,
    json: bool,
    verbosity: Verbosity,
    out: &mut dyn Write,
    notices: &mut dyn Write,
) -> Result<()> {
    let selector = Selector::with_options(store, SelectOptions::with_limit(limit));
    let matches = selector.select_ranked(query);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&matches)?)?;
        return Ok(());
    }

    if matches.is_empty() {
        if verbosity.show_notices() {
            writeln!(notices, "No documents matched '{}'", query.trim())?;
        }
        return Ok(());
    }

    write!(out, "{}", display::render_matches(&matches))?;
    Ok(())
}

/// Print a single document body
pub fn show(store: &DocumentStore, topic: &str, out: &mut dyn Write) -> Result<()> {
    let doc = store
        .get(topic)
        .ok_or_else(|| GuideError::UnknownTopic(topic.to_string()))?;
    writeln!(out, "{}", doc.body())?;
    Ok(())
}
