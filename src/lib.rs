//! skillbook - style-guide document lookup
//!
//! Holds a fixed set of guidance documents keyed by topic and ranks them
//! against free-text queries by keyword overlap.
//!
//! # Architecture
//!
//! - **store**: read-only document collection (bundled + directory documents)
//! - **selector**: keyword-overlap ranking
//! - **cli**: argument parsing, subcommands, rendering

pub mod errors;
pub use errors::{GuideError, LoadError, Result};

pub mod config;
pub mod store;
pub mod selector;

pub mod cli;
pub mod logging;

pub use config::Config;
pub use selector::{Match, SelectOptions, Selector};
pub use store::{DocumentSource, DocumentStore, GuidanceDocument};
