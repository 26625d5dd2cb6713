//! Command-line argument parsing for skillbook
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// skillbook - Look up style-guide documents by topic or keyword
#[derive(Parser, Debug)]
#[command(name = "skillbook")]
#[command(version)]
#[command(about = "Look up style-guide documents by topic or keyword", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of additional guidance documents
    #[arg(long, global = true)]
    pub docs_dir: Option<PathBuf>,

    /// Skip the documents bundled with skillbook
    #[arg(long, global = true)]
    pub no_builtin: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the documents matching a query, best match first
    Lookup {
        /// Query words or topic tags (empty = all documents)
        #[arg(value_name = "QUERY")]
        query: Vec<String>,

        /// Maximum number of documents to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print ranked matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every document with its tags
    List,

    /// Print a single document by topic
    Show {
        /// Topic identifier
        topic: String,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags, falling back to the configured default
    pub fn verbosity(&self, default: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => default,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(dir) = &self.docs_dir {
            config.store.docs_dir = Some(dir.to_string_lossy().to_string());
        }
        if self.no_builtin {
            config.store.include_builtin = false;
        }
        if self.no_color {
            config.output.color_output = false;
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse the configuration spelling; unknown values fall back to normal
    pub fn from_config(value: &str) -> Self {
        match value {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "very_verbose" => Verbosity::VeryVerbose,
            _ => Verbosity::Normal,
        }
    }

    /// Default log filter directive for this level
    pub fn log_level(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if should print informational notices
    pub fn show_notices(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("skillbook").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_lookup_collects_words() {
        let args = parse(&["lookup", "code", "review"]);
        match args.command {
            Commands::Lookup { query, .. } => assert_eq!(query, vec!["code", "review"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_without_query() {
        let args = parse(&["lookup"]);
        match args.command {
            Commands::Lookup { query, limit, json } => {
                assert!(query.is_empty());
                assert!(limit.is_none());
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_flags() {
        let args = parse(&["lookup", "naming", "-n", "2", "--json"]);
        assert_eq!(
            args.command,
            Commands::Lookup {
                query: vec!["naming".to_string()],
                limit: Some(2),
                json: true,
            }
        );
    }

    #[test]
    fn test_show_requires_topic() {
        let result = Args::try_parse_from(["skillbook", "show"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Args::try_parse_from(["skillbook"]).is_err());
    }

    #[test]
    fn test_verbosity_quiet() {
        let args = parse(&["-q", "list"]);
        assert_eq!(args.verbosity(Verbosity::Verbose), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_default_from_config() {
        let args = parse(&["list"]);
        assert_eq!(args.verbosity(Verbosity::Verbose), Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_very_verbose() {
        let args = parse(&["list", "-vv"]);
        assert_eq!(args.verbosity(Verbosity::Normal), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_apply_overrides() {
        let args = parse(&["--docs-dir", "/tmp/guides", "--no-builtin", "--no-color", "list"]);
        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config.store.docs_dir.as_deref(), Some("/tmp/guides"));
        assert!(!config.store.include_builtin);
        assert!(!config.output.color_output);
    }

    #[test]
    fn test_verbosity_methods() {
        assert_eq!(Verbosity::from_config("very_verbose"), Verbosity::VeryVerbose);
        assert_eq!(Verbosity::from_config("bogus"), Verbosity::Normal);
        assert_eq!(Verbosity::Quiet.log_level(), "error");
        assert_eq!(Verbosity::VeryVerbose.as_str(), "very_verbose");
        assert!(!Verbosity::Quiet.show_notices());
        assert!(Verbosity::Normal.show_notices());
    }
}
