//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::dashboard::ActiveView;
use clap::Parser;
use std::path::PathBuf;

/// CourseDash - instructor dashboard from a local storage snapshot
///
/// Reads lectures, enrolled students and the signed-in user from a
/// JSON dump of the browser's local storage and renders the
/// instructor dashboard as Markdown or JSON.
///
/// Examples:
///   coursedash --store dashboard_store.json
///   coursedash --store dashboard_store.json --view students
///   coursedash --store dashboard_store.json --format json --output dashboard.json
///   coursedash --store dashboard_store.json --logout
///   coursedash --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Local storage snapshot to read
    ///
    /// A JSON object mapping storage keys (user, courseLectures,
    /// enrolledStudents) to their stored values. A missing file is
    /// treated as an empty store.
    #[arg(short, long, value_name = "FILE", env = "COURSEDASH_STORE")]
    pub store: Option<PathBuf>,

    /// Dashboard section to render
    #[arg(long, default_value = "overview", value_name = "VIEW")]
    pub view: ActiveView,

    /// Output file path (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Number of lectures listed under "Recent Lectures"
    #[arg(long, value_name = "COUNT")]
    pub recent_lectures: Option<usize>,

    /// Number of students listed under "Top Students"
    #[arg(long, value_name = "COUNT")]
    pub top_students: Option<usize>,

    /// Seed for the synthesized lecture views/completions
    ///
    /// Without a seed the numbers differ on every run.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Sign out: remove the stored user and return to the landing page
    #[arg(long)]
    pub logout: bool,

    /// Path to configuration file
    ///
    /// If not specified, looks for .coursedash.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .coursedash.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.recent_lectures == Some(0) {
            return Err("Recent lectures must be at least 1".to_string());
        }

        if self.top_students == Some(0) {
            return Err("Top students must be at least 1".to_string());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref store) = self.store {
            if store.is_dir() {
                return Err(format!("Store path is a directory: {}", store.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
