//! CourseDash - instructor dashboard from local storage
//!
//! A CLI tool that reads lectures, enrolled students and the
//! signed-in user from a snapshot of the browser's local storage and
//! renders the instructor dashboard.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad arguments, config, output failure, etc.)

mod analysis;
mod cli;
mod config;
mod dashboard;
mod error;
mod models;
mod report;
mod store;

use analysis::RandomEngagement;
use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::{Config, CONFIG_FILE_NAME};
use dashboard::{LoggingNavigator, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use store::JsonFileStore;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("CourseDash v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("Dashboard failed: {}", e);
        eprintln!("\nError: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .coursedash.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!("{} already exists. Remove it first or edit it manually.", CONFIG_FILE_NAME);
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to set your store path, list sizes and courses.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so rendered output on stdout stays clean.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load the store, then either sign out or render the requested view.
fn run(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);
    config.validate()?;

    let store_path = PathBuf::from(&config.store.path);
    let mut store = JsonFileStore::open(&store_path);
    let mut session = Session::new();

    if args.logout {
        let mut navigator = LoggingNavigator::default();
        dashboard::logout_and_persist(&mut store, &mut session, &mut navigator)
            .context("Failed to sign out")?;
        info!("Signed out; updated {}", store.path().display());
        return Ok(());
    }

    session.select(args.view);

    let courses = config.catalogue();
    let limits = config.list_limits();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engagement = RandomEngagement::new(rng);

    let view_model = dashboard::load_dashboard(&store, &courses, limits, &mut engagement);

    let output = match args.format {
        OutputFormat::Json => report::generate_json(&view_model)?,
        OutputFormat::Markdown => report::generate_markdown(&view_model, &session),
    };

    if config.general.output.is_empty() {
        println!("{}", output);
    } else {
        let path = Path::new(&config.general.output);
        std::fs::write(path, &output)
            .with_context(|| format!("Failed to write dashboard to {}", path.display()))?;
        info!("Dashboard saved to {}", path.display());
    }

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", CONFIG_FILE_NAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
