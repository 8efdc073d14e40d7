//! staticguard entry point.
//!
//! Initializes logging, loads configuration, and starts the HTTP server
//! with a file service rooted at the configured base directory.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use staticguard::core::{Config, Containment};
use staticguard::domains::files::FileService;
use staticguard::server::HttpServer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // The base directory is trusted operator configuration; refusing to
    // start without it is the one fatal outcome in the error policy.
    let base_dir = config
        .security
        .base_dir
        .clone()
        .context("GUARD_BASE_DIR must be set to an absolute directory")?;
    let containment =
        Containment::new(base_dir).context("GUARD_BASE_DIR is not a usable base directory")?;

    info!("Serving files under {}", containment.base().display());

    let files = FileService::new(containment);
    let server = HttpServer::new(config.http);

    server.run(files).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
