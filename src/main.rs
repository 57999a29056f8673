/// Main entry point for the Habit Tracker API server
///
/// This file sets up logging, parses command line arguments, and starts the
/// HTTP server. All habit data lives in memory and is lost on exit.

use clap::Parser;
use std::sync::Arc;
use tracing::info;

use habit_tracker_api::{HabitTracker, ServerConfig, DEFAULT_ALLOWED_ORIGINS, DEFAULT_PORT};

/// Command line arguments for the Habit Tracker API server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, env = "HABIT_TRACKER_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "HABIT_TRACKER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Origin allowed to call the API (repeatable, "*" allows any)
    /// If not provided, the local Angular dev server origins are allowed
    #[arg(long = "allowed-origin", env = "HABIT_TRACKER_ALLOWED_ORIGINS", value_delimiter = ',')]
    allowed_origins: Vec<String>,

    /// Load the sample habits at startup
    #[arg(long)]
    seed: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        let allowed_origins = if self.allowed_origins.is_empty() {
            DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
        } else {
            self.allowed_origins.clone()
        };

        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            allowed_origins,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker_api={},tower_http={}", log_level, log_level))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Habit Tracker API server");

    let config = args.server_config();
    info!("Allowed origins: {}", config.allowed_origins.join(", "));

    let tracker = Arc::new(HabitTracker::new());
    if args.seed {
        let habits = tracker.seed_defaults();
        info!("Loaded {} sample habits", habits.len());
    }

    habit_tracker_api::run(config, tracker).await?;

    info!("Habit Tracker API server shutdown complete");
    Ok(())
}
