/// Public library interface for the Habit Tracker API server
/// 
/// This module exports the tracker component that owns the in-memory stores,
/// the HTTP router built on top of it, and the public domain types.

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod tools;
mod api;

// Re-export public modules and types
pub use domain::*;
pub use storage::{CompletionLedger, CompletionMap, HabitStorage, HabitStore, UpsertOutcome};
pub use tools::{PeriodProgress, SAMPLE_HABITS};
pub use api::{router, ApiError};

/// Default port the server listens on
pub const DEFAULT_PORT: u16 = 8081;

/// Origins allowed to call the API when none are configured
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:4200", "http://127.0.0.1:4200"];

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS, e.g. `http://localhost:4200`
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// Parse the configured host and port into a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid listen address {}:{}: {}", self.host, self.port, e)))
    }
}

/// The habit registry and completion ledger, owned together
/// 
/// One tracker lives for the whole process and is shared with every request
/// handler. Nothing is persisted.
#[derive(Debug, Default)]
pub struct HabitTracker {
    habits: HabitStore,
    completions: CompletionLedger,
}

impl HabitTracker {
    /// Create a tracker with empty stores
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Habits ordered by time of day, untimed habits first
    pub fn list_habits(&self) -> Vec<Habit> {
        tools::list_habits(&self.habits)
    }
    
    /// Validate and insert or replace a habit
    pub fn add_habit(&self, habit: Habit) -> Result<UpsertOutcome, DomainError> {
        tools::add_habit(&self.habits, habit)
    }
    
    /// Delete a habit and its completions; unknown ids are a no-op
    pub fn delete_habit(&self, habit_id: &str) -> bool {
        tools::delete_habit(&self.habits, &self.completions, habit_id)
    }
    
    /// Completion flags for a period instance
    pub fn completions(&self, period: &str, period_key: &str) -> CompletionMap {
        tools::get_completions(&self.completions, period, period_key)
    }
    
    /// Set one completion flag and return the updated bucket
    pub fn set_completion(
        &self,
        period: &str,
        period_key: &str,
        payload: CompletionPayload,
    ) -> Result<CompletionMap, DomainError> {
        tools::set_completion(&self.completions, period, period_key, payload)
    }
    
    /// Replace all habits with the sample set
    pub fn seed_defaults(&self) -> Vec<Habit> {
        tools::seed_defaults(&self.habits, &self.completions)
    }
    
    /// Progress per period for the period instances containing `date`
    pub fn dashboard(&self, date: chrono::NaiveDate) -> Vec<PeriodProgress> {
        tools::dashboard(&self.habits, &self.completions, date)
    }
    
    /// Empty both stores
    pub fn reset(&self) {
        self.habits.clear();
        self.completions.clear();
    }
    
    /// Get a reference to the habit registry (useful for testing)
    pub fn habit_store(&self) -> &HabitStore {
        &self.habits
    }
    
    /// Get a reference to the completion ledger (useful for testing)
    pub fn completion_ledger(&self) -> &CompletionLedger {
        &self.completions
    }
}

/// Serve the API until the process receives Ctrl+C
pub async fn run(config: ServerConfig, tracker: Arc<HabitTracker>) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let app = api::router(tracker, &config.allowed_origins)?;
    
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Habit Tracker API listening on http://{}", listener.local_addr()?);
    
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server simply runs until killed
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
