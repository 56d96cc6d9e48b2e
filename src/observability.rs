//! # Observability
//!
//! Structured logging setup for the importer. Formatting is selected by the
//! `LOG_FORMAT` environment variable: pretty output for development, JSON for
//! everything else.

use anyhow::Result;
use tracing_subscriber::prelude::*;

/// Initialize structured logging with tracing
pub fn init_tracing() -> Result<()> {
    // Determine log format from environment variable (default to JSON for production)
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    // Create the filter
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("recipe_importer=info".parse()?)
        .add_directive("sqlx=warn".parse()?);

    // Initialize based on format
    if log_format == "pretty" {
        // Pretty formatting for development
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .init();
    } else {
        // JSON formatting for production (default)
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true),
            )
            .init();
    }

    tracing::info!(log_format = %log_format, "Tracing initialized with structured logging");
    Ok(())
}
