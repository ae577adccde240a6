//! Console Companion - Personal Console Assistant
//!
//! A small interactive assistant with a persisted task list and optional
//! AI-backed question answering.

// Use the library crate for all modules
use console_companion::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (WARN level by default, use RUST_LOG=info for debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into())
        )
        .init();

    // Run CLI
    cli::run().await
}
