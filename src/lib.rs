//! Console Companion - Personal Console Assistant Library
//!
//! A single-user, menu-driven console assistant with:
//! - Onboarding (name, age) and a small set of canned utilities
//! - A free-text task list persisted across runs
//! - Optional AI question answering via the OpenRouter API
//!
//! # Example
//!
//! ```ignore
//! use console_companion::assistant::{AssistantGateway, OpenRouterGateway};
//! use console_companion::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let gateway = OpenRouterGateway::from_config(&config);
//!     let answer = gateway.ask("What is ownership in Rust?").await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```

pub mod assistant;
pub mod cli;
pub mod config;
pub mod console;
pub mod security;
pub mod session;
pub mod tasks;

// Re-export commonly used types for convenience
pub use assistant::{AiError, AssistantGateway, OpenRouterGateway};
pub use config::Config;
pub use console::{BufferedIo, InputError, LineIo, StdConsole};
pub use tasks::TaskStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
