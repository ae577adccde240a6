//! Assistant gateway - the external question-answering capability
//!
//! The session talks to a [`AssistantGateway`] trait object so the state
//! machine can be tested without any network dependency. The production
//! implementation lives in [`openrouter`].

pub mod openrouter;

pub use openrouter::OpenRouterGateway;

use async_trait::async_trait;
use thiserror::Error;

/// Why the assistant could not answer
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key could be found; no network interaction was attempted
    #[error("no API key configured")]
    MissingCredential,
    /// The single best-effort call failed (network, bad response, no answer)
    #[error("assistant call failed: {0}")]
    CallFailed(String),
}

/// A capability that answers one free-text question
#[async_trait]
pub trait AssistantGateway {
    /// Ask one question and return the answer text verbatim.
    ///
    /// Callers must not pass an empty question; that case is handled
    /// locally before the gateway is involved.
    async fn ask(&self, question: &str) -> Result<String, AiError>;
}
