use std::sync::Arc;

use async_trait::async_trait;
use vibecoding_core::CompletionRequest;

use crate::config::{ProviderArgs, ProviderKind};
use crate::prelude::*;

pub mod chat;
pub mod ollama;

/// Reasons a completion call can fail.
///
/// Everything but `Configuration` is recovered by the generator's fallback.
#[derive(thiserror::Error, Debug)]
pub enum CompletionError {
    #[error("{0}")]
    Configuration(String),

    #[error("Provider request failed: {0}")]
    Request(String),

    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("Received an empty response from the provider")]
    EmptyResponse,
}

/// A chat completion endpoint.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Name used as the source tag of generated code.
    fn name(&self) -> &str;

    /// Run one completion and return the first choice's text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

pub type DynProvider = Arc<dyn CompletionProvider>;

/// Build the configured provider.
///
/// A missing API key does not fail here: it is reported on the first
/// completion so the server can still start and serve `/deploy`.
pub fn make_provider(args: &ProviderArgs) -> Result<DynProvider> {
    let provider: DynProvider = match args.provider {
        ProviderKind::Ollama => Arc::new(ollama::OllamaProvider::new(&args.base_url(), args.model())?),
        kind => Arc::new(chat::ChatProvider::new(
            kind.name(),
            &args.base_url(),
            args.model(),
            args.api_key(),
            args.api_key_hint(),
            args.provider_timeout,
        )?),
    };

    Ok(provider)
}
