use async_trait::async_trait;
use rig::client::{CompletionClient, Nothing};
use rig::completion::Prompt;
use rig::providers::ollama;
use vibecoding_core::CompletionRequest;

use super::{CompletionError, CompletionProvider};

/// Local generation through an Ollama server.
pub struct OllamaProvider {
    client: ollama::Client,
    model: String,
}

impl OllamaProvider {
    pub fn new(base_url: &str, model: String) -> Result<Self, CompletionError> {
        let client = ollama::Client::builder()
            .api_key(Nothing)
            .base_url(base_url)
            .build()
            .map_err(|e| {
                CompletionError::Configuration(format!("Failed to create Ollama client: {}", e))
            })?;

        Ok(Self { client, model })
    }
}

#[async_trait]
impl CompletionProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let mut builder = self.client.agent(&self.model);
        if let Some(preamble) = &request.preamble {
            builder = builder.preamble(preamble);
        }
        let agent = builder.build();

        let text = agent
            .prompt(&request.prompt)
            .await
            .map_err(|e| CompletionError::Request(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        Ok(text)
    }
}
