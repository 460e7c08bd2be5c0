//! Generate-with-fallback.
//!
//! A contract is always produced: provider failures are logged and replaced
//! by the deterministic ERC-20 template. The only error that reaches the
//! caller is a configuration problem (missing API key), which no amount of
//! fallback content would fix.

use vibecoding_core::fallback::generate_erc20;
use vibecoding_core::generate::extract::strip_fences;
use vibecoding_core::generate::{build_contract_prompt, build_frontend_prompt};
use vibecoding_core::{extract_code, Generation, GenerationRequest, GenerationResult};

use crate::error::Error;
use crate::provider::{CompletionError, DynProvider};

pub struct Generator {
    provider: DynProvider,
}

impl Generator {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate the contract and, when requested, the frontend snippet.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Generation, Error> {
        let contract = self.generate_contract(&request.prompt).await?;

        let frontend = if request.frontend {
            self.generate_frontend(&request.prompt, contract.code()).await
        } else {
            None
        };

        Ok(Generation { contract, frontend })
    }

    pub async fn generate_contract(&self, prompt: &str) -> Result<GenerationResult, Error> {
        let request = build_contract_prompt(prompt);

        let completion = match self.provider.complete(&request).await {
            Ok(text) => match extract_code(&text) {
                code if code.is_empty() => Err(CompletionError::EmptyResponse),
                code => Ok(code),
            },
            Err(err) => Err(err),
        };

        match completion {
            Ok(code) => Ok(GenerationResult::Provider {
                provider: self.provider_name().to_string(),
                code,
            }),
            Err(CompletionError::Configuration(message)) => Err(Error::Configuration(message)),
            Err(err) => {
                log::warn!(
                    "{} completion failed, returning the fallback contract: {err}",
                    self.provider_name()
                );
                Ok(GenerationResult::Fallback {
                    code: generate_erc20(prompt),
                })
            }
        }
    }

    /// Best effort: failures are logged and yield `None`.
    pub async fn generate_frontend(&self, prompt: &str, contract: &str) -> Option<String> {
        let request = build_frontend_prompt(prompt, contract);

        match self.provider.complete(&request).await {
            Ok(text) => Some(strip_fences(&text)).filter(|code| !code.is_empty()),
            Err(err) => {
                log::warn!(
                    "{} frontend completion failed: {err}",
                    self.provider_name()
                );
                None
            }
        }
    }
}
