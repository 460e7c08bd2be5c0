use crate::ValidationError;

/// Source tag reported when the contract came from the fallback template.
pub const FALLBACK_SOURCE: &str = "fallback";

/// A validated request to generate a contract from a natural-language prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// The user's description, trimmed and guaranteed non-empty.
    pub prompt: String,
    /// Whether a matching frontend snippet should be generated as well.
    pub frontend: bool,
}

impl GenerationRequest {
    /// Trim the raw prompt and reject it if nothing is left.
    pub fn new(prompt: &str, frontend: bool) -> Result<Self, ValidationError> {
        let prompt = prompt.trim();

        if prompt.is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        Ok(Self {
            prompt: prompt.to_string(),
            frontend,
        })
    }
}

/// The outcome of the generate-with-fallback flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// Code produced by the named completion provider.
    Provider { provider: String, code: String },
    /// Code produced by the deterministic ERC-20 template.
    Fallback { code: String },
}

impl GenerationResult {
    /// The source tag exposed to clients: the provider name or `"fallback"`.
    pub fn source(&self) -> &str {
        match self {
            GenerationResult::Provider { provider, .. } => provider,
            GenerationResult::Fallback { .. } => FALLBACK_SOURCE,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            GenerationResult::Provider { code, .. } | GenerationResult::Fallback { code } => code,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerationResult::Fallback { .. })
    }
}

/// A contract plus the optional frontend snippet generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub contract: GenerationResult,
    pub frontend: Option<String>,
}

/// A single chat completion call: an optional system message and one user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub preamble: Option<String>,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn user(prompt: String) -> Self {
        Self {
            preamble: None,
            prompt,
        }
    }

    pub fn with_preamble(preamble: &str, prompt: String) -> Self {
        Self {
            preamble: Some(preamble.to_string()),
            prompt,
        }
    }
}
