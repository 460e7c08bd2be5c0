/// Completion backends the generator can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProviderKind {
    /// Groq chat completions (OpenAI compatible)
    Groq,
    /// OpenAI chat completions
    Openai,
    /// Lovable AI gateway (OpenAI compatible)
    Gateway,
    /// Local Ollama server
    Ollama,
}

impl ProviderKind {
    /// Name reported as the source tag of generated code.
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "groq",
            ProviderKind::Openai => "openai",
            ProviderKind::Gateway => "gateway",
            ProviderKind::Ollama => "ollama",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "llama3-8b-8192",
            ProviderKind::Openai => "gpt-4o-mini",
            ProviderKind::Gateway => "google/gemini-2.5-flash",
            ProviderKind::Ollama => "llama3",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "https://api.groq.com/openai/v1",
            ProviderKind::Openai => "https://api.openai.com/v1",
            ProviderKind::Gateway => "https://ai.gateway.lovable.dev/v1",
            ProviderKind::Ollama => "http://localhost:11434",
        }
    }

    /// Provider specific environment variable holding the API key.
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            ProviderKind::Groq => Some("GROQ_API_KEY"),
            ProviderKind::Openai => Some("OPENAI_API_KEY"),
            ProviderKind::Gateway => Some("LOVABLE_API_KEY"),
            ProviderKind::Ollama => None,
        }
    }

    pub fn requires_api_key(&self) -> bool {
        self.api_key_env().is_some()
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProviderArgs {
    /// Completion provider used to generate code
    #[clap(long, env = "VIBE_PROVIDER", global = true, value_enum, default_value = "groq")]
    pub provider: ProviderKind,

    /// Model name (defaults to the provider's default model)
    #[clap(long, env = "VIBE_MODEL", global = true)]
    pub model: Option<String>,

    /// Provider API key (falls back to GROQ_API_KEY, OPENAI_API_KEY or LOVABLE_API_KEY)
    #[clap(long, env = "VIBE_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Provider base URL (defaults to the provider's public endpoint)
    #[clap(long, env = "VIBE_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Timeout in seconds for provider calls (no timeout when unset)
    #[clap(long, env = "VIBE_PROVIDER_TIMEOUT", global = true)]
    pub provider_timeout: Option<u64>,
}

impl ProviderArgs {
    pub fn model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.provider.default_model().to_string())
    }

    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.provider.default_base_url().to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// The explicit key, or the provider specific environment variable. Blank keys count as missing.
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| {
                self.provider
                    .api_key_env()
                    .and_then(|name| std::env::var(name).ok())
            })
            .filter(|key| !key.trim().is_empty())
    }

    /// Name of the variable users should set when the key is missing.
    pub fn api_key_hint(&self) -> &'static str {
        self.provider.api_key_env().unwrap_or("VIBE_API_KEY")
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct AgentArgs {
    /// JSON-RPC endpoint of the agent bridge
    #[clap(long, env = "AGENT_URL", default_value = "http://127.0.0.1:3001/rpc")]
    pub agent_url: String,

    /// Private key the agent signs deployments with
    #[clap(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// RPC URL of the target chain
    #[clap(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// Chain id of the target chain
    #[clap(long, env = "CHAIN_ID", default_value = "80001")]
    pub chain_id: u64,
}
