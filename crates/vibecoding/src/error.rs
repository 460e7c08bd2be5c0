use vibecoding_core::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Configuration(String),

    #[error("AgentKit present but no known deploy method. Inspect agent object.")]
    CapabilityNotFound { methods: Vec<String> },

    #[error("{0}")]
    Agent(String),
}
