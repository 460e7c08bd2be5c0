pub mod extract;
pub mod prompt;
pub mod types;

pub use extract::extract_code;
pub use prompt::{build_contract_prompt, build_frontend_prompt};
pub use types::{CompletionRequest, Generation, GenerationRequest, GenerationResult, FALLBACK_SOURCE};
