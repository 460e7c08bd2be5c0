//! Core library for vibecoding
//!
//! This crate implements the **Functional Core** of the vibecoding service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`vibecoding_core`** (this crate): Pure transformation functions with zero I/O
//! - **`vibecoding`**: HTTP server, completion providers, agent bridge (the Imperative Shell)
//!
//! Everything in here can be tested with fixture strings: no network, no
//! environment, no clock.
//!
//! # Module Organization
//!
//! - [`api`]: Wire payloads for the `/build` and `/deploy` endpoints and their validation
//! - [`generate`]: Generation requests/results, prompt templates, code extraction
//! - [`fallback`]: Deterministic ERC-20 contract used when the provider fails
//! - [`deploy`]: Deploy requests, receipts and deploy-method resolution
//!
//! # Example Usage
//!
//! ```rust
//! use vibecoding_core::fallback::generate_erc20;
//!
//! let code = generate_erc20("Create a loyalty points token");
//! assert!(code.contains("contract Create {"));
//! ```

pub mod api;
pub mod deploy;
pub mod fallback;
pub mod generate;

pub use generate::{extract_code, CompletionRequest, Generation, GenerationRequest, GenerationResult};

/// Input rejected before any external call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Prompt is required")]
    EmptyPrompt,

    #[error("Contract code is required")]
    EmptyCode,

    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),
}
