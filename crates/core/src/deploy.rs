use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Agent method that deploys a contract directly.
pub const DIRECT_METHOD: &str = "deployContract";

/// Agent method that deploys a contract through the agent's utilities.
pub const UTILS_METHOD: &str = "utils.deployContract";

/// A validated deployment request.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployRequest {
    pub code: String,
    pub constructor_args: Vec<serde_json::Value>,
}

impl DeployRequest {
    /// Reject missing or blank contract code.
    ///
    /// The code itself is forwarded untouched; only the emptiness check trims.
    pub fn new(
        code: Option<String>,
        constructor_args: Option<Vec<serde_json::Value>>,
    ) -> Result<Self, ValidationError> {
        match code {
            Some(code) if !code.trim().is_empty() => Ok(Self {
                code,
                constructor_args: constructor_args.unwrap_or_default(),
            }),
            _ => Err(ValidationError::EmptyCode),
        }
    }
}

/// Which agent capability performed a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeployMethod {
    Direct,
    Utils,
}

impl DeployMethod {
    /// Name of the agent method backing this capability.
    pub fn method_name(&self) -> &'static str {
        match self {
            DeployMethod::Direct => DIRECT_METHOD,
            DeployMethod::Utils => UTILS_METHOD,
        }
    }

    /// Human readable description returned as `info` to clients.
    pub fn info(&self) -> String {
        format!("deployed via agent.{}", self.method_name())
    }
}

/// Pick the deploy capability from the agent's advertised methods.
///
/// `deployContract` wins over `utils.deployContract`.
pub fn resolve_deploy_method<S: AsRef<str>>(methods: &[S]) -> Option<DeployMethod> {
    let has = |name: &str| methods.iter().any(|m| m.as_ref() == name);

    if has(DIRECT_METHOD) {
        Some(DeployMethod::Direct)
    } else if has(UTILS_METHOD) {
        Some(DeployMethod::Utils)
    } else {
        None
    }
}

/// What the agent returned for a successful deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployReceipt {
    pub method: DeployMethod,
    pub result: serde_json::Value,
}
