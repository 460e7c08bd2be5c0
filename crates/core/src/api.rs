//! Wire payloads of the HTTP API.
//!
//! Request bodies are parsed leniently: an empty body is treated as `{}` so
//! that a missing prompt or missing code is reported as a validation error
//! rather than a framework-level rejection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::deploy::{DeployReceipt, DeployRequest};
use crate::generate::{Generation, GenerationRequest};
use crate::ValidationError;

/// Body of `POST /build`.
#[derive(Debug, Default, Deserialize)]
pub struct BuildPayload {
    #[serde(default)]
    pub prompt: Option<serde_json::Value>,
    #[serde(default)]
    pub frontend: Option<bool>,
}

impl BuildPayload {
    /// Validate the payload into a [`GenerationRequest`].
    ///
    /// Non-string prompts are stringified before trimming.
    pub fn into_request(self) -> Result<GenerationRequest, ValidationError> {
        let prompt = match self.prompt {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(prompt)) => prompt,
            Some(other) => other.to_string(),
        };

        GenerationRequest::new(&prompt, self.frontend.unwrap_or(false))
    }
}

/// Body of `POST /deploy`.
#[derive(Debug, Default, Deserialize)]
pub struct DeployPayload {
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default, rename = "constructorArgs")]
    pub constructor_args: Option<Vec<serde_json::Value>>,
}

impl DeployPayload {
    /// Validate the payload into a [`DeployRequest`]. Non-string code is rejected.
    pub fn into_request(self) -> Result<DeployRequest, ValidationError> {
        let code = match self.code {
            Some(serde_json::Value::String(code)) => Some(code),
            _ => None,
        };

        DeployRequest::new(code, self.constructor_args)
    }
}

/// Parse a JSON request body, treating an empty body as the default payload.
pub fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| ValidationError::MalformedBody(e.to_string()))
}

/// Successful `POST /build` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResponse {
    pub success: bool,
    pub source: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<String>,
}

impl From<Generation> for BuildResponse {
    fn from(generation: Generation) -> Self {
        Self {
            success: true,
            source: generation.contract.source().to_string(),
            code: generation.contract.code().to_string(),
            frontend: generation.frontend,
        }
    }
}

/// Successful `POST /deploy` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeployResponse {
    pub success: bool,
    pub info: String,
    pub result: serde_json::Value,
}

impl From<DeployReceipt> for DeployResponse {
    fn from(receipt: DeployReceipt) -> Self {
        Self {
            success: true,
            info: receipt.method.info(),
            result: receipt.result,
        }
    }
}

/// Failure response shared by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(rename = "agentMethods", skip_serializing_if = "Option::is_none")]
    pub agent_methods: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            agent_methods: None,
        }
    }

    pub fn with_agent_methods(mut self, methods: Vec<String>) -> Self {
        self.agent_methods = Some(methods);
        self
    }
}

/// `GET /` liveness payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: "Backend alive".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::DeployMethod;
    use crate::generate::GenerationResult;
    use serde_json::json;

    #[test]
    fn test_parse_empty_body_is_default() {
        let payload: BuildPayload = parse_body(b"").unwrap();
        assert_eq!(
            payload.into_request(),
            Err(ValidationError::EmptyPrompt)
        );

        let payload: DeployPayload = parse_body(b"  \n").unwrap();
        assert_eq!(payload.into_request(), Err(ValidationError::EmptyCode));
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_body::<BuildPayload>(b"{\"prompt\":").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedBody(_)));
    }

    #[test]
    fn test_build_payload_string_prompt() {
        let payload: BuildPayload =
            parse_body(br#"{"prompt":"  a DAO  ","frontend":true}"#).unwrap();
        let request = payload.into_request().unwrap();
        assert_eq!(request.prompt, "a DAO");
        assert!(request.frontend);
    }

    #[test]
    fn test_build_payload_numeric_prompt_is_stringified() {
        let payload: BuildPayload = parse_body(br#"{"prompt":42}"#).unwrap();
        assert_eq!(payload.into_request().unwrap().prompt, "42");
    }

    #[test]
    fn test_build_payload_null_prompt() {
        let payload: BuildPayload = parse_body(br#"{"prompt":null}"#).unwrap();
        assert_eq!(
            payload.into_request(),
            Err(ValidationError::EmptyPrompt)
        );
    }

    #[test]
    fn test_deploy_payload_rejects_non_string_code() {
        let payload: DeployPayload = parse_body(br#"{"code":123}"#).unwrap();
        assert_eq!(payload.into_request(), Err(ValidationError::EmptyCode));
    }

    #[test]
    fn test_deploy_payload_constructor_args() {
        let payload: DeployPayload =
            parse_body(br#"{"code":"contract A {}","constructorArgs":[1000,"x"]}"#).unwrap();
        let request = payload.into_request().unwrap();
        assert_eq!(request.constructor_args, vec![json!(1000), json!("x")]);
    }

    #[test]
    fn test_build_response_shape() {
        let response = BuildResponse::from(Generation {
            contract: GenerationResult::Fallback {
                code: "contract A {}".to_string(),
            },
            frontend: None,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": true, "source": "fallback", "code": "contract A {}"})
        );
    }

    #[test]
    fn test_build_response_with_frontend() {
        let response = BuildResponse::from(Generation {
            contract: GenerationResult::Provider {
                provider: "groq".to_string(),
                code: "contract A {}".to_string(),
            },
            frontend: Some("export default App;".to_string()),
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["source"], "groq");
        assert_eq!(value["frontend"], "export default App;");
    }

    #[test]
    fn test_deploy_response_shape() {
        let response = DeployResponse::from(DeployReceipt {
            method: DeployMethod::Utils,
            result: json!({"address": "0xabc"}),
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "info": "deployed via agent.utils.deployContract",
                "result": {"address": "0xabc"}
            })
        );
    }

    #[test]
    fn test_error_response_shape() {
        let plain = serde_json::to_value(ErrorResponse::new("Prompt is required")).unwrap();
        assert_eq!(plain, json!({"success": false, "error": "Prompt is required"}));

        let with_methods = serde_json::to_value(
            ErrorResponse::new("no deploy").with_agent_methods(vec!["getAddress".to_string()]),
        )
        .unwrap();
        assert_eq!(with_methods["agentMethods"], json!(["getAddress"]));
    }
}
