//! OpenAI compatible chat completions (Groq, OpenAI, the Lovable gateway).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use vibecoding_core::CompletionRequest;

use super::{CompletionError, CompletionProvider};

#[derive(Debug, Clone)]
pub struct ChatProvider {
    name: String,
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    api_key_hint: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatProvider {
    pub fn new(
        name: &str,
        base_url: &str,
        model: String,
        api_key: Option<String>,
        api_key_hint: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, CompletionError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| CompletionError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            name: name.to_string(),
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model,
            api_key,
            api_key_hint: api_key_hint.to_string(),
        })
    }
}

#[async_trait]
impl CompletionProvider for ChatProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CompletionError::Configuration(format!(
                "{} is not set in the environment variables.",
                self.api_key_hint
            ))
        })?;

        let mut messages = Vec::with_capacity(2);
        if let Some(preamble) = &request.preamble {
            messages.push(ChatMessage {
                role: "system",
                content: preamble,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });

        let body = ChatRequest {
            model: &self.model,
            messages,
        };

        log::debug!("POST {} (model {})", self.endpoint, self.model);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Decode(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer, api_key: Option<&str>) -> ChatProvider {
        ChatProvider::new(
            "groq",
            &format!("{}/openai/v1/", server.uri()),
            "llama3-8b-8192".to_string(),
            api_key.map(str::to_string),
            "GROQ_API_KEY",
            None,
        )
        .unwrap()
    }

    fn completion(content: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
        }))
    }

    #[tokio::test]
    async fn test_complete_sends_single_user_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .and(header("authorization", "Bearer gsk-test"))
            .and(body_partial_json(json!({
                "model": "llama3-8b-8192",
                "messages": [{"role": "user", "content": "write a token"}]
            })))
            .respond_with(completion(json!("contract A {}")))
            .expect(1)
            .mount(&server)
            .await;

        let text = provider(&server, Some("gsk-test"))
            .complete(&CompletionRequest::user("write a token".to_string()))
            .await
            .unwrap();

        assert_eq!(text, "contract A {}");
    }

    #[tokio::test]
    async fn test_complete_sends_preamble_as_system_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "messages": [
                    {"role": "system", "content": "be terse"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .respond_with(completion(json!("export default App;")))
            .expect(1)
            .mount(&server)
            .await;

        let text = provider(&server, Some("gsk-test"))
            .complete(&CompletionRequest::with_preamble(
                "be terse",
                "hello".to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(text, "export default App;");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(completion(json!("unused")))
            .expect(0)
            .mount(&server)
            .await;

        let err = provider(&server, None)
            .complete(&CompletionRequest::user("x".to_string()))
            .await
            .unwrap_err();

        match err {
            CompletionError::Configuration(message) => {
                assert_eq!(message, "GROQ_API_KEY is not set in the environment variables.")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = provider(&server, Some("gsk-test"))
            .complete(&CompletionRequest::user("x".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CompletionError::Status { status: 429, ref body } if body == "rate limited"
        ));
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = provider(&server, Some("gsk-test"))
            .complete(&CompletionRequest::user("x".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_null_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(completion(serde_json::Value::Null))
            .mount(&server)
            .await;

        let err = provider(&server, Some("gsk-test"))
            .complete(&CompletionRequest::user("x".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_invalid_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = provider(&server, Some("gsk-test"))
            .complete(&CompletionRequest::user("x".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, CompletionError::Decode(_)));
    }
}
