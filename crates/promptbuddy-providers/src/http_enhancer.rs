//! The one generic HTTP adapter, parameterized by a [`ProviderSpec`].
//!
//! Every vendor call follows the same skeleton: build the vendor body,
//! apply the vendor auth convention, POST once, normalize errors, extract
//! and trim the first completion text. What varies lives entirely in the
//! spec record.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, warn};

use promptbuddy_core::utils::truncate_string;
use promptbuddy_core::EnhanceRequest;

use crate::registry::{AuthScheme, ProviderSpec};
use crate::traits::{EnhanceError, Enhancer};

// ─────────────────────────────────────────────
// HttpEnhancer
// ─────────────────────────────────────────────

/// Generic provider adapter: one HTTP POST per enhancement request.
pub struct HttpEnhancer {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// Endpoint origin (e.g. `"https://api.openai.com"`).
    api_base: String,
    /// Caller-supplied API key.
    api_key: String,
    /// Vendor model identifier.
    model: String,
    /// Static spec for this vendor.
    spec: &'static ProviderSpec,
}

impl std::fmt::Debug for HttpEnhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEnhancer")
            .field("provider", &self.spec.display_name)
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}

impl HttpEnhancer {
    /// Create an adapter for a provider spec.
    ///
    /// `api_base` overrides the spec's fixed endpoint origin when given.
    /// The client carries no request timeout: each call is a single
    /// fire-and-forget POST that ends only on response or network failure.
    pub fn new(
        spec: &'static ProviderSpec,
        api_key: impl Into<String>,
        api_base: Option<&str>,
    ) -> Self {
        let api_base = api_base
            .map(String::from)
            .unwrap_or_else(|| spec.default_api_base.to_string());

        HttpEnhancer {
            client: reqwest::Client::new(),
            api_base,
            api_key: api_key.into(),
            model: spec.default_model.to_string(),
            spec,
        }
    }

    /// Full endpoint URL for this adapter.
    fn endpoint_url(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        format!("{}{}", base, (self.spec.endpoint_path)(&self.model))
    }

    /// Apply the vendor's auth convention to a request.
    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.spec.auth {
            AuthScheme::Bearer => request.bearer_auth(&self.api_key),
            AuthScheme::ApiKeyHeader {
                header,
                version_header,
            } => {
                let request = request.header(*header, &self.api_key);
                match version_header {
                    Some((name, value)) => request.header(*name, *value),
                    None => request,
                }
            }
            AuthScheme::QueryParam { param } => {
                request.query(&[(*param, self.api_key.as_str())])
            }
        }
    }
}

#[async_trait]
impl Enhancer for HttpEnhancer {
    async fn enhance(&self, request: &EnhanceRequest) -> Result<String, EnhanceError> {
        let url = self.endpoint_url();
        let body = (self.spec.build_body)(request, &self.model);

        debug!(
            provider = self.spec.display_name,
            model = %self.model,
            prompt = %truncate_string(&request.prompt, 80),
            "calling provider"
        );

        let response = self
            .apply_auth(self.client.post(&url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(
                provider = self.spec.display_name,
                status = %status,
                "API error"
            );
            return Err(EnhanceError::Api(api_error_message(
                self.spec.display_name,
                status.as_u16(),
                &text,
            )));
        }

        match (self.spec.extract_text)(&text) {
            Some(content) if !content.trim().is_empty() => Ok(content.trim().to_string()),
            _ => {
                warn!(
                    provider = self.spec.display_name,
                    "success status but no completion text in response"
                );
                Err(EnhanceError::EmptyCompletion {
                    provider: self.spec.display_name,
                })
            }
        }
    }

    fn display_name(&self) -> &'static str {
        self.spec.display_name
    }
}

// ─────────────────────────────────────────────
// Error-body probing
// ─────────────────────────────────────────────

/// All three vendors report errors as `{"error": {"message": …}}`.
#[derive(Deserialize)]
struct VendorErrorBody {
    error: Option<VendorErrorDetail>,
}

#[derive(Deserialize)]
struct VendorErrorDetail {
    message: Option<String>,
}

/// Message for a non-success status: the vendor body's `error.message` if
/// parseable and non-empty, else `"{Provider} API error: {status}"`.
fn api_error_message(display_name: &str, status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<VendorErrorBody>(body) {
        if let Some(message) = parsed.error.and_then(|e| e.message) {
            if !message.is_empty() {
                return message;
            }
        }
    }
    format!("{} API error: {}", display_name, status)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::find_by_name;
    use wiremock::matchers::{
        body_partial_json, header, method, path, query_param,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> EnhanceRequest {
        EnhanceRequest {
            prompt: "write a poem".to_string(),
            tone: "professional".to_string(),
            max_words: 100,
            instruction: "Rewrite the prompt.".to_string(),
        }
    }

    // ── Unit tests ──

    #[test]
    fn endpoint_url_trailing_slash() {
        let spec = find_by_name("openai").unwrap();
        let enhancer = HttpEnhancer::new(spec, "key", Some("http://localhost:9999/"));
        assert_eq!(
            enhancer.endpoint_url(),
            "http://localhost:9999/v1/chat/completions"
        );
    }

    #[test]
    fn endpoint_url_default_base() {
        let spec = find_by_name("claude").unwrap();
        let enhancer = HttpEnhancer::new(spec, "key", None);
        assert_eq!(enhancer.endpoint_url(), "https://api.anthropic.com/v1/messages");
    }

    #[test]
    fn api_error_message_prefers_vendor_message() {
        let body = r#"{"error":{"message":"bad key","type":"auth_error"}}"#;
        assert_eq!(api_error_message("OpenAI", 401, body), "bad key");
    }

    #[test]
    fn api_error_message_generic_on_unparseable_body() {
        assert_eq!(
            api_error_message("OpenAI", 500, "<html>oops</html>"),
            "OpenAI API error: 500"
        );
        assert_eq!(api_error_message("Gemini", 429, "{}"), "Gemini API error: 429");
        assert_eq!(
            api_error_message("Claude", 400, r#"{"error":{"message":""}}"#),
            "Claude API error: 400"
        );
    }

    // ── Integration tests with mock server ──

    #[tokio::test]
    async fn openai_success_trims_whitespace() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": { "content": "  An enhanced prompt.  \n" }
                }]
            })))
            .mount(&mock_server)
            .await;

        let spec = find_by_name("openai").unwrap();
        let enhancer = HttpEnhancer::new(spec, "test-key-123", Some(&mock_server.uri()));

        let text = enhancer.enhance(&request()).await.unwrap();
        assert_eq!(text, "An enhanced prompt.");
    }

    #[tokio::test]
    async fn openai_sends_capped_token_budget() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "max_tokens": 2000
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": "ok" } }]
            })))
            .mount(&mock_server)
            .await;

        let spec = find_by_name("openai").unwrap();
        let enhancer = HttpEnhancer::new(spec, "key", Some(&mock_server.uri()));

        let mut req = request();
        req.max_words = 5000;

        // If the body matcher fails, wiremock returns 404 → error
        let text = enhancer.enhance(&req).await.unwrap();
        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn gemini_uses_query_param_auth_and_model_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/models/gemini-2.5-flash:generateContent"))
            .and(query_param("key", "AIza-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "gemini says hi" }] }
                }]
            })))
            .mount(&mock_server)
            .await;

        let spec = find_by_name("gemini").unwrap();
        let enhancer = HttpEnhancer::new(spec, "AIza-test", Some(&mock_server.uri()));

        let text = enhancer.enhance(&request()).await.unwrap();
        assert_eq!(text, "gemini says hi");
    }

    #[tokio::test]
    async fn claude_sends_version_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "sk-ant-test"))
            .and(header("anthropic-version", "2023-06-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [{ "type": "text", "text": "claude says hi" }]
            })))
            .mount(&mock_server)
            .await;

        let spec = find_by_name("claude").unwrap();
        let enhancer = HttpEnhancer::new(spec, "sk-ant-test", Some(&mock_server.uri()));

        let text = enhancer.enhance(&request()).await.unwrap();
        assert_eq!(text, "claude says hi");
    }

    #[tokio::test]
    async fn non_success_with_vendor_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": { "message": "bad key", "type": "invalid_request_error" }
            })))
            .mount(&mock_server)
            .await;

        let spec = find_by_name("openai").unwrap();
        let enhancer = HttpEnhancer::new(spec, "wrong", Some(&mock_server.uri()));

        let err = enhancer.enhance(&request()).await.unwrap_err();
        match err {
            EnhanceError::Api(msg) => assert_eq!(msg, "bad key"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_success_with_unparseable_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(529).set_body_string("overloaded"))
            .mount(&mock_server)
            .await;

        let spec = find_by_name("claude").unwrap();
        let enhancer = HttpEnhancer::new(spec, "key", Some(&mock_server.uri()));

        let err = enhancer.enhance(&request()).await.unwrap_err();
        match err {
            EnhanceError::Api(msg) => assert_eq!(msg, "Claude API error: 529"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_completion_is_an_explicit_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&mock_server)
            .await;

        let spec = find_by_name("openai").unwrap();
        let enhancer = HttpEnhancer::new(spec, "key", Some(&mock_server.uri()));

        let err = enhancer.enhance(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "OpenAI returned an empty response");
    }

    #[tokio::test]
    async fn whitespace_only_completion_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": "   \n  " } }]
            })))
            .mount(&mock_server)
            .await;

        let spec = find_by_name("openai").unwrap();
        let enhancer = HttpEnhancer::new(spec, "key", Some(&mock_server.uri()));

        let err = enhancer.enhance(&request()).await.unwrap_err();
        assert!(matches!(err, EnhanceError::EmptyCompletion { .. }));
    }

    #[tokio::test]
    async fn network_error_surfaces_as_request_error() {
        // Point to a port that's not listening
        let spec = find_by_name("openai").unwrap();
        let enhancer = HttpEnhancer::new(spec, "key", Some("http://127.0.0.1:1"));

        let err = enhancer.enhance(&request()).await.unwrap_err();
        assert!(matches!(err, EnhanceError::Request(_)));
    }
}
