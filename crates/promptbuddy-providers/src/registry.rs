//! Provider registry — static specs for the three supported vendors.
//!
//! Each [`ProviderSpec`] is the small per-provider configuration record the
//! generic [`crate::HttpEnhancer`] is parameterized by: endpoint, auth
//! convention, request-body builder, and response-text extractor. Adding a
//! vendor means adding a wire module and one entry here — the adapter and
//! dispatch never change.

use promptbuddy_core::EnhanceRequest;

// ─────────────────────────────────────────────
// ProviderSpec — static metadata for one provider
// ─────────────────────────────────────────────

/// How a provider expects the API key to be presented.
#[derive(Clone, Debug)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>` (OpenAI).
    Bearer,
    /// Key in a custom header, optionally with a fixed version header
    /// (Claude: `x-api-key` + `anthropic-version`).
    ApiKeyHeader {
        header: &'static str,
        version_header: Option<(&'static str, &'static str)>,
    },
    /// Key as a URL query parameter (Gemini: `?key=<key>`).
    QueryParam { param: &'static str },
}

/// Static specification describing one LLM provider.
pub struct ProviderSpec {
    /// Internal name, matched exactly against `Settings::model`.
    pub name: &'static str,
    /// Human-readable name for logs and error messages.
    pub display_name: &'static str,
    /// Fixed model identifier sent to the vendor.
    pub default_model: &'static str,
    /// Fixed endpoint origin; overridable via `Settings::api_base`.
    pub default_api_base: &'static str,
    /// Environment variable conventionally holding this vendor's key.
    pub env_key: &'static str,
    /// API key convention.
    pub auth: AuthScheme,
    /// Path portion of the endpoint URL for a given model.
    pub endpoint_path: fn(model: &str) -> String,
    /// Build the vendor-specific JSON request body.
    pub build_body: fn(request: &EnhanceRequest, model: &str) -> serde_json::Value,
    /// Pull the first completion text out of a vendor response body.
    pub extract_text: fn(body: &str) -> Option<String>,
}

impl std::fmt::Debug for ProviderSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSpec")
            .field("name", &self.name)
            .field("default_model", &self.default_model)
            .field("default_api_base", &self.default_api_base)
            .finish()
    }
}

/// The three supported providers.
pub static PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        name: "openai",
        display_name: "OpenAI",
        default_model: "gpt-4o-mini",
        default_api_base: "https://api.openai.com",
        env_key: "OPENAI_API_KEY",
        auth: AuthScheme::Bearer,
        endpoint_path: crate::openai::endpoint_path,
        build_body: crate::openai::build_body,
        extract_text: crate::openai::extract_text,
    },
    ProviderSpec {
        name: "gemini",
        display_name: "Gemini",
        default_model: "gemini-2.5-flash",
        default_api_base: "https://generativelanguage.googleapis.com",
        env_key: "GEMINI_API_KEY",
        auth: AuthScheme::QueryParam { param: "key" },
        endpoint_path: crate::gemini::endpoint_path,
        build_body: crate::gemini::build_body,
        extract_text: crate::gemini::extract_text,
    },
    ProviderSpec {
        name: "claude",
        display_name: "Claude",
        default_model: "claude-3-5-haiku-20241022",
        default_api_base: "https://api.anthropic.com",
        env_key: "ANTHROPIC_API_KEY",
        auth: AuthScheme::ApiKeyHeader {
            header: "x-api-key",
            version_header: Some(("anthropic-version", "2023-06-01")),
        },
        endpoint_path: crate::claude::endpoint_path,
        build_body: crate::claude::build_body,
        extract_text: crate::claude::extract_text,
    },
];

/// Find a provider spec by exact name (`"openai"`, `"gemini"`, `"claude"`).
pub fn find_by_name(name: &str) -> Option<&'static ProviderSpec> {
    PROVIDERS.iter().find(|spec| spec.name == name)
}

/// The shared system/context text every vendor body embeds:
/// instruction + tone + length directive.
pub(crate) fn system_text(request: &EnhanceRequest) -> String {
    format!(
        "{}\n\nTone: {}\nMaximum length: {} words.",
        request.instruction.trim_end(),
        request.tone,
        request.max_words
    )
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
