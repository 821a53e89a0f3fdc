//! Settings schema — the flat user-scoped record every enhancement reads.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! `#[serde(rename_all = "camelCase")]` handles the conversion.
//!
//! There is no validation beyond presence checks: an unset `model` or
//! `apiKey` is caught by dispatch before any network call, and `maxWords`
//! feeds the token-budget formula as-is.

use serde::{Deserialize, Serialize};

use crate::types::Mode;

/// Flat settings record — persisted at `~/.promptbuddy/settings.json`.
///
/// `theme` and `fontSize` belong to front-end rendering and are carried so
/// the record stays a faithful superset of what any UI reads and writes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Provider selection: `"openai"`, `"gemini"`, or `"claude"`.
    /// Empty until the user picks one.
    pub model: String,
    /// User-supplied API key for the selected provider. Secret.
    pub api_key: String,
    /// Desired tone of the rewritten prompt.
    pub tone: String,
    /// Maximum length of the rewritten prompt, in words.
    pub max_words: u32,
    /// UI theme: `"light"`, `"dark"`, or `"system"`.
    pub theme: String,
    /// UI font size in points.
    pub font_size: u32,
    /// Explicit mode override. `None` means auto-detect per prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// Custom API base URL, overriding the provider's fixed endpoint.
    /// Mainly for tests and self-hosted gateways.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            model: String::new(),
            api_key: String::new(),
            tone: "professional".to_string(),
            max_words: 500,
            theme: "system".to_string(),
            font_size: 14,
            mode: None,
            api_base: None,
        }
    }
}

impl Settings {
    /// Whether an API key has been supplied.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Whether a model has been selected.
    pub fn has_model(&self) -> bool {
        !self.model.is_empty()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
