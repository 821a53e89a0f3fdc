//! Core value types for PromptBuddy.
//!
//! Two small shapes recur through the whole system: the per-call
//! [`EnhanceRequest`] consumed by every provider adapter, and the
//! [`EnhancementResult`] every call collapses to. `EnhancementResult`
//! keeps the original `{success, enhancedPrompt | error}` wire shape on
//! serialization so any front end consuming JSON sees the same contract.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

// ─────────────────────────────────────────────
// Mode
// ─────────────────────────────────────────────

/// One of the three fixed prompt-rewriting personas.
///
/// Selects which instruction template is prepended to the user's prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    General,
    Development,
    Image,
}

impl Mode {
    /// Lowercase name as used in settings and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::General => "general",
            Mode::Development => "development",
            Mode::Image => "image",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized mode name.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown mode '{0}' (expected general, development, or image)")]
pub struct ParseModeError(String);

impl std::str::FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Mode::General),
            "development" => Ok(Mode::Development),
            "image" => Ok(Mode::Image),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

// ─────────────────────────────────────────────
// EnhanceRequest
// ─────────────────────────────────────────────

/// The per-call inputs every provider adapter consumes.
///
/// `instruction` is the already-resolved template text for the active mode;
/// adapters embed it (plus tone and length directive) into their
/// vendor-specific system/context field.
#[derive(Clone, Debug)]
pub struct EnhanceRequest {
    /// The user's original prompt text.
    pub prompt: String,
    /// Desired tone (free text, e.g. "professional").
    pub tone: String,
    /// Requested maximum length of the rewritten prompt, in words.
    pub max_words: u32,
    /// Resolved instruction template for the active mode.
    pub instruction: String,
}

/// Output token budget for a request: `min(max_words * 2, 2000)`.
///
/// Fixed heuristic of ~2 tokens per word, capped to bound cost and latency.
pub fn output_token_budget(max_words: u32) -> u32 {
    max_words.saturating_mul(2).min(2000)
}

// ─────────────────────────────────────────────
// EnhancementResult
// ─────────────────────────────────────────────

/// Outcome of one enhancement call.
///
/// Serializes to `{"success": true, "enhancedPrompt": …}` or
/// `{"success": false, "error": …}` — the shape the original front end
/// consumes. Created per request, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnhancementResult {
    /// The rewritten prompt, whitespace-trimmed.
    Enhanced(String),
    /// A one-line, user-facing error message.
    Failed(String),
}

impl EnhancementResult {
    /// Successful result with the rewritten prompt.
    pub fn enhanced(text: impl Into<String>) -> Self {
        EnhancementResult::Enhanced(text.into())
    }

    /// Failed result with a user-facing message.
    pub fn failure(msg: impl Into<String>) -> Self {
        EnhancementResult::Failed(msg.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EnhancementResult::Enhanced(_))
    }

    /// The enhanced prompt, if this is a success.
    pub fn text(&self) -> Option<&str> {
        match self {
            EnhancementResult::Enhanced(text) => Some(text),
            EnhancementResult::Failed(_) => None,
        }
    }

    /// The error message, if this is a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            EnhancementResult::Enhanced(_) => None,
            EnhancementResult::Failed(msg) => Some(msg),
        }
    }
}

impl Serialize for EnhancementResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EnhancementResult::Enhanced(text) => {
                let mut s = serializer.serialize_struct("EnhancementResult", 2)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("enhancedPrompt", text)?;
                s.end()
            }
            EnhancementResult::Failed(msg) => {
                let mut s = serializer.serialize_struct("EnhancementResult", 2)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("error", msg)?;
                s.end()
            }
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
