//! Claude wire format — messages style.
//!
//! Request: top-level `system` field + single user message, `x-api-key`
//! and `anthropic-version` headers.
//! Response text lives at `content[0].text`.

use serde::Deserialize;
use serde_json::json;

use promptbuddy_core::{output_token_budget, EnhanceRequest};

use crate::registry::system_text;

pub(crate) fn endpoint_path(_model: &str) -> String {
    "/v1/messages".to_string()
}

pub(crate) fn build_body(request: &EnhanceRequest, model: &str) -> serde_json::Value {
    json!({
        "model": model,
        "max_tokens": output_token_budget(request.max_words),
        "system": system_text(request),
        "messages": [
            { "role": "user", "content": request.prompt },
        ],
    })
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

pub(crate) fn extract_text(body: &str) -> Option<String> {
    let resp: MessagesResponse = serde_json::from_str(body).ok()?;
    resp.content.into_iter().next()?.text
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
