//! Gemini wire format — generate-content style.
//!
//! Request: single content blob (system preamble + prompt in one text
//! part), key as a query parameter, model in the URL path.
//! Response text lives at `candidates[0].content.parts[0].text`.

use serde::Deserialize;
use serde_json::json;

use promptbuddy_core::{output_token_budget, EnhanceRequest};

use crate::registry::system_text;

pub(crate) fn endpoint_path(model: &str) -> String {
    format!("/v1/models/{model}:generateContent")
}

pub(crate) fn build_body(request: &EnhanceRequest, _model: &str) -> serde_json::Value {
    json!({
        "contents": [{
            "parts": [{
                "text": format!("{}\n\n{}", system_text(request), request.prompt),
            }],
        }],
        "generationConfig": {
            "temperature": 0.7,
            "maxOutputTokens": output_token_budget(request.max_words),
        },
    })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

pub(crate) fn extract_text(body: &str) -> Option<String> {
    let resp: GenerateResponse = serde_json::from_str(body).ok()?;
    resp.candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
