//! OpenAI wire format — chat-completions style.
//!
//! Request: chat-message array (system + user), bearer auth.
//! Response text lives at `choices[0].message.content`.

use serde::Deserialize;
use serde_json::json;

use promptbuddy_core::{output_token_budget, EnhanceRequest};

use crate::registry::system_text;

pub(crate) fn endpoint_path(_model: &str) -> String {
    "/v1/chat/completions".to_string()
}

pub(crate) fn build_body(request: &EnhanceRequest, model: &str) -> serde_json::Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system_text(request) },
            { "role": "user", "content": request.prompt },
        ],
        "temperature": 0.7,
        "max_tokens": output_token_budget(request.max_words),
    })
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub(crate) fn extract_text(body: &str) -> Option<String> {
    let resp: ChatResponse = serde_json::from_str(body).ok()?;
    resp.choices.into_iter().next()?.message.content
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EnhanceRequest {
        EnhanceRequest {
            prompt: "write a poem".to_string(),
            tone: "professional".to_string(),
            max_words: 100,
            instruction: "Rewrite the prompt.".to_string(),
        }
    }

    #[test]
    fn body_shape() {
        let body = build_body(&request(), "gpt-4o-mini");

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["max_tokens"], 200);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert!(messages[0]["content"]
            .as_str()
            .unwrap()
            .contains("Tone: professional"));
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "write a poem");
    }

    #[test]
    fn body_caps_token_budget() {
        let mut req = request();
        req.max_words = 5000;
        assert_eq!(build_body(&req, "gpt-4o-mini")["max_tokens"], 2000);
    }

    #[test]
    fn extract_first_choice() {
        let body = r#"{"choices":[{"message":{"content":"enhanced text"}}]}"#;
        assert_eq!(extract_text(body).as_deref(), Some("enhanced text"));
    }

    #[test]
    fn extract_none_when_no_choices() {
        assert_eq!(extract_text(r#"{"choices":[]}"#), None);
        assert_eq!(extract_text(r#"{}"#), None);
        assert_eq!(extract_text("not json"), None);
    }

    #[test]
    fn extract_none_when_content_null() {
        let body = r#"{"choices":[{"message":{"content":null}}]}"#;
        assert_eq!(extract_text(body), None);
    }
}
