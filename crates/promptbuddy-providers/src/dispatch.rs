//! Enhancement dispatch: settings validation, mode selection, provider
//! lookup, and the single point where typed errors collapse into an
//! [`EnhancementResult`].

use tracing::{debug, error};

use promptbuddy_core::config::Settings;
use promptbuddy_core::utils::truncate_string;
use promptbuddy_core::{detect_mode, system_instruction, EnhanceRequest, EnhancementResult};

use crate::http_enhancer::HttpEnhancer;
use crate::registry::find_by_name;
use crate::traits::Enhancer;

/// Last-resort error text when a failure carries no message of its own.
pub const FALLBACK_ERROR: &str = "Failed to enhance prompt";

/// Enhance a prompt using the provider named in `settings.model`.
///
/// Never returns an error: every failure is folded into
/// [`EnhancementResult::Failed`] with a human-readable message, so callers
/// only ever branch on success.
pub async fn enhance_prompt(prompt: &str, settings: &Settings) -> EnhancementResult {
    if !settings.has_api_key() {
        return EnhancementResult::failure(
            "No API key configured. Run `promptbuddy onboard` and set apiKey in settings.json.",
        );
    }
    if !settings.has_model() {
        return EnhancementResult::failure(
            "No model selected. Set model to openai, gemini, or claude.",
        );
    }

    let spec = match find_by_name(&settings.model) {
        Some(spec) => spec,
        None => {
            error!(model = %settings.model, "unknown provider name");
            return EnhancementResult::failure("Invalid model selected");
        }
    };

    // Explicit mode wins over the keyword heuristic.
    let mode = settings.mode.unwrap_or_else(|| detect_mode(prompt));
    let instruction = system_instruction(mode);

    debug!(
        provider = spec.display_name,
        mode = %mode,
        prompt = %truncate_string(prompt, 80),
        "dispatching enhancement"
    );

    let request = EnhanceRequest {
        prompt: prompt.to_string(),
        tone: settings.tone.clone(),
        max_words: settings.max_words,
        instruction: instruction.to_string(),
    };

    let enhancer = HttpEnhancer::new(spec, settings.api_key.clone(), settings.api_base.as_deref());

    match enhancer.enhance(&request).await {
        Ok(text) => EnhancementResult::enhanced(text),
        Err(err) => {
            error!(provider = spec.display_name, error = %err, "enhancement failed");
            let message = err.to_string();
            if message.is_empty() {
                EnhancementResult::failure(FALLBACK_ERROR)
            } else {
                EnhancementResult::failure(message)
            }
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
