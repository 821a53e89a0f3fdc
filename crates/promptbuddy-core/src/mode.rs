//! Mode detection and instruction templates.
//!
//! The detector is an ordered rule list: each rule pairs a [`Mode`] with a
//! case-insensitive pattern tested against the whole prompt. The first
//! matching rule wins; no rule matching means [`Mode::General`]. New modes
//! are added by appending a rule and a template — dispatch never changes.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::Mode;

// ─────────────────────────────────────────────
// Detection rules
// ─────────────────────────────────────────────

struct ModeRule {
    mode: Mode,
    pattern: &'static str,
    regex: OnceLock<Regex>,
}

impl ModeRule {
    fn matches(&self, prompt: &str) -> bool {
        self.regex
            .get_or_init(|| Regex::new(self.pattern).expect("static mode pattern must compile"))
            .is_match(prompt)
    }
}

/// Detection rules in priority order: image keywords outrank development
/// keywords, so a prompt matching both resolves to `Image`.
static MODE_RULES: [ModeRule; 2] = [
    ModeRule {
        mode: Mode::Image,
        pattern: r"(?i)image|photo|scene|draw|illustration|generate image",
        regex: OnceLock::new(),
    },
    ModeRule {
        mode: Mode::Development,
        pattern: r"(?i)build|develop|system|app|backend|frontend|project|software",
        regex: OnceLock::new(),
    },
];

/// Pick a mode for a prompt by keyword heuristic.
///
/// Pure function, no failure path. Only consulted when the user has not
/// chosen a mode explicitly — an explicit choice always wins.
pub fn detect_mode(prompt: &str) -> Mode {
    MODE_RULES
        .iter()
        .find(|rule| rule.matches(prompt))
        .map(|rule| rule.mode)
        .unwrap_or(Mode::General)
}

// ─────────────────────────────────────────────
// Instruction templates
// ─────────────────────────────────────────────

const GENERAL_INSTRUCTION: &str = "\
You are a professional prompt enhancement assistant.

Your task is to rewrite the user's prompt to be clearer, more structured, and more effective while preserving the original intent.

IMPORTANT:
- Do NOT answer the prompt
- Do NOT add explanations or commentary
- Output ONLY the improved prompt text
";

const DEVELOPMENT_INSTRUCTION: &str = "\
You are a senior software architect and industry expert.

When given a vague or high-level development idea, expand it into a detailed, execution-ready prompt by:
- Selecting appropriate industry-standard technologies
- Defining system architecture and core modules
- Suggesting clean naming conventions
- Identifying roles, permissions, and workflows
- Adding missing technical requirements users often forget

Assume the user wants a scalable, real-world solution.

IMPORTANT:
- Do NOT explain your decisions
- Do NOT answer the prompt
- Output ONLY the enhanced prompt text
";

const IMAGE_INSTRUCTION: &str = "\
You are an expert prompt engineer for image generation models.

Expand the user's idea into a highly detailed visual prompt by adding:
- Artistic style or realism level
- Lighting, camera angle, and lens type
- Environment and background details
- Mood, emotions, and motion
- Texture, depth, and quality cues

IMPORTANT:
- Do NOT add explanations
- Output ONLY the final image prompt
";

/// Instruction template for a mode. Total — every mode maps to a fixed,
/// non-empty text.
pub fn system_instruction(mode: Mode) -> &'static str {
    match mode {
        Mode::General => GENERAL_INSTRUCTION,
        Mode::Development => DEVELOPMENT_INSTRUCTION,
        Mode::Image => IMAGE_INSTRUCTION,
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── detect_mode ──

    #[test]
    fn detects_image_keywords() {
        assert_eq!(detect_mode("draw a cat on a skateboard"), Mode::Image);
        assert_eq!(detect_mode("a photo of mountains at dusk"), Mode::Image);
        assert_eq!(detect_mode("generate image of a castle"), Mode::Image);
        assert_eq!(detect_mode("an ILLUSTRATION for my blog"), Mode::Image);
    }

    #[test]
    fn detects_development_keywords() {
        assert_eq!(detect_mode("build a todo list"), Mode::Development);
        assert_eq!(detect_mode("design the backend for a shop"), Mode::Development);
        assert_eq!(detect_mode("new SOFTWARE for invoicing"), Mode::Development);
        assert_eq!(detect_mode("develop a mobile app"), Mode::Development);
    }

    #[test]
    fn image_outranks_development() {
        // Matches both rule sets — image rule has priority.
        assert_eq!(
            detect_mode("build an app that can draw an image of a scene"),
            Mode::Image
        );
        assert_eq!(detect_mode("photo editing software"), Mode::Image);
    }

    #[test]
    fn falls_back_to_general() {
        assert_eq!(detect_mode("write a poem about autumn"), Mode::General);
        assert_eq!(detect_mode("summarize this article"), Mode::General);
        assert_eq!(detect_mode(""), Mode::General);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(detect_mode("GENERATE IMAGE of a dragon"), Mode::Image);
        assert_eq!(detect_mode("BUILD me a website"), Mode::Development);
    }

    #[test]
    fn keywords_match_anywhere_in_prompt() {
        // Substring semantics, as in the original heuristic.
        assert_eq!(detect_mode("I want to be happy"), Mode::Development); // "app" in "happy"
    }

    // ── system_instruction ──

    #[test]
    fn every_mode_has_nonempty_instruction() {
        for mode in [Mode::General, Mode::Development, Mode::Image] {
            assert!(!system_instruction(mode).trim().is_empty());
        }
    }

    #[test]
    fn instructions_are_distinct() {
        assert_ne!(
            system_instruction(Mode::General),
            system_instruction(Mode::Development)
        );
        assert_ne!(
            system_instruction(Mode::Development),
            system_instruction(Mode::Image)
        );
    }

    #[test]
    fn unknown_mode_string_falls_back_to_general_instruction() {
        // Unrecognized names fail to parse; callers fall back to General.
        let mode = "something-else".parse::<Mode>().unwrap_or(Mode::General);
        assert_eq!(system_instruction(mode), system_instruction(Mode::General));
    }
}
