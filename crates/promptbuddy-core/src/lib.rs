//! Core layer for PromptBuddy — the shared value types and pure logic that
//! both the provider adapters and the CLI build on.
//!
//! # Architecture
//!
//! - [`types`] — `Mode`, `EnhanceRequest`, `EnhancementResult`, token budget
//! - [`mode`] — ordered regex rules for mode detection + instruction templates
//! - [`config`] — flat `Settings` record, JSON persistence, env overrides
//! - [`transcript`] — JSONL chat-transcript persistence for the CLI
//! - [`utils`] — data-directory paths and small string helpers

pub mod config;
pub mod mode;
pub mod transcript;
pub mod types;
pub mod utils;

// Re-export the types nearly every caller needs
pub use mode::{detect_mode, system_instruction};
pub use types::{output_token_budget, EnhanceRequest, EnhancementResult, Mode};
