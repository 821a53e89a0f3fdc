//! Provider layer for PromptBuddy.
//!
//! The three vendors (OpenAI, Gemini, Claude) differ only in endpoint,
//! auth convention, and JSON shape — so there is exactly one adapter,
//! parameterized by a static per-provider spec record.
//!
//! # Architecture
//!
//! - [`traits::Enhancer`] — the adapter trait + typed [`traits::EnhanceError`]
//! - [`registry`] — static [`registry::ProviderSpec`] records + lookup
//! - [`http_enhancer::HttpEnhancer`] — the one generic HTTP adapter
//! - [`dispatch::enhance_prompt`] — settings → result, the single error
//!   normalization point

pub mod claude;
pub mod dispatch;
pub mod gemini;
pub mod http_enhancer;
pub mod openai;
pub mod registry;
pub mod traits;

// Re-export main types for convenience
pub use dispatch::enhance_prompt;
pub use http_enhancer::HttpEnhancer;
pub use registry::{ProviderSpec, PROVIDERS};
pub use traits::{EnhanceError, Enhancer};
