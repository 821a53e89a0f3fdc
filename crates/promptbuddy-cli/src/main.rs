//! PromptBuddy CLI — entry point.
//!
//! # Commands
//!
//! - `promptbuddy enhance [-m PROMPT]` — enhance a prompt (single-shot or REPL)
//! - `promptbuddy onboard` — initialize settings + history directory
//! - `promptbuddy status` — show settings and provider status
//! - `promptbuddy history` — show or clear the enhancement transcript

mod helpers;
mod history_cmd;
mod onboard;
mod repl;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use promptbuddy_core::config::load_settings;
use promptbuddy_core::transcript::{TranscriptEntry, TranscriptStore};
use promptbuddy_core::Mode;
use promptbuddy_providers::enhance_prompt;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// ✨ PromptBuddy — rewrite rough prompts into effective ones
#[derive(Parser)]
#[command(name = "promptbuddy", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enhance a prompt (single-shot or interactive REPL)
    Enhance {
        /// Single prompt (non-interactive). Omit for REPL mode.
        #[arg(short, long)]
        message: Option<String>,

        /// Force a mode (general, development, image) instead of the
        /// keyword heuristic
        #[arg(long)]
        mode: Option<Mode>,

        /// Print the raw result as JSON instead of formatted text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Initialize settings and history directory
    Onboard,

    /// Show settings and provider status
    Status,

    /// Show or clear the enhancement transcript
    History {
        /// Delete all recorded entries
        #[arg(long, default_value_t = false)]
        clear: bool,

        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Enhance {
            message,
            mode,
            json,
            logs,
        } => {
            init_logging(logs);
            run_enhance(message, mode, json).await
        }
        Commands::Onboard => onboard::run(),
        Commands::Status => status::run(),
        Commands::History { clear, limit } => {
            init_logging(false);
            history_cmd::run(clear, limit)
        }
    }
}

// ─────────────────────────────────────────────
// Enhance command
// ─────────────────────────────────────────────

async fn run_enhance(message: Option<String>, mode: Option<Mode>, json: bool) -> Result<()> {
    let mut settings = load_settings(None);

    // CLI flag beats the settings file beats the keyword heuristic.
    if mode.is_some() {
        settings.mode = mode;
    }

    match message {
        Some(prompt) => {
            // Single-shot mode
            info!("enhancing single prompt");
            let result = enhance_prompt(&prompt, &settings).await;

            record_transcript(&prompt, result.text());

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            match result.text() {
                Some(text) => helpers::print_response(text),
                None => {
                    eprintln!("Error: {}", result.error().unwrap_or("unknown failure"));
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        None => repl::run(settings).await,
    }
}

/// Record one exchange in the CLI transcript. Persistence failures only
/// warn; they never break the enhancement itself.
fn record_transcript(prompt: &str, enhanced: Option<&str>) {
    let store = match TranscriptStore::new(None) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("transcript unavailable: {e}");
            return;
        }
    };

    if let Err(e) = store.append(repl::TRANSCRIPT_NAME, &TranscriptEntry::user(prompt)) {
        tracing::warn!("failed to record prompt: {e}");
    }
    if let Some(text) = enhanced {
        if let Err(e) = store.append(repl::TRANSCRIPT_NAME, &TranscriptEntry::assistant(text)) {
            tracing::warn!("failed to record enhancement: {e}");
        }
    }
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("promptbuddy=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
