//! Interactive REPL — enhance prompts in a loop.
//!
//! Uses `rustyline` for readline-style editing with persistent history.
//! Every exchange is also recorded in the JSONL transcript so `promptbuddy
//! history` can replay it.

use anyhow::Result;
use colored::Colorize;
use rustyline::config::Configurer;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use tracing::debug;

use promptbuddy_core::config::Settings;
use promptbuddy_core::transcript::{TranscriptEntry, TranscriptStore};
use promptbuddy_providers::enhance_prompt;

use crate::helpers;

/// Transcript the CLI records into.
pub const TRANSCRIPT_NAME: &str = "cli";

/// Exit commands (case-insensitive match).
const EXIT_COMMANDS: &[&str] = &["exit", "quit", "/exit", "/quit", ":q"];

/// Run the interactive REPL loop.
pub async fn run(settings: Settings) -> Result<()> {
    helpers::print_banner();

    let mut editor = create_editor()?;
    let store = TranscriptStore::new(None).ok();

    loop {
        let input = match editor.readline("Prompt: ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                // Ctrl-C — exit cleanly
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                // Ctrl-D — exit cleanly
                break;
            }
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_exit_command(trimmed) {
            println!("\nGoodbye! 👋");
            break;
        }

        let _ = editor.add_history_entry(&input);

        debug!(input = trimmed, "enhancing prompt");
        helpers::print_thinking();

        let result = enhance_prompt(trimmed, &settings).await;
        helpers::clear_thinking();

        if let Some(store) = &store {
            let _ = store.append(TRANSCRIPT_NAME, &TranscriptEntry::user(trimmed));
        }

        match result.text() {
            Some(text) => {
                if let Some(store) = &store {
                    let _ = store.append(TRANSCRIPT_NAME, &TranscriptEntry::assistant(text));
                }
                helpers::print_response(text);
            }
            None => {
                let msg = result.error().unwrap_or("unknown failure");
                eprintln!("\n{} {msg}\n", "❌ Error:".red());
            }
        }
    }

    save_history(&mut editor);

    Ok(())
}

/// Create a rustyline editor with history.
fn create_editor() -> Result<Editor<(), DefaultHistory>> {
    let mut editor = DefaultEditor::new()?;
    editor.set_max_history_size(1000)?;

    // Load history from ~/.promptbuddy/history/cli_history
    let history_path = history_path();
    if history_path.exists() {
        let _ = editor.load_history(&history_path);
        debug!("loaded REPL history from {}", history_path.display());
    }

    Ok(editor)
}

/// Save history to disk.
fn save_history(editor: &mut Editor<(), DefaultHistory>) {
    let path = history_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = editor.save_history(&path) {
        debug!("failed to save history: {e}");
    }
}

/// Path to the readline history file.
fn history_path() -> std::path::PathBuf {
    promptbuddy_core::utils::get_history_path().join("cli_history")
}

/// Check if input is an exit command.
fn is_exit_command(input: &str) -> bool {
    let lower = input.to_lowercase();
    EXIT_COMMANDS.contains(&lower.as_str())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
