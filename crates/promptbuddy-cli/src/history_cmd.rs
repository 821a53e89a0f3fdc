//! `promptbuddy history` — show or clear the enhancement transcript.

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;

use promptbuddy_core::transcript::{Role, TranscriptStore};

use crate::repl::TRANSCRIPT_NAME;

/// Run the history command.
pub fn run(clear: bool, limit: usize) -> Result<()> {
    let store = TranscriptStore::new(None).context("failed to open history directory")?;

    if clear {
        store
            .clear(TRANSCRIPT_NAME)
            .context("failed to clear transcript")?;
        println!("{} history cleared", "✓".green());
        return Ok(());
    }

    let entries = store.load(TRANSCRIPT_NAME, limit);
    if entries.is_empty() {
        println!("{}", "No history yet.".dimmed());
        return Ok(());
    }

    println!();
    for entry in entries {
        let when = entry
            .timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M");
        let label = match entry.role {
            Role::User => "You".bold().to_string(),
            Role::Assistant => "✨ Enhanced".cyan().bold().to_string(),
        };
        println!("{} {}", format!("[{when}]").dimmed(), label);
        println!("{}", entry.text);
        println!();
    }

    Ok(())
}
