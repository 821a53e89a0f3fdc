//! `promptbuddy onboard` — initialize settings and history directory.
//!
//! - Creates `~/.promptbuddy/settings.json` with defaults
//! - Creates `~/.promptbuddy/history/`

use anyhow::Result;
use colored::Colorize;

use promptbuddy_core::config::{get_settings_path, save_settings, Settings};
use promptbuddy_core::utils::get_history_path;

use crate::helpers;

/// Run the onboard command.
pub fn run() -> Result<()> {
    println!();
    println!("{}", "✨ PromptBuddy — Setup".cyan().bold());
    println!();

    let settings_path = get_settings_path();

    // 1. Create settings if they don't exist
    if settings_path.exists() {
        println!(
            "  {} settings already exist at {}",
            "✓".green(),
            helpers::tilde_display(&settings_path)
        );
    } else {
        save_settings(&Settings::default(), Some(&settings_path))?;
        println!(
            "  {} created settings at {}",
            "✓".green(),
            helpers::tilde_display(&settings_path)
        );
    }

    // 2. Ensure history directory
    let history_dir = get_history_path();
    std::fs::create_dir_all(&history_dir)?;
    println!(
        "  {} history dir at {}",
        "✓".green(),
        helpers::tilde_display(&history_dir)
    );

    println!();
    println!(
        "  {}",
        "Next: set \"model\" (openai, gemini, or claude) and \"apiKey\" in".green()
    );
    println!(
        "  {}",
        "settings.json, then run `promptbuddy enhance`.".green()
    );
    println!();

    Ok(())
}
