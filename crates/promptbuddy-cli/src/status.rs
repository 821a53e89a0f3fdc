//! `promptbuddy status` — show settings and provider status.

use anyhow::Result;
use colored::Colorize;

use promptbuddy_core::config::{get_settings_path, load_settings};
use promptbuddy_providers::PROVIDERS;

use crate::helpers;

/// Run the status command.
pub fn run() -> Result<()> {
    let settings = load_settings(None);
    let settings_path = get_settings_path();

    println!();
    println!("{}", "✨ PromptBuddy Status".cyan().bold());
    println!();

    // Settings file
    let settings_exist = settings_path.exists();
    println!(
        "  {:<14} {} {}",
        "Settings:".bold(),
        helpers::tilde_display(&settings_path),
        if settings_exist {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    // Model
    let model = if settings.has_model() {
        settings.model.clone()
    } else {
        "(not set)".to_string()
    };
    println!("  {:<14} {}", "Model:".bold(), model);

    // API key
    let key_status = if settings.has_api_key() {
        format!("{} (key set)", "✓".green())
    } else {
        format!("{}", "· not configured".dimmed())
    };
    println!("  {:<14} {}", "API key:".bold(), key_status);

    // Mode
    let mode = settings
        .mode
        .map(|m| m.to_string())
        .unwrap_or_else(|| "auto (keyword heuristic)".to_string());
    println!("  {:<14} {}", "Mode:".bold(), mode);

    // Tone & length
    println!(
        "  {:<14} {} | max words: {}",
        "Parameters:".bold(),
        format!("tone: {}", settings.tone).dimmed(),
        format!("{}", settings.max_words).dimmed(),
    );

    // Providers
    println!();
    println!("  {}", "Providers:".bold());
    for spec in PROVIDERS {
        let selected = if settings.model == spec.name {
            "✓ selected".green().to_string()
        } else if std::env::var(spec.env_key).is_ok() {
            format!("{}", format!("{} set", spec.env_key).dimmed())
        } else {
            format!("{}", "·".dimmed())
        };
        println!(
            "    {:<10} {:<28} {}",
            spec.display_name,
            spec.default_model.dimmed(),
            selected
        );
    }

    println!();

    Ok(())
}
