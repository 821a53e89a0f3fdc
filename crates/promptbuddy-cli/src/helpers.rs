//! Shared CLI helpers — path display, response printing, version banner.

use std::path::Path;

use colored::Colorize;

/// Render a path with the home directory abbreviated to `~`.
pub fn tilde_display(path: &Path) -> String {
    if let Some(home) = dirs_next::home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}

/// Print an enhanced prompt to stdout.
pub fn print_response(text: &str) {
    println!();
    println!("{}", "✨ Enhanced".cyan().bold());
    if text.is_empty() {
        println!("{}", "(no response)".dimmed());
    } else {
        println!("{text}");
    }
    println!();
}

/// Print the banner shown at REPL start.
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", "✨ PromptBuddy".cyan().bold(), version.dimmed());
    println!(
        "{}",
        "Type a prompt to enhance it, or \"exit\" to quit.".dimmed()
    );
    println!();
}

/// Print a "thinking" placeholder while the provider call is in flight.
pub fn print_thinking() {
    eprint!("{}", "⠿ enhancing...".dimmed());
}

/// Clear the "thinking" placeholder.
pub fn clear_thinking() {
    eprint!("\r{}\r", " ".repeat(40));
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn tilde_display_abbreviates_home() {
        if let Some(home) = dirs_next::home_dir() {
            let path = home.join(".promptbuddy").join("settings.json");
            let shown = tilde_display(&path);
            assert!(shown.starts_with("~/"));
            assert!(shown.ends_with("settings.json"));
        }
    }

    #[test]
    fn tilde_display_leaves_other_paths_alone() {
        let path = PathBuf::from("/tmp/somewhere/else");
        assert_eq!(tilde_display(&path), "/tmp/somewhere/else");
    }
}
