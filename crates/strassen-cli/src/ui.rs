//! Styled status lines.
//!
//! Status output goes to stderr; stdout carries only results.

use console::Style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

fn render(tag: &str, text: &str, tag_style: &Style) -> String {
    if is_color_disabled() {
        format!("{tag} {text}")
    } else {
        format!("{} {text}", tag_style.apply_to(tag))
    }
}

/// Informational line.
pub fn print_info(text: &str) {
    eprintln!("{}", render("[..]", text, &Style::new().blue()));
}

/// Success line.
pub fn print_success(text: &str) {
    eprintln!("{}", render("[OK]", text, &Style::new().green().bold()));
}

/// Error line.
pub fn print_error(text: &str) {
    eprintln!("{}", render("[ERROR]", text, &Style::new().red().bold()));
}
