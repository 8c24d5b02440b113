//! Terminal output renderer for listings and error messages.

use crate::theme::{Role, ThemeRecord};
use crossterm::style::{Color, Stylize};

/// Roles previewed in a `list` swatch, loudest first.
const SWATCH_ROLES: [Role; 4] = [Role::Red, Role::Yellow, Role::Green, Role::Blue];

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print an error line (to stderr).
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", "error:".red().bold());
        } else {
            eprintln!("error: {msg}");
        }
    }

    /// Print one `list` row for a theme (to stdout).
    pub fn theme_row(&self, theme: &ThemeRecord, active: bool) {
        let marker = if active { " (current)" } else { "" };
        if self.color {
            println!(
                "  {} {} ({}){marker}",
                swatch(theme),
                theme.name.bold(),
                theme.style
            );
        } else {
            println!("  - {} ({}){marker}", theme.name, theme.style);
        }
    }
}

/// Small preview of a theme rendered in its own colors.
fn swatch(theme: &ThemeRecord) -> String {
    let mut out = String::new();
    for role in SWATCH_ROLES {
        let rgb = theme.colors.get(role).rgb;
        let dot = "\u{25cf}".with(Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        });
        out.push_str(&dot.to_string());
    }
    out
}
