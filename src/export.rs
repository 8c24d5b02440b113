//! Shell-export serialization of a resolved theme.
//!
//! Output is a deterministic, ordered block of `export` statements meant
//! for `source <(tint apply)` or for writing to a dotfile.

use crate::theme::{Role, ThemeRecord};

/// Terminal color-reset sequence, as literal text for shell interpretation.
pub const RESET_SEQUENCE: &str = "\\033[0m";

/// Render `theme` into newline-joined shell export statements.
///
/// Line order: one ANSI escape per role in canonical order, the fixed `NC`
/// reset line, then the `_RGB` and `_HEX` variants per role, then
/// `THEME_NAME` and `THEME_STYLE`. Palette indices are not exported; they
/// stay on the data model for callers that apply palettes directly.
pub fn shell_exports(theme: &ThemeRecord) -> String {
    let mut lines = Vec::with_capacity(3 * Role::COUNT + 3);
    for entry in theme.colors.iter() {
        lines.push(format!(
            "export {}='{}'",
            entry.role.shell_var(),
            entry.rgb.ansi()
        ));
    }
    lines.push(format!("export NC='{RESET_SEQUENCE}'"));
    for entry in theme.colors.iter() {
        lines.push(format!(
            "export {}_RGB='{}'",
            entry.role.shell_var(),
            entry.rgb.decimal()
        ));
    }
    for entry in theme.colors.iter() {
        lines.push(format!(
            "export {}_HEX='{}'",
            entry.role.shell_var(),
            entry.rgb.hex()
        ));
    }
    lines.push(format!("export THEME_NAME='{}'", theme.name));
    lines.push(format!("export THEME_STYLE='{}'", theme.style));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Catalog;

    fn record(name: &str) -> ThemeRecord {
        let catalog = Catalog::builtin();
        catalog.lookup(name).expect("builtin theme").clone()
    }

    // Ensures the line count: ansi + NC + rgb + hex + name + style.
    #[test]
    fn output_has_expected_line_count() {
        let out = shell_exports(&record("dracula"));
        assert_eq!(out.lines().count(), 3 * Role::COUNT + 3);
        assert_eq!(out.lines().count(), 39);
    }

    // Ensures block order: ansi lines, reset, rgb lines, hex lines, metadata.
    #[test]
    fn output_is_ordered_and_exact() {
        let out = shell_exports(&record("dracula"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "export PURPLE='\\033[38;2;189;147;249m'");
        assert_eq!(lines[12], "export NC='\\033[0m'");
        assert_eq!(lines[13], "export PURPLE_RGB='189,147,249'");
        assert_eq!(lines[25], "export PURPLE_HEX='#BD93F9'");
        assert_eq!(lines[37], "export THEME_NAME='dracula'");
        assert_eq!(lines[38], "export THEME_STYLE='dark'");
    }

    #[test]
    fn output_is_deterministic() {
        let theme = record("gruvbox");
        assert_eq!(shell_exports(&theme), shell_exports(&theme));
    }

    // Ensures palette indices never leak into the export contract.
    #[test]
    fn term_indices_are_not_exported() {
        let catalog = Catalog::builtin();
        for name in catalog.names() {
            let out = shell_exports(&record(name));
            assert!(!out.contains("_TERM"), "term leaked for {name}");
        }
    }

    #[test]
    fn nord_metadata_round_trips() {
        let out = shell_exports(&record("nord"));
        assert!(out.contains("export THEME_NAME='nord'"));
        assert!(out.contains("export THEME_STYLE='dark'"));
    }

    // Ensures no trailing newline; printing callers add their own.
    #[test]
    fn output_has_no_trailing_newline() {
        let out = shell_exports(&record("cyberpunk"));
        assert!(!out.ends_with('\n'));
    }
}
