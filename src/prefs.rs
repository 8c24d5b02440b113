//! Persisted theme preference stored as a shell export line.
//!
//! The preference file is shared with shell startup scripts: it holds a
//! single `export TERMINAL_THEME='<name>'` line that both this tool and a
//! `source`-ing shell understand. Reads are forgiving; an absent or
//! malformed file means "use the fallback theme", never an error.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name under the home directory holding the persisted selection.
pub const PREFS_FILE_NAME: &str = ".terminal-theme";

/// Shell variable name written into the preference file.
pub const PREFS_VAR: &str = "TERMINAL_THEME";

/// Default preference file path (`~/.terminal-theme`), if a home directory
/// can be determined.
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(PREFS_FILE_NAME))
}

/// Read the persisted theme name, if any.
pub fn load(path: &Path) -> Option<String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            debug!(path = %path.display(), %err, "no readable preference file");
            return None;
        }
    };
    extract_theme_name(&raw)
}

/// Extract the value assigned to `TERMINAL_THEME` in shell-export text.
///
/// Accepts single-quoted, double-quoted, and bare values.
pub fn extract_theme_name(raw: &str) -> Option<String> {
    let idx = raw.find(PREFS_VAR)?;
    let rest = raw[idx + PREFS_VAR.len()..].strip_prefix('=')?;
    let value = match rest.chars().next() {
        Some(quote @ ('\'' | '"')) => rest[1..].split(quote).next().unwrap_or(""),
        _ => rest.split_whitespace().next().unwrap_or(""),
    };
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Overwrite the preference file with the given theme name.
///
/// Plain overwrite, single writer assumed; concurrent invocations racing
/// on this file are out of scope.
pub fn save(path: &Path, name: &str) -> Result<(), String> {
    let line = format!("export {PREFS_VAR}='{name}'\n");
    fs::write(path, line).map_err(|e| {
        format!(
            "failed to write preference file {}: {e}",
            path.display()
        )
    })
}
