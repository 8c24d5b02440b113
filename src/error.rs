//! Unified error types for the theme manager.

use std::fmt;

/// Errors from resolving or selecting themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The requested theme name has no catalog entry.
    NotFound {
        /// Name the caller asked for.
        name: String,
        /// Every valid catalog name, in definition order.
        available: Vec<String>,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name, available } => write!(
                f,
                "theme '{name}' not found. Available themes: {}",
                available.join(", ")
            ),
        }
    }
}

impl std::error::Error for ThemeError {}
