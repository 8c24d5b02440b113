//! Tint — a single source of truth for terminal colors.
//!
//! This crate holds a small built-in catalog of named color themes, each
//! carrying ANSI escape sequences, RGB triples, hex strings, and terminal
//! palette indices per semantic role. A [`resolver::Resolver`] tracks the
//! active selection, and [`export::shell_exports`] renders a resolved theme
//! into shell-sourceable `export` statements.
//!
//! # Quick start
//!
//! ```
//! use tint::export::shell_exports;
//! use tint::resolver::Resolver;
//! use tint::theme::Catalog;
//!
//! let mut resolver = Resolver::new(Catalog::builtin());
//! let nord = resolver.select("nord").unwrap();
//! let exports = shell_exports(nord);
//! assert!(exports.contains("export THEME_NAME='nord'"));
//! ```

pub mod error;
pub mod export;
pub mod prefs;
pub mod render;
pub mod resolver;
pub mod theme;
