//! Theme resolution and the active selection.

use crate::error::ThemeError;
use crate::theme::{Catalog, ThemeRecord};

/// Theme active before any selection is made or persisted.
pub const FALLBACK_THEME: &str = "dracula";

/// Resolves theme names against the catalog and tracks the active choice.
///
/// The resolver owns its catalog and the mutable current-theme field;
/// callers pass names explicitly instead of relying on ambient state.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Catalog,
    current: String,
}

impl Resolver {
    /// Create a resolver over `catalog` with the fallback theme active.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: FALLBACK_THEME.to_string(),
        }
    }

    /// Resolve `name`, or the active selection when `name` is `None`.
    pub fn resolve(&self, name: Option<&str>) -> Result<&ThemeRecord, ThemeError> {
        let requested = name.unwrap_or(&self.current);
        self.catalog
            .lookup(requested)
            .ok_or_else(|| self.not_found(requested))
    }

    /// Validate `name`, make it the active selection, and return its record.
    ///
    /// The mutation is process-local; persisting the choice across runs is
    /// the caller's responsibility.
    pub fn select(&mut self, name: &str) -> Result<&ThemeRecord, ThemeError> {
        if self.catalog.lookup(name).is_none() {
            return Err(self.not_found(name));
        }
        self.current = name.to_string();
        self.resolve(None)
    }

    /// Seed the active selection from a persisted preference.
    ///
    /// Unknown names keep the fallback and report `false`; a stale
    /// preference file must never make startup fail.
    pub fn seed(&mut self, name: &str) -> bool {
        self.select(name).is_ok()
    }

    /// Catalog names in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.catalog.names()
    }

    /// Name of the active selection.
    pub fn current_name(&self) -> &str {
        &self.current
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn not_found(&self, name: &str) -> ThemeError {
        ThemeError::NotFound {
            name: name.to_string(),
            available: self
                .catalog
                .names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Resolver {
        Resolver::new(Catalog::builtin())
    }

    // Ensures every catalog name resolves to its own record.
    #[test]
    fn resolve_returns_record_for_every_name() {
        let resolver = resolver();
        for name in resolver.names() {
            let record = resolver.resolve(Some(name)).expect("known name resolves");
            assert_eq!(record.name, name);
        }
    }

    // Ensures the default selection is the fallback theme.
    #[test]
    fn new_resolver_starts_on_fallback() {
        let resolver = resolver();
        assert_eq!(resolver.current_name(), FALLBACK_THEME);
        let record = resolver.resolve(None).expect("fallback resolves");
        assert_eq!(record.name, "dracula");
    }

    // Ensures unknown names fail with the attempt plus the full key list.
    #[test]
    fn resolve_unknown_name_lists_valid_names() {
        let resolver = resolver();
        let err = resolver.resolve(Some("doesnotexist")).expect_err("must fail");
        let msg = err.to_string();
        assert!(msg.contains("doesnotexist"), "got: {msg}");
        assert!(msg.contains("dracula"), "got: {msg}");
        assert!(msg.contains("cyberpunk"), "got: {msg}");
        assert!(msg.contains("nord"), "got: {msg}");
        assert!(msg.contains("gruvbox"), "got: {msg}");
    }

    // Ensures select mutates the active selection in place.
    #[test]
    fn select_updates_subsequent_bare_resolve() {
        let mut resolver = resolver();
        let record = resolver.select("gruvbox").expect("gruvbox exists");
        assert_eq!(record.name, "gruvbox");
        assert_eq!(resolver.resolve(None).expect("resolves").name, "gruvbox");
    }

    // Ensures select rejects unknown names without touching the selection.
    #[test]
    fn select_unknown_name_keeps_selection() {
        let mut resolver = resolver();
        let err = resolver.select("doesnotexist").expect_err("must fail");
        assert!(err.to_string().contains("doesnotexist"));
        assert_eq!(resolver.current_name(), FALLBACK_THEME);
    }

    #[test]
    fn cyberpunk_red_is_pure_red() {
        let resolver = resolver();
        let record = resolver.resolve(Some("cyberpunk")).expect("resolves");
        let red = record.colors.get(crate::theme::Role::Red);
        assert_eq!(red.rgb.hex(), "#FF0000");
    }

    // Ensures a stale persisted preference degrades to the fallback.
    #[test]
    fn seed_with_unknown_name_reports_false_and_keeps_fallback() {
        let mut resolver = resolver();
        assert!(!resolver.seed("no-such-theme"));
        assert_eq!(resolver.current_name(), FALLBACK_THEME);
        assert!(resolver.seed("nord"));
        assert_eq!(resolver.current_name(), "nord");
    }
}
