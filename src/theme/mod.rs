//! Theme data model and the built-in catalog.
//!
//! All color lookups resolve through this module. Each role stores a single
//! RGB triple plus a 256-color palette index; the ANSI, decimal, and hex
//! representations are derived from the triple, so the four views of a role
//! can never disagree.

mod builtin;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Semantic color slot shared by every theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Purple,
    Green,
    Cyan,
    Pink,
    Yellow,
    Red,
    Orange,
    Blue,
    Comment,
    White,
    Background,
    Selection,
}

impl Role {
    /// Canonical role order used for serialization and listing.
    pub const ALL: [Role; 12] = [
        Self::Purple,
        Self::Green,
        Self::Cyan,
        Self::Pink,
        Self::Yellow,
        Self::Red,
        Self::Orange,
        Self::Blue,
        Self::Comment,
        Self::White,
        Self::Background,
        Self::Selection,
    ];

    /// Number of roles in every color set.
    pub const COUNT: usize = Self::ALL.len();

    /// Lowercase catalog/JSON key for this role.
    pub fn key(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Comment => "comment",
            Self::White => "white",
            Self::Background => "background",
            Self::Selection => "selection",
        }
    }

    /// Uppercase shell-variable prefix for export statements.
    pub fn shell_var(self) -> &'static str {
        match self {
            Self::Purple => "PURPLE",
            Self::Green => "GREEN",
            Self::Cyan => "CYAN",
            Self::Pink => "PINK",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
            Self::Orange => "ORANGE",
            Self::Blue => "BLUE",
            Self::Comment => "COMMENT",
            Self::White => "WHITE",
            Self::Background => "BACKGROUND",
            Self::Selection => "SELECTION",
        }
    }
}

/// Dark/light class of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeStyle {
    Dark,
    Light,
}

impl fmt::Display for ThemeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

/// One 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 24-bit foreground escape as literal `\033[38;2;R;G;Bm` text.
    ///
    /// The backslash stays unexpanded: the value is written into shell
    /// exports and interpreted by the consuming shell, not by this program.
    pub fn ansi(&self) -> String {
        format!("\\033[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Comma-joined decimal triple, e.g. `189,147,249`.
    pub fn decimal(&self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }

    /// Uppercase hex form, e.g. `#BD93F9`.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Catalog entry for one role: the color plus its terminal palette index.
#[derive(Debug, Clone, Copy)]
pub struct RoleColor {
    pub role: Role,
    pub rgb: Rgb,
    /// 0-255 palette index. Available for direct palette application but
    /// not part of the shell-export output.
    pub term: u8,
}

/// All role colors for one theme, in canonical role order.
///
/// Every theme carries the identical role set; the fixed-size table makes
/// that a property of the type rather than a runtime check.
#[derive(Debug, Clone)]
pub struct ColorSet {
    entries: [RoleColor; Role::COUNT],
}

impl ColorSet {
    /// Build a color set from per-role `(rgb, term)` pairs in canonical order.
    pub fn from_table(table: [(Rgb, u8); Role::COUNT]) -> Self {
        let entries: [RoleColor; Role::COUNT] = std::array::from_fn(|idx| {
            let (rgb, term) = table[idx];
            RoleColor {
                role: Role::ALL[idx],
                rgb,
                term,
            }
        });
        Self { entries }
    }

    /// Colors for one role.
    pub fn get(&self, role: Role) -> &RoleColor {
        &self.entries[role as usize]
    }

    /// Iterate entries in canonical role order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleColor> {
        self.entries.iter()
    }
}

impl Serialize for ColorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Grouped shape consumed by `get`: one role-keyed map per
        // representation, roles in canonical order.
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(
            "ansi",
            &RepMap {
                set: self,
                rep: Rgb::ansi,
            },
        )?;
        map.serialize_entry(
            "rgb",
            &RepMap {
                set: self,
                rep: Rgb::decimal,
            },
        )?;
        map.serialize_entry(
            "hex",
            &RepMap {
                set: self,
                rep: Rgb::hex,
            },
        )?;
        map.serialize_entry("term", &TermMap(self))?;
        map.end()
    }
}

/// Role-keyed view of one derived string representation.
struct RepMap<'a> {
    set: &'a ColorSet,
    rep: fn(&Rgb) -> String,
}

impl Serialize for RepMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for entry in self.set.iter() {
            map.serialize_entry(entry.role.key(), &(self.rep)(&entry.rgb))?;
        }
        map.end()
    }
}

/// Role-keyed view of the palette indices.
struct TermMap<'a>(&'a ColorSet);

impl Serialize for TermMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for entry in self.0.iter() {
            map.serialize_entry(entry.role.key(), &entry.term)?;
        }
        map.end()
    }
}

/// A named, immutable bundle of role colors.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeRecord {
    pub name: &'static str,
    pub style: ThemeStyle,
    pub colors: ColorSet,
}

/// Built-in, read-only theme registry.
#[derive(Debug, Clone)]
pub struct Catalog {
    themes: Vec<ThemeRecord>,
}

impl Catalog {
    /// The built-in themes, in definition order.
    pub fn builtin() -> Self {
        Self {
            themes: vec![
                builtin::dracula(),
                builtin::cyberpunk(),
                builtin::nord(),
                builtin::gruvbox(),
            ],
        }
    }

    /// Look up one theme by name.
    pub fn lookup(&self, name: &str) -> Option<&ThemeRecord> {
        self.themes.iter().find(|theme| theme.name == name)
    }

    /// Theme names in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.iter().map(|theme| theme.name).collect()
    }

    /// Iterate themes in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &ThemeRecord> {
        self.themes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ensures enum discriminants line up with the canonical order so
    // `ColorSet::get` can index directly.
    #[test]
    fn role_order_matches_discriminants() {
        for (idx, role) in Role::ALL.iter().enumerate() {
            assert_eq!(*role as usize, idx, "role {} out of order", role.key());
        }
    }

    // Ensures every entry is stored under its own role.
    #[test]
    fn color_set_get_returns_matching_role() {
        let catalog = Catalog::builtin();
        let dracula = catalog.lookup("dracula").expect("dracula exists");
        for role in Role::ALL {
            assert_eq!(dracula.colors.get(role).role, role);
        }
    }

    // Ensures the derived representations agree with the published palette.
    #[test]
    fn representations_derive_from_one_triple() {
        let purple = Rgb::new(189, 147, 249);
        assert_eq!(purple.ansi(), "\\033[38;2;189;147;249m");
        assert_eq!(purple.decimal(), "189,147,249");
        assert_eq!(purple.hex(), "#BD93F9");
    }

    // Ensures catalog order matches definition order.
    #[test]
    fn builtin_catalog_names_in_definition_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.names(), vec!["dracula", "cyberpunk", "nord", "gruvbox"]);
    }

    #[test]
    fn lookup_misses_return_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.lookup("solarized").is_none());
    }

    // Ensures the JSON shape groups representations under role-keyed maps.
    #[test]
    fn theme_record_serializes_grouped_color_maps() {
        let catalog = Catalog::builtin();
        let nord = catalog.lookup("nord").expect("nord exists");
        let value = serde_json::to_value(nord).expect("serialize");

        assert_eq!(value["name"], "nord");
        assert_eq!(value["style"], "dark");
        assert_eq!(value["colors"]["hex"]["cyan"], "#88C0D0");
        assert_eq!(value["colors"]["rgb"]["background"], "46,52,64");
        assert_eq!(value["colors"]["ansi"]["red"], "\\033[38;2;191;97;106m");
        assert_eq!(value["colors"]["term"]["white"], 255);
    }

    #[test]
    fn style_display_is_lowercase() {
        assert_eq!(ThemeStyle::Dark.to_string(), "dark");
        assert_eq!(ThemeStyle::Light.to_string(), "light");
    }
}
