//! User-defined presets loaded from YAML stylesheets.
//!
//! A stylesheet lists plain styles and, optionally, combinations of styles
//! that are registered after them:
//!
//! ```yaml
//! styles:
//!   - name: poster
//!     category: misc
//!     description: Large text for posters
//!     theme:
//!       figure_size: { width: 12.0, height: 9.0 }
//!       font_size: 24
//!       line_width: 3
//! combinations:
//!   - name: science+poster
//!     parts: [science, poster]
//! ```
//!
//! Theme keys are the snake_case setting names (see
//! [`SettingKey::as_str`](crate::SettingKey::as_str)) and colors are
//! `#RRGGBB` strings. JSON documents are accepted too, being valid YAML.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::{StyleEntry, StyleError, StyleRegistry};

/// A parsed stylesheet document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stylesheet {
    #[serde(default)]
    pub styles: Vec<StyleEntry>,
    #[serde(default)]
    pub combinations: Vec<Combination>,
}

/// A combination style declared in a stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Combination {
    pub name: String,
    /// Styles merged left to right; later parts win.
    pub parts: Vec<String>,
}

/// Error returned when a stylesheet cannot be loaded.
#[derive(Debug, Error)]
pub enum StylesheetError {
    #[error("failed to parse stylesheet: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to read stylesheet \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Style(#[from] StyleError),
}

impl Stylesheet {
    /// Parses a stylesheet from YAML (or JSON) text.
    pub fn from_yaml(source: &str) -> Result<Self, StylesheetError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads and parses a stylesheet file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| StylesheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Serializes the stylesheet back to YAML.
    pub fn to_yaml(&self) -> Result<String, StylesheetError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl StyleRegistry {
    /// Registers every style of `sheet`, then its combinations.
    ///
    /// Styles follow the usual last-write-wins rule, so a stylesheet may
    /// override builtin presets. Loading is all-or-nothing: if any
    /// combination names an unknown part, the registry is left unchanged.
    ///
    /// Returns the number of entries registered.
    pub fn load_stylesheet(&mut self, sheet: Stylesheet) -> Result<usize, StylesheetError> {
        let mut staged = self.clone();
        let count = sheet.styles.len() + sheet.combinations.len();

        for entry in sheet.styles {
            staged.insert(entry);
        }
        for combination in &sheet.combinations {
            let parts: Vec<&str> = combination.parts.iter().map(String::as_str).collect();
            staged.combine(combination.name.as_str(), &parts)?;
        }

        *self = staged;
        debug!("loaded {} styles from stylesheet", count);
        Ok(count)
    }

    /// Parses YAML text and loads it with [`load_stylesheet`](Self::load_stylesheet).
    pub fn load_stylesheet_str(&mut self, source: &str) -> Result<usize, StylesheetError> {
        self.load_stylesheet(Stylesheet::from_yaml(source)?)
    }

    /// Reads a stylesheet file and loads it with [`load_stylesheet`](Self::load_stylesheet).
    pub fn load_stylesheet_file(&mut self, path: impl AsRef<Path>) -> Result<usize, StylesheetError> {
        let path = path.as_ref();
        debug!("reading stylesheet {}", path.display());
        self.load_stylesheet(Stylesheet::from_file(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Category;
    use crate::theme::{FigureSize, Setting, SettingKey};
    use crate::Color;
    use std::io::Write;

    const POSTER: &str = r##"
styles:
  - name: poster
    category: misc
    description: Large text for posters
    theme:
      figure_size: { width: 12.0, height: 9.0 }
      font_size: 24
      palette: ["#112233", "#445566"]
combinations:
  - name: science+poster
    parts: [science, poster]
"##;

    #[test]
    fn test_parse_stylesheet() {
        let sheet = Stylesheet::from_yaml(POSTER).unwrap();
        assert_eq!(sheet.styles.len(), 1);
        let poster = &sheet.styles[0];
        assert_eq!(poster.category, Category::Misc);
        assert_eq!(poster.theme.figure_size(), Some(FigureSize::new(12.0, 9.0)));
        assert_eq!(
            poster.theme.get(SettingKey::FontSize),
            Some(&Setting::FontSize(24.0))
        );
        assert_eq!(
            poster.theme.palette(),
            Some(&[Color::from_u32(0x112233), Color::from_u32(0x445566)][..])
        );
        assert_eq!(sheet.combinations[0].parts, vec!["science", "poster"]);
    }

    #[test]
    fn test_load_into_builtin_registry() {
        let mut registry = StyleRegistry::builtin();
        let before = registry.len();
        let loaded = registry.load_stylesheet_str(POSTER).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(registry.len(), before + 2);
        let combined = registry.get("science+poster").unwrap();
        assert_eq!(combined.category, Category::Combinations);
        assert_eq!(combined.theme.font_family(), Some("serif"));
        assert_eq!(
            combined.theme.get(SettingKey::FontSize),
            Some(&Setting::FontSize(24.0))
        );
    }

    #[test]
    fn test_failed_combination_leaves_registry_unchanged() {
        let mut registry = StyleRegistry::new();
        let source = r#"
styles:
  - name: a
    category: misc
    theme: { dpi: 100 }
combinations:
  - name: a+b
    parts: [a, b]
"#;
        let err = registry.load_stylesheet_str(source).unwrap_err();
        assert!(matches!(
            err,
            StylesheetError::Style(StyleError::NotFound { ref name, .. }) if name == "b"
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unknown_setting_is_a_parse_error() {
        let source = "styles:\n  - name: x\n    category: misc\n    theme: { glitter: 1 }\n";
        let err = Stylesheet::from_yaml(source).unwrap_err();
        assert!(matches!(err, StylesheetError::Parse(_)));
    }

    #[test]
    fn test_unknown_category_is_a_parse_error() {
        let source = "styles:\n  - name: x\n    category: fancy\n    theme: {}\n";
        assert!(Stylesheet::from_yaml(source).is_err());
    }

    #[test]
    fn test_json_document_accepted() {
        let source = r##"{"styles": [{"name": "j", "category": "color", "theme": {"palette": ["#000000"]}}]}"##;
        let sheet = Stylesheet::from_yaml(source).unwrap();
        assert_eq!(sheet.styles[0].theme.palette(), Some(&[Color::BLACK][..]));
        assert_eq!(sheet.styles[0].description, "");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(POSTER.as_bytes()).unwrap();

        let mut registry = StyleRegistry::builtin();
        registry.load_stylesheet_file(file.path()).unwrap();
        assert!(registry.contains("poster"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let err = Stylesheet::from_file(&missing).unwrap_err();
        assert!(matches!(err, StylesheetError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_yaml_round_trip_preserves_theme() {
        let sheet = Stylesheet::from_yaml(POSTER).unwrap();
        let again = Stylesheet::from_yaml(&sheet.to_yaml().unwrap()).unwrap();
        assert_eq!(again, sheet);
    }
}
