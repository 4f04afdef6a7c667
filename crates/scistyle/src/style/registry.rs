//! Registry of named style presets.
//!
//! [`StyleRegistry`] maps style names to [`StyleEntry`] values and applies
//! their themes either to the process-wide defaults or to a single
//! [`ThemeTarget`].
//!
//! # Registration
//!
//! [`StyleRegistry::register`] follows last-write-wins: registering a name
//! twice replaces the earlier entry and hands it back. Use
//! [`StyleRegistry::try_register`] to reject duplicates instead.
//!
//! Combination styles are registered with [`StyleRegistry::combine`], which
//! merges already registered themes left to right. The parts must exist at
//! that point, so combinations are always registered last.
//!
//! # Applying styles
//!
//! | Method | Target | Restored |
//! |--------|--------|----------|
//! | [`use_style`](StyleRegistry::use_style) | process-wide defaults | never |
//! | [`with_style`](StyleRegistry::with_style) | process-wide defaults | after the closure |
//! | [`scoped`](StyleRegistry::scoped) | process-wide defaults | when the guard drops |
//! | [`apply_theme`](StyleRegistry::apply_theme) | one object | n/a |
//!
//! Lookups happen before anything is written, so an unknown name never
//! leaves a partially applied style behind.

use std::collections::BTreeMap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::category::{Category, BASE_CATEGORIES};
use super::error::StyleError;
use crate::defaults::{update_defaults, DefaultsGuard};
use crate::theme::{Theme, ThemeTarget};

/// One named visual preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleEntry {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub theme: Theme,
}

impl StyleEntry {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
        theme: Theme,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
            theme,
        }
    }
}

/// Registry of style presets keyed by name.
///
/// Names are case-sensitive and kept sorted, so listings come back in
/// alphabetical order.
///
/// # Example
///
/// ```rust
/// use scistyle::{Category, Setting, StyleRegistry, Theme};
///
/// let mut registry = StyleRegistry::new();
/// registry.register(
///     "base",
///     Category::Science,
///     "Base style",
///     Theme::new().with(Setting::Dpi(300)).with(Setting::Grid(false)),
/// );
/// registry.register(
///     "print",
///     Category::Journals,
///     "High resolution",
///     Theme::new().with(Setting::Dpi(600)),
/// );
/// registry.combine("base+print", &["base", "print"]).unwrap();
///
/// let theme = registry.get_theme("base+print").unwrap();
/// assert_eq!(theme.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    entries: BTreeMap<String, StyleEntry>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every builtin preset.
    ///
    /// Most callers want the shared instance from [`crate::registry`]
    /// instead of building a fresh copy.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        super::builtin::populate(&mut registry);
        debug!("built builtin style registry with {} styles", registry.len());
        registry
    }

    /// Registers a style, replacing any entry with the same name.
    ///
    /// Returns the replaced entry, if any.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
        theme: Theme,
    ) -> Option<StyleEntry> {
        self.insert(StyleEntry::new(name, category, description, theme))
    }

    /// Registers a style, failing if the name is taken.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::DuplicateName`] and leaves the registry unchanged
    /// if `name` is already registered.
    pub fn try_register(
        &mut self,
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
        theme: Theme,
    ) -> Result<(), StyleError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(StyleError::DuplicateName { name });
        }
        self.insert(StyleEntry::new(name, category, description, theme));
        Ok(())
    }

    /// Inserts a prepared entry with last-write-wins semantics.
    pub fn insert(&mut self, entry: StyleEntry) -> Option<StyleEntry> {
        trace!("registering style \"{}\" ({})", entry.name, entry.category);
        let replaced = self.entries.insert(entry.name.clone(), entry);
        if let Some(old) = &replaced {
            debug!("style \"{}\" replaced an existing entry", old.name);
        }
        replaced
    }

    /// Registers a combination style merged from `parts`, left to right.
    ///
    /// Later parts override earlier ones on shared settings; settings present
    /// in only one part are kept. The entry is tagged
    /// [`Category::Combinations`].
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotFound`] for the first missing part; nothing
    /// is registered in that case.
    pub fn combine(&mut self, name: impl Into<String>, parts: &[&str]) -> Result<(), StyleError> {
        let mut theme = Theme::new();
        for part in parts {
            theme.overlay(self.get_theme(part)?);
        }
        let description = format!("Combination of {}", parts.join(" + "));
        self.register(name, Category::Combinations, description, theme);
        Ok(())
    }

    /// Looks up an entry by name.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotFound`] carrying every known name.
    pub fn get(&self, name: &str) -> Result<&StyleEntry, StyleError> {
        self.entries.get(name).ok_or_else(|| StyleError::NotFound {
            name: name.to_string(),
            available: self.names().map(str::to_string).collect(),
        })
    }

    /// Looks up the theme of a style.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotFound`] carrying every known name.
    pub fn get_theme(&self, name: &str) -> Result<&Theme, StyleError> {
        self.get(name).map(|entry| &entry.theme)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates registered names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = &StyleEntry> {
        self.entries.values()
    }

    /// Returns the sorted style names, optionally restricted to one category.
    ///
    /// An empty vector is returned when nothing matches.
    pub fn list_styles(&self, category: Option<Category>) -> Vec<String> {
        self.entries
            .values()
            .filter(|entry| category.is_none() || category == Some(entry.category))
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Returns the base categories in display order.
    pub fn list_categories() -> &'static [Category] {
        BASE_CATEGORIES
    }

    /// Overlays a style onto the process-wide defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotFound`] without touching the defaults.
    pub fn use_style(&self, name: &str) -> Result<(), StyleError> {
        let theme = self.get_theme(name)?;
        debug!("applying style \"{}\" to defaults", name);
        update_defaults(theme);
        Ok(())
    }

    /// Overlays several styles onto the defaults, in order.
    ///
    /// Every name is resolved before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotFound`] for the first unknown name without
    /// touching the defaults.
    pub fn use_styles(&self, names: &[&str]) -> Result<(), StyleError> {
        let mut combined = Theme::new();
        for name in names {
            combined.overlay(self.get_theme(name)?);
        }
        debug!("applying styles [{}] to defaults", names.join(", "));
        update_defaults(&combined);
        Ok(())
    }

    /// Applies a style to the defaults until the returned guard is dropped.
    ///
    /// The guard snapshots the whole configuration before the style is
    /// applied and restores that snapshot on drop.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotFound`]; the defaults are left as they were.
    pub fn scoped(&self, name: &str) -> Result<DefaultsGuard, StyleError> {
        let guard = DefaultsGuard::capture();
        self.use_style(name)?;
        Ok(guard)
    }

    /// Runs `body` with a style applied to the defaults.
    ///
    /// The previous defaults are restored afterwards on every path: normal
    /// return, a panic inside `body` (during unwinding), and a failed lookup.
    /// Anything `body` changed in the defaults is rolled back as well.
    ///
    /// Fallible bodies return their own `Result`, which comes back untouched
    /// inside the `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotFound`] without running `body`.
    pub fn with_style<T, F>(&self, name: &str, body: F) -> Result<T, StyleError>
    where
        F: FnOnce() -> T,
    {
        let guard = self.scoped(name)?;
        let output = body();
        drop(guard);
        Ok(output)
    }

    /// Applies a style to a single target and returns it.
    ///
    /// The process-wide defaults are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotFound`]; the target is dropped unchanged.
    pub fn apply_theme<P: ThemeTarget>(&self, mut plot: P, name: &str) -> Result<P, StyleError> {
        let theme = self.get_theme(name)?;
        plot.apply_theme(theme);
        Ok(plot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{current_defaults, replace_defaults, reset_defaults};
    use crate::theme::{Setting, SettingKey};
    use serial_test::serial;

    fn sample() -> StyleRegistry {
        let mut registry = StyleRegistry::new();
        registry.register(
            "base",
            Category::Science,
            "base",
            Theme::new()
                .with(Setting::Dpi(300))
                .with(Setting::Grid(false))
                .with(Setting::FontFamily("serif".into())),
        );
        registry.register(
            "print",
            Category::Journals,
            "print",
            Theme::new().with(Setting::Dpi(600)),
        );
        registry.register(
            "lined",
            Category::Misc,
            "lined",
            Theme::new().with(Setting::Grid(true)).with(Setting::Dpi(150)),
        );
        registry
    }

    // =========================================================================
    // Registration
    // =========================================================================

    #[test]
    fn test_register_overwrites_and_returns_previous() {
        let mut registry = sample();
        let replaced = registry.register("print", Category::Misc, "again", Theme::new());
        assert_eq!(replaced.map(|e| e.category), Some(Category::Journals));
        assert_eq!(registry.get("print").unwrap().category, Category::Misc);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_try_register_rejects_duplicate() {
        let mut registry = sample();
        let result = registry.try_register("base", Category::Misc, "", Theme::new());
        assert_eq!(
            result,
            Err(StyleError::DuplicateName {
                name: "base".to_string()
            })
        );
        assert_eq!(registry.get("base").unwrap().category, Category::Science);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let registry = sample();
        assert!(registry.contains("base"));
        assert!(!registry.contains("Base"));
    }

    // =========================================================================
    // Combination
    // =========================================================================

    #[test]
    fn test_combine_later_parts_win() {
        let mut registry = sample();
        registry.combine("base+print", &["base", "print"]).unwrap();

        let entry = registry.get("base+print").unwrap();
        assert_eq!(entry.category, Category::Combinations);
        assert_eq!(entry.theme.get(SettingKey::Dpi), Some(&Setting::Dpi(600)));
        assert_eq!(entry.theme.get(SettingKey::Grid), Some(&Setting::Grid(false)));
        assert_eq!(entry.theme.font_family(), Some("serif"));
    }

    #[test]
    fn test_combine_three_parts() {
        let mut registry = sample();
        registry
            .combine("all", &["base", "lined", "print"])
            .unwrap();
        let theme = registry.get_theme("all").unwrap();
        assert_eq!(theme.get(SettingKey::Dpi), Some(&Setting::Dpi(600)));
        assert_eq!(theme.get(SettingKey::Grid), Some(&Setting::Grid(true)));
    }

    #[test]
    fn test_combine_missing_part_registers_nothing() {
        let mut registry = sample();
        let result = registry.combine("base+ghost", &["base", "ghost"]);
        assert!(matches!(result, Err(StyleError::NotFound { ref name, .. }) if name == "ghost"));
        assert!(!registry.contains("base+ghost"));
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[test]
    fn test_list_styles_sorted() {
        let registry = sample();
        assert_eq!(registry.list_styles(None), vec!["base", "lined", "print"]);
    }

    #[test]
    fn test_list_styles_filters_by_category() {
        let registry = sample();
        assert_eq!(registry.list_styles(Some(Category::Journals)), vec!["print"]);
        assert!(registry.list_styles(Some(Category::Languages)).is_empty());
    }

    #[test]
    fn test_get_not_found_carries_known_names() {
        let registry = sample();
        match registry.get_theme("nope") {
            Err(StyleError::NotFound { name, available }) => {
                assert_eq!(name, "nope");
                assert_eq!(available, vec!["base", "lined", "print"]);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_list_categories() {
        assert_eq!(StyleRegistry::list_categories(), BASE_CATEGORIES);
    }

    // =========================================================================
    // Applying
    // =========================================================================

    #[test]
    #[serial]
    fn test_use_style_overlays_defaults() {
        replace_defaults(Theme::new().with(Setting::FontSize(12.0)));
        sample().use_style("print").unwrap();

        let now = current_defaults();
        assert_eq!(now.get(SettingKey::Dpi), Some(&Setting::Dpi(600)));
        assert_eq!(now.get(SettingKey::FontSize), Some(&Setting::FontSize(12.0)));
        reset_defaults();
    }

    #[test]
    #[serial]
    fn test_use_style_unknown_leaves_defaults() {
        replace_defaults(Theme::new().with(Setting::Dpi(72)));
        let before = current_defaults();
        assert!(sample().use_style("nonexistent").is_err());
        assert_eq!(current_defaults(), before);
        reset_defaults();
    }

    #[test]
    #[serial]
    fn test_use_styles_applies_in_order() {
        reset_defaults();
        sample().use_styles(&["lined", "print"]).unwrap();
        let now = current_defaults();
        assert_eq!(now.get(SettingKey::Dpi), Some(&Setting::Dpi(600)));
        assert_eq!(now.get(SettingKey::Grid), Some(&Setting::Grid(true)));
        reset_defaults();
    }

    #[test]
    #[serial]
    fn test_use_styles_unknown_applies_nothing() {
        reset_defaults();
        assert!(sample().use_styles(&["print", "ghost"]).is_err());
        assert!(current_defaults().is_empty());
    }

    #[test]
    #[serial]
    fn test_with_style_returns_body_value_and_restores() {
        replace_defaults(Theme::new().with(Setting::Dpi(72)));
        let before = current_defaults();

        let seen = sample()
            .with_style("print", || current_defaults().get(SettingKey::Dpi).cloned())
            .unwrap();

        assert_eq!(seen, Some(Setting::Dpi(600)));
        assert_eq!(current_defaults(), before);
        reset_defaults();
    }

    #[test]
    #[serial]
    fn test_with_style_restores_after_body_error() {
        replace_defaults(Theme::new().with(Setting::Dpi(72)));
        let before = current_defaults();

        let result: Result<Result<(), String>, StyleError> =
            sample().with_style("lined", || Err("plot failed".to_string()));

        assert_eq!(result, Ok(Err("plot failed".to_string())));
        assert_eq!(current_defaults(), before);
        reset_defaults();
    }

    #[test]
    #[serial]
    fn test_with_style_unknown_skips_body() {
        reset_defaults();
        let mut ran = false;
        let result = sample().with_style("ghost", || ran = true);
        assert!(matches!(result, Err(StyleError::NotFound { .. })));
        assert!(!ran);
        assert!(current_defaults().is_empty());
    }

    #[test]
    #[serial]
    fn test_scoped_guard_restores_on_drop() {
        reset_defaults();
        let registry = sample();
        {
            let _guard = registry.scoped("base").unwrap();
            assert_eq!(current_defaults().len(), 3);
        }
        assert!(current_defaults().is_empty());
    }

    #[test]
    #[serial]
    fn test_apply_theme_targets_object_only() {
        reset_defaults();
        let target = Theme::new().with(Setting::FontSize(9.0));
        let styled = sample().apply_theme(target, "print").unwrap();

        assert_eq!(styled.get(SettingKey::Dpi), Some(&Setting::Dpi(600)));
        assert_eq!(styled.get(SettingKey::FontSize), Some(&Setting::FontSize(9.0)));
        assert!(current_defaults().is_empty());
    }

    #[test]
    fn test_apply_theme_unknown() {
        let result = sample().apply_theme(Theme::new(), "ghost");
        assert!(matches!(result, Err(StyleError::NotFound { .. })));
    }
}
