//! Theme struct holding a typed setting map.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::setting::{FigureSize, Setting, SettingKey};
use crate::color::Color;

/// A mapping from setting key to typed value.
///
/// Each key holds at most one setting, and the value type is fixed by the
/// key, so a theme can never carry a palette where a font size belongs.
///
/// # Example
///
/// ```rust
/// use scistyle::{Color, Setting, SettingKey, Theme};
///
/// let theme = Theme::new()
///     .with(Setting::Dpi(600))
///     .with(Setting::Palette(vec![Color::BLACK]))
///     .with(Setting::Grid(false));
///
/// assert_eq!(theme.len(), 3);
/// assert_eq!(theme.get(SettingKey::Dpi), Some(&Setting::Dpi(600)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    settings: BTreeMap<SettingKey, Setting>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a setting, returning the updated theme for chaining.
    ///
    /// A setting with the same key replaces the earlier one.
    pub fn with(mut self, setting: Setting) -> Self {
        self.set(setting);
        self
    }

    /// Inserts a setting, returning the value it replaced.
    pub fn set(&mut self, setting: Setting) -> Option<Setting> {
        self.settings.insert(setting.key(), setting)
    }

    pub fn get(&self, key: SettingKey) -> Option<&Setting> {
        self.settings.get(&key)
    }

    pub fn remove(&mut self, key: SettingKey) -> Option<Setting> {
        self.settings.remove(&key)
    }

    pub fn contains(&self, key: SettingKey) -> bool {
        self.settings.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Iterates settings in key declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.settings.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = SettingKey> + '_ {
        self.settings.keys().copied()
    }

    /// Writes every setting of `over` into `self`.
    ///
    /// Keys present in both take the value from `over`; keys only in
    /// `self` are kept.
    pub fn overlay(&mut self, over: &Theme) {
        for setting in over.iter() {
            self.set(setting.clone());
        }
    }

    /// Returns `self` overlaid with `over`, leaving both operands untouched.
    ///
    /// This is how combination styles are built: the base style is the
    /// lower-priority left operand.
    ///
    /// ```rust
    /// use scistyle::{Setting, SettingKey, Theme};
    ///
    /// let base = Theme::new().with(Setting::Dpi(300)).with(Setting::Grid(false));
    /// let journal = Theme::new().with(Setting::Dpi(600));
    ///
    /// let merged = base.merged(&journal);
    /// assert_eq!(merged.get(SettingKey::Dpi), Some(&Setting::Dpi(600)));
    /// assert_eq!(merged.get(SettingKey::Grid), Some(&Setting::Grid(false)));
    /// ```
    pub fn merged(&self, over: &Theme) -> Theme {
        let mut merged = self.clone();
        merged.overlay(over);
        merged
    }

    pub fn palette(&self) -> Option<&[Color]> {
        match self.get(SettingKey::Palette) {
            Some(Setting::Palette(colors)) => Some(colors),
            _ => None,
        }
    }

    pub fn figure_size(&self) -> Option<FigureSize> {
        match self.get(SettingKey::FigureSize) {
            Some(Setting::FigureSize(size)) => Some(*size),
            _ => None,
        }
    }

    pub fn font_family(&self) -> Option<&str> {
        match self.get(SettingKey::FontFamily) {
            Some(Setting::FontFamily(family)) => Some(family),
            _ => None,
        }
    }
}

impl FromIterator<Setting> for Theme {
    fn from_iter<I: IntoIterator<Item = Setting>>(iter: I) -> Self {
        let mut theme = Theme::new();
        for setting in iter {
            theme.set(setting);
        }
        theme
    }
}

/// Serializes only the payload of a setting; the key is written by the map.
struct SettingValue<'a>(&'a Setting);

impl Serialize for SettingValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize_value(serializer)
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, setting) in &self.settings {
            map.serialize_entry(key, &SettingValue(setting))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ThemeVisitor;

        impl<'de> Visitor<'de> for ThemeVisitor {
            type Value = Theme;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of setting names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Theme, A::Error> {
                let mut theme = Theme::new();
                while let Some(key) = map.next_key::<SettingKey>()? {
                    let setting = Setting::next_value(key, &mut map)?;
                    if theme.set(setting).is_some() {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate setting `{}`",
                            key.as_str()
                        )));
                    }
                }
                Ok(theme)
            }
        }

        deserializer.deserialize_map(ThemeVisitor)
    }
}
