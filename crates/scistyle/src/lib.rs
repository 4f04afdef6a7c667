//! # scistyle - named style presets for scientific plots
//!
//! `scistyle` keeps a registry of ready-made plot styles (color palettes,
//! fonts, figure sizes, grid and tick settings) and applies them to a
//! renderer's default configuration or to a single plot object.
//!
//! ## Quick start
//!
//! ```rust
//! use scistyle::{list_styles, with_style, Category, SettingKey};
//!
//! // Every builtin color scheme, sorted
//! let colors = list_styles(Some(Category::Color));
//! assert!(colors.contains(&"bright".to_string()));
//!
//! // Temporarily switch the defaults to the IEEE combination
//! let dpi = with_style("science+ieee", || {
//!     scistyle::defaults::current_defaults().get(SettingKey::Dpi).cloned()
//! })
//! .unwrap();
//! assert!(dpi.is_some());
//! ```
//!
//! ## Concepts
//!
//! - [`Theme`]: a typed map of [`Setting`] values, merged with
//!   [`Theme::merged`] (right operand wins)
//! - [`StyleRegistry`]: named [`StyleEntry`] presets grouped by [`Category`]
//! - [`defaults`]: the process-wide configuration that [`use_style`] writes to
//! - [`ThemeTarget`]: per-object application used by [`apply_theme`]
//! - [`palette::rainbow_colors`]: discrete rainbow palettes of any size
//! - [`stylesheet`]: user presets loaded from YAML
//!
//! ## Builtin styles
//!
//! The shared registry returned by [`registry`] is built on first use and
//! never changes afterwards. It holds the `science` base style, eight named
//! color schemes plus `discrete-rainbow-1` to `discrete-rainbow-23`, the
//! `ieee` and `nature` journal styles, the `grid`, `notebook`, `no-latex` and
//! `sans` misc styles, six language font styles, and `science+<style>`
//! combinations. Build a [`StyleRegistry`] of your own to add presets.

pub mod color;
pub mod defaults;
pub mod palette;
pub mod style;
pub mod stylesheet;
pub mod theme;

use once_cell::sync::Lazy;

pub use color::{Color, ColorParseError};
pub use defaults::{DefaultsBackend, DefaultsGuard};
pub use palette::{rainbow_colors, PaletteError};
pub use style::{Category, StyleEntry, StyleError, StyleRegistry};
pub use stylesheet::{Stylesheet, StylesheetError};
pub use theme::{
    FigureSize, FrameStyle, LineStyle, Marker, Setting, SettingKey, Theme, ThemeTarget,
    TickDirection,
};

static BUILTIN: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::builtin);

/// Returns the shared builtin registry, building it on first call.
pub fn registry() -> &'static StyleRegistry {
    &BUILTIN
}

/// Returns the base categories: science, journals, color, languages, misc.
pub fn list_categories() -> &'static [Category] {
    StyleRegistry::list_categories()
}

/// Returns the sorted builtin style names, optionally filtered by category.
pub fn list_styles(category: Option<Category>) -> Vec<String> {
    registry().list_styles(category)
}

/// Looks up a builtin style's theme.
pub fn get_theme(name: &str) -> Result<&'static Theme, StyleError> {
    registry().get_theme(name)
}

/// Overlays a builtin style onto the process-wide defaults.
///
/// Nothing changes when the name is unknown.
pub fn use_style(name: &str) -> Result<(), StyleError> {
    registry().use_style(name)
}

/// Overlays several builtin styles, in order, onto the defaults.
pub fn use_styles(names: &[&str]) -> Result<(), StyleError> {
    registry().use_styles(names)
}

/// Runs `body` with a builtin style applied, restoring the defaults afterwards.
///
/// See [`StyleRegistry::with_style`].
pub fn with_style<T, F>(name: &str, body: F) -> Result<T, StyleError>
where
    F: FnOnce() -> T,
{
    registry().with_style(name, body)
}

/// Applies a builtin style to one target and returns it.
pub fn apply_theme<P: ThemeTarget>(plot: P, name: &str) -> Result<P, StyleError> {
    registry().apply_theme(plot, name)
}
