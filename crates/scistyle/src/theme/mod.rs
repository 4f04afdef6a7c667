//! Typed theme model.
//!
//! This module provides:
//!
//! - [`Setting`] / [`SettingKey`]: the closed set of visual settings
//! - [`Theme`]: an ordered setting map with overlay merging
//! - [`ThemeTarget`]: the contract for applying a theme to one plot object
//!
//! Value enums ([`LineStyle`], [`Marker`], [`FrameStyle`], [`TickDirection`])
//! and [`FigureSize`] are re-exported for building settings.

mod setting;
mod target;
#[allow(clippy::module_inception)]
mod theme;

pub use setting::{FigureSize, FrameStyle, LineStyle, Marker, Setting, SettingKey, TickDirection};
pub use target::ThemeTarget;
pub use theme::Theme;
