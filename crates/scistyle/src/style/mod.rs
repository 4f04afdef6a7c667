//! Named style presets.
//!
//! This module provides:
//!
//! - [`StyleRegistry`]: name-to-preset map with list, lookup and apply operations
//! - [`StyleEntry`]: one registered preset
//! - [`Category`]: the grouping tags for presets
//! - [`StyleError`]: lookup and registration failures
//!
//! The builtin presets are registered by [`StyleRegistry::builtin`].

mod builtin;
mod category;
mod error;
mod registry;

pub use builtin::{BASE_STYLE, COMBINED_COLOR_SCHEMES, COMBINED_STYLES};
pub use category::{Category, ParseCategoryError, BASE_CATEGORIES};
pub use error::StyleError;
pub use registry::{StyleEntry, StyleRegistry};
