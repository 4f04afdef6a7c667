//! Style registry errors.

use thiserror::Error;

/// Error returned by style lookups and strict registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// No style with the requested name is registered.
    #[error("style \"{name}\" not found; available styles: {}", .available.join(", "))]
    NotFound {
        /// The name that was requested
        name: String,
        /// Every registered name, sorted
        available: Vec<String>,
    },
    /// A strict registration hit an existing name.
    #[error("style \"{name}\" is already registered")]
    DuplicateName { name: String },
}
