//! Process-wide default rendering configuration.
//!
//! The renderer reads its defaults through a [`DefaultsBackend`]. Out of the
//! box this is an in-memory [`Theme`]; a rendering library installs its own
//! backend with [`set_defaults_backend`] so that [`use_style`](crate::use_style)
//! and friends write straight into its configuration.
//!
//! Individual reads and writes are serialized by a lock, but a
//! capture/apply/restore sequence is not atomic. Styled sections must not
//! run concurrently from several threads.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::theme::Theme;

/// Read/replace access to a renderer's default configuration.
pub trait DefaultsBackend: Send {
    /// Returns a full copy of the current defaults.
    fn get(&self) -> Theme;

    /// Replaces the defaults wholesale.
    fn set(&mut self, theme: Theme);
}

/// Backend keeping the defaults in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDefaults {
    theme: Theme,
}

impl InMemoryDefaults {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl DefaultsBackend for InMemoryDefaults {
    fn get(&self) -> Theme {
        self.theme.clone()
    }

    fn set(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

static BACKEND: Lazy<Mutex<Box<dyn DefaultsBackend>>> =
    Lazy::new(|| Mutex::new(Box::new(InMemoryDefaults::default())));

// Every write is a single `set`, so a poisoned lock never guards a
// half-written theme.
fn backend() -> MutexGuard<'static, Box<dyn DefaultsBackend>> {
    BACKEND.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Installs a new defaults backend, returning the previous one.
pub fn set_defaults_backend(backend_impl: Box<dyn DefaultsBackend>) -> Box<dyn DefaultsBackend> {
    debug!("installing new defaults backend");
    std::mem::replace(&mut *backend(), backend_impl)
}

/// Returns a snapshot of the current defaults.
pub fn current_defaults() -> Theme {
    backend().get()
}

/// Replaces the defaults wholesale.
pub fn replace_defaults(theme: Theme) {
    trace!("replacing defaults ({} settings)", theme.len());
    backend().set(theme);
}

/// Overlays `theme` onto the current defaults.
///
/// Settings not mentioned in `theme` keep their current values.
pub fn update_defaults(theme: &Theme) {
    let mut guard = backend();
    let merged = guard.get().merged(theme);
    trace!("updating defaults with {} settings", theme.len());
    guard.set(merged);
}

/// Clears every default.
pub fn reset_defaults() {
    replace_defaults(Theme::new());
}

/// Restores a snapshot of the defaults when dropped.
///
/// The guard captures the full configuration, so every change made while it
/// is alive is rolled back, not only the settings a style touched. Dropping
/// happens on normal exit, early return and panic unwinding alike.
///
/// ```rust
/// use scistyle::defaults::{current_defaults, update_defaults, DefaultsGuard};
/// use scistyle::{Setting, Theme};
///
/// let before = current_defaults();
/// {
///     let _guard = DefaultsGuard::capture();
///     update_defaults(&Theme::new().with(Setting::Dpi(1200)));
/// }
/// assert_eq!(current_defaults(), before);
/// ```
#[must_use = "the defaults are restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct DefaultsGuard {
    saved: Option<Theme>,
}

impl DefaultsGuard {
    pub fn capture() -> Self {
        Self {
            saved: Some(current_defaults()),
        }
    }

    /// The configuration that will be restored.
    pub fn snapshot(&self) -> Option<&Theme> {
        self.saved.as_ref()
    }
}

impl Drop for DefaultsGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            debug!("restoring {} saved default settings", saved.len());
            replace_defaults(saved);
        }
    }
}
