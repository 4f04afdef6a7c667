//! Per-object application of themes.

use super::setting::Setting;
use super::theme::Theme;

/// Something a theme can be applied to, such as a single plot or figure.
///
/// Implementors only need to handle individual settings; settings they do
/// not support can be ignored. Application never touches the process-wide
/// defaults.
///
/// # Example
///
/// ```rust
/// use scistyle::{Setting, Theme, ThemeTarget};
///
/// #[derive(Default)]
/// struct Figure {
///     dpi: u32,
/// }
///
/// impl ThemeTarget for Figure {
///     fn apply_setting(&mut self, setting: &Setting) {
///         if let Setting::Dpi(dpi) = setting {
///             self.dpi = *dpi;
///         }
///     }
/// }
///
/// let mut fig = Figure::default();
/// fig.apply_theme(&Theme::new().with(Setting::Dpi(600)));
/// assert_eq!(fig.dpi, 600);
/// ```
pub trait ThemeTarget {
    fn apply_setting(&mut self, setting: &Setting);

    /// Applies every setting of `theme` in key order.
    fn apply_theme(&mut self, theme: &Theme) {
        for setting in theme.iter() {
            self.apply_setting(setting);
        }
    }
}

impl ThemeTarget for Theme {
    fn apply_setting(&mut self, setting: &Setting) {
        self.set(setting.clone());
    }
}
