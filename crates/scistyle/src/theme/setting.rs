//! The closed set of visual settings a theme can carry.

use serde::de::MapAccess;
use serde::{Deserialize, Serialize, Serializer};

use crate::color::Color;

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Line dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
    None,
}

/// Marker shape for point series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Diamond,
}

/// Which axis spines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStyle {
    /// All four spines.
    Box,
    /// Left and bottom spines only.
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickDirection {
    In,
    Out,
    InOut,
}

/// Declares [`SettingKey`] and [`Setting`] from one list so the key set,
/// the payload types and the serialized names cannot drift apart.
macro_rules! settings {
    ($( $(#[$doc:meta])* $variant:ident($ty:ty) => $key:literal, )*) => {
        /// Identifies a setting independently of its value.
        ///
        /// Keys order by declaration, which is also the order a
        /// [`Theme`](super::Theme) iterates in.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum SettingKey {
            $( #[serde(rename = $key)] $variant, )*
        }

        impl SettingKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [SettingKey] = &[$( SettingKey::$variant, )*];

            /// The snake_case name used in stylesheets and serialized themes.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( SettingKey::$variant => $key, )*
                }
            }
        }

        /// A single visual setting together with its typed value.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Setting {
            $( $(#[$doc])* $variant($ty), )*
        }

        impl Setting {
            pub fn key(&self) -> SettingKey {
                match self {
                    $( Setting::$variant(_) => SettingKey::$variant, )*
                }
            }

            pub(crate) fn serialize_value<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $( Setting::$variant(value) => value.serialize(serializer), )*
                }
            }

            pub(crate) fn next_value<'de, A: MapAccess<'de>>(
                key: SettingKey,
                map: &mut A,
            ) -> Result<Setting, A::Error> {
                match key {
                    $( SettingKey::$variant => map.next_value::<$ty>().map(Setting::$variant), )*
                }
            }
        }
    };
}

settings! {
    FigureSize(FigureSize) => "figure_size",
    /// Output resolution in dots per inch.
    Dpi(u32) => "dpi",
    /// Color cycle assigned to series positionally.
    Palette(Vec<Color>) => "palette",
    /// Line dash cycle, paired with the palette.
    LineStyles(Vec<LineStyle>) => "line_styles",
    Markers(Vec<Marker>) => "markers",
    /// Whether consecutive points are joined by lines.
    DrawLines(bool) => "draw_lines",
    /// A generic family (`serif`, `sans-serif`, `monospace`) or a concrete font name.
    FontFamily(String) => "font_family",
    FontSize(f64) => "font_size",
    TitleSize(f64) => "title_size",
    LabelSize(f64) => "label_size",
    TickLabelSize(f64) => "tick_label_size",
    LegendFontSize(f64) => "legend_font_size",
    LineWidth(f64) => "line_width",
    AxisLineWidth(f64) => "axis_line_width",
    Frame(FrameStyle) => "frame",
    Grid(bool) => "grid",
    GridLineStyle(LineStyle) => "grid_line_style",
    GridAlpha(f64) => "grid_alpha",
    GridLineWidth(f64) => "grid_line_width",
    MinorTicks(bool) => "minor_ticks",
    TickDirection(TickDirection) => "tick_direction",
    ShowTitle(bool) => "show_title",
    LegendFrame(bool) => "legend_frame",
    /// Route text through TeX. Typesetting itself happens in the renderer.
    UseTex(bool) => "use_tex",
}
