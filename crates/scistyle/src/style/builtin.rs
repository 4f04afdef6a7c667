//! Builtin style presets.
//!
//! [`populate`] registers every preset in dependency order: the base style,
//! then the color, journal, misc and language groups, and finally the
//! combinations that merge them with the base.

use crate::color::Color;
use crate::palette::{self, REFERENCE_LEN};
use crate::theme::{FigureSize, FrameStyle, LineStyle, Marker, Setting, Theme, TickDirection};

use super::category::Category;
use super::registry::StyleRegistry;

/// Name of the base style every combination starts from.
pub const BASE_STYLE: &str = "science";

/// Color schemes that get a `science+<scheme>` combination.
pub const COMBINED_COLOR_SCHEMES: &[&str] = &[
    "bright",
    "vibrant",
    "muted",
    "light",
    "high-contrast",
    "retro",
    "high-vis",
];

/// Non-color styles that get a `science+<style>` combination.
pub const COMBINED_STYLES: &[&str] = &["ieee", "nature", "grid"];

const fn hex(value: u32) -> Color {
    Color::from_u32(value)
}

const SCIENCE_PALETTE: [Color; 7] = [
    hex(0x0C5DA5),
    hex(0x00B945),
    hex(0xFF9500),
    hex(0xFF2C00),
    hex(0x845B97),
    hex(0x474747),
    hex(0x9E9E9E),
];

pub(crate) fn populate(registry: &mut StyleRegistry) {
    register_base(registry);
    register_colors(registry);
    register_journals(registry);
    register_misc(registry);
    register_languages(registry);
    register_combinations(registry);
}

fn register_base(registry: &mut StyleRegistry) {
    let theme = Theme::new()
        .with(Setting::FigureSize(FigureSize::new(3.5, 2.625)))
        .with(Setting::Palette(SCIENCE_PALETTE.to_vec()))
        .with(Setting::FontFamily("serif".into()))
        .with(Setting::FontSize(8.0))
        .with(Setting::LabelSize(8.0))
        .with(Setting::TickLabelSize(7.0))
        .with(Setting::LegendFontSize(7.0))
        .with(Setting::LineWidth(1.0))
        .with(Setting::AxisLineWidth(0.5))
        .with(Setting::Frame(FrameStyle::Box))
        .with(Setting::Grid(false))
        .with(Setting::MinorTicks(true))
        .with(Setting::TickDirection(TickDirection::In))
        .with(Setting::ShowTitle(false))
        .with(Setting::LegendFrame(false))
        .with(Setting::UseTex(true));
    registry.register(
        BASE_STYLE,
        Category::Science,
        "Base style for scientific figures",
        theme,
    );
}

fn palette_style(colors: &[Color]) -> Theme {
    Theme::new().with(Setting::Palette(colors.to_vec()))
}

fn register_colors(registry: &mut StyleRegistry) {
    let schemes: [(&str, &str, &[Color]); 6] = [
        (
            "bright",
            "Bright qualitative scheme, color-blind safe",
            &[
                hex(0x4477AA),
                hex(0xEE6677),
                hex(0x228833),
                hex(0xCCBB44),
                hex(0x66CCEE),
                hex(0xAA3377),
                hex(0xBBBBBB),
            ],
        ),
        (
            "vibrant",
            "Vibrant qualitative scheme, color-blind safe",
            &[
                hex(0xEE7733),
                hex(0x0077BB),
                hex(0x33BBEE),
                hex(0xEE3377),
                hex(0xCC3311),
                hex(0x009988),
                hex(0xBBBBBB),
            ],
        ),
        (
            "muted",
            "Muted qualitative scheme with many colors",
            &[
                hex(0xCC6677),
                hex(0x332288),
                hex(0xDDCC77),
                hex(0x117733),
                hex(0x88CCEE),
                hex(0x882255),
                hex(0x44AA99),
                hex(0x999933),
                hex(0xAA4499),
                hex(0xDDDDDD),
            ],
        ),
        (
            "light",
            "Light qualitative scheme for filled areas",
            &[
                hex(0x77AADD),
                hex(0xEE8866),
                hex(0xEEDD88),
                hex(0xFFAABB),
                hex(0x99DDFF),
                hex(0x44BB99),
                hex(0xBBCC33),
                hex(0xAAAA00),
                hex(0xDDDDDD),
            ],
        ),
        (
            "high-contrast",
            "Three colors that survive grayscale printing",
            &[hex(0x004488), hex(0xDDAA33), hex(0xBB5566)],
        ),
        (
            "retro",
            "Muted retro scheme",
            &[
                hex(0x4165C0),
                hex(0xE770A2),
                hex(0x5AC3BE),
                hex(0x696969),
                hex(0xF79A1E),
                hex(0xBA7DCD),
            ],
        ),
    ];
    for (name, description, colors) in schemes {
        registry.register(name, Category::Color, description, palette_style(colors));
    }

    let high_vis = palette_style(&[
        hex(0x0D49FB),
        hex(0xE6091C),
        hex(0x26EB47),
        hex(0x8936DF),
        hex(0xFEC32D),
        hex(0x25D7FD),
    ])
    .with(Setting::LineStyles(vec![
        LineStyle::Solid,
        LineStyle::Dashed,
        LineStyle::DashDot,
        LineStyle::Dotted,
        LineStyle::Solid,
        LineStyle::Dashed,
    ]));
    registry.register(
        "high-vis",
        Category::Color,
        "High-visibility colors paired with distinct line styles",
        high_vis,
    );

    let scatter = palette_style(&SCIENCE_PALETTE)
        .with(Setting::Markers(vec![
            Marker::Circle,
            Marker::Square,
            Marker::TriangleUp,
            Marker::TriangleDown,
            Marker::TriangleLeft,
            Marker::TriangleRight,
            Marker::Diamond,
        ]))
        .with(Setting::DrawLines(false));
    registry.register(
        "scatter",
        Category::Color,
        "Marker cycle without connecting lines",
        scatter,
    );

    for n in 1..=REFERENCE_LEN {
        registry.register(
            format!("discrete-rainbow-{n}"),
            Category::Color,
            format!("Discrete rainbow with {n} colors"),
            palette_style(&palette::select(n)),
        );
    }
}

fn register_journals(registry: &mut StyleRegistry) {
    let ieee = Theme::new()
        .with(Setting::FigureSize(FigureSize::new(3.3, 2.5)))
        .with(Setting::Dpi(600))
        .with(Setting::Palette(vec![
            Color::BLACK,
            hex(0xFF0000),
            hex(0x0000FF),
            hex(0x008000),
        ]));
    registry.register("ieee", Category::Journals, "IEEE single-column figures", ieee);

    let nature = Theme::new()
        .with(Setting::FigureSize(FigureSize::new(3.3, 2.5)))
        .with(Setting::FontFamily("sans-serif".into()))
        .with(Setting::FontSize(7.0))
        .with(Setting::TitleSize(7.0))
        .with(Setting::LabelSize(7.0))
        .with(Setting::TickLabelSize(7.0))
        .with(Setting::LegendFontSize(7.0))
        .with(Setting::UseTex(false));
    registry.register("nature", Category::Journals, "Nature single-column figures", nature);
}

fn register_misc(registry: &mut StyleRegistry) {
    let grid = Theme::new()
        .with(Setting::Grid(true))
        .with(Setting::GridLineStyle(LineStyle::Dashed))
        .with(Setting::GridAlpha(0.5))
        .with(Setting::GridLineWidth(0.5))
        .with(Setting::LegendFrame(true));
    registry.register("grid", Category::Misc, "Dashed background grid", grid);

    let notebook = Theme::new()
        .with(Setting::FigureSize(FigureSize::new(8.0, 6.0)))
        .with(Setting::FontFamily("sans-serif".into()))
        .with(Setting::FontSize(16.0))
        .with(Setting::TitleSize(16.0))
        .with(Setting::LabelSize(16.0))
        .with(Setting::TickLabelSize(14.0))
        .with(Setting::LegendFontSize(14.0))
        .with(Setting::LineWidth(2.0))
        .with(Setting::AxisLineWidth(1.0))
        .with(Setting::UseTex(false));
    registry.register("notebook", Category::Misc, "Large figures for notebooks", notebook);

    let no_latex = Theme::new()
        .with(Setting::UseTex(false))
        .with(Setting::FontFamily("serif".into()));
    registry.register("no-latex", Category::Misc, "Serif text without TeX", no_latex);

    let sans = Theme::new()
        .with(Setting::UseTex(false))
        .with(Setting::FontFamily("sans-serif".into()));
    registry.register("sans", Category::Misc, "Sans-serif text without TeX", sans);
}

fn font_style(family: &str) -> Theme {
    Theme::new()
        .with(Setting::FontFamily(family.to_string()))
        .with(Setting::UseTex(false))
}

fn register_languages(registry: &mut StyleRegistry) {
    let styles = [
        ("cjk-tc-font", "Traditional Chinese text", "Noto Serif CJK TC"),
        ("cjk-sc-font", "Simplified Chinese text", "Noto Serif CJK SC"),
        ("cjk-jp-font", "Japanese text", "Noto Serif CJK JP"),
        ("cjk-kr-font", "Korean text", "Noto Serif CJK KR"),
        ("russian-font", "Russian text", "serif"),
        ("turkish-font", "Turkish text", "serif"),
    ];
    for (name, description, family) in styles {
        registry.register(name, Category::Languages, description, font_style(family));
    }
}

fn register_combinations(registry: &mut StyleRegistry) {
    for part in COMBINED_STYLES.iter().chain(COMBINED_COLOR_SCHEMES) {
        let name = format!("{BASE_STYLE}+{part}");
        // Parts were all registered above.
        let combined = registry.combine(name, &[BASE_STYLE, *part]);
        debug_assert!(combined.is_ok(), "builtin combination failed: {combined:?}");
    }
}
