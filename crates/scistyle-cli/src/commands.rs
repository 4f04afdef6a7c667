//! Command implementations. Each returns the text to print.

use anyhow::{Context, Result};
use console::Style;
use scistyle::{rainbow_colors, Category, StyleRegistry};

use crate::cli::Format;

pub fn categories() -> String {
    StyleRegistry::list_categories()
        .iter()
        .map(|c| format!("{c}\n"))
        .collect()
}

pub fn list(registry: &StyleRegistry, category: Option<Category>) -> String {
    registry
        .list_styles(category)
        .into_iter()
        .map(|name| format!("{name}\n"))
        .collect()
}

pub fn show(registry: &StyleRegistry, name: &str, format: Format) -> Result<String> {
    let entry = registry.get(name)?;
    let text = match format {
        Format::Yaml => serde_yaml::to_string(entry).context("failed to encode style as YAML")?,
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(entry).context("failed to encode style as JSON")?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}

pub fn palette(count: i64, swatches: bool) -> Result<String> {
    let colors = rainbow_colors(count)?;
    let mut out = String::new();
    for color in colors {
        if swatches {
            let swatch = Style::new().on_color256(color.to_ansi256());
            out.push_str(&format!("{}  {color}\n", swatch.apply_to("    ")));
        } else {
            out.push_str(&format!("{color}\n"));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_output() {
        assert_eq!(categories(), "science\njournals\ncolor\nlanguages\nmisc\n");
    }

    #[test]
    fn test_list_journals() {
        let registry = StyleRegistry::builtin();
        assert_eq!(list(&registry, Some(Category::Journals)), "ieee\nnature\n");
    }

    #[test]
    fn test_show_json_contains_settings() {
        let registry = StyleRegistry::builtin();
        let text = show(&registry, "ieee", Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["category"], "journals");
        assert_eq!(value["theme"]["dpi"], 600);
        assert_eq!(value["theme"]["palette"][0], "#000000");
    }

    #[test]
    fn test_show_yaml_names_category() {
        let registry = StyleRegistry::builtin();
        let text = show(&registry, "science+grid", Format::Yaml).unwrap();
        assert!(text.contains("category: combinations"));
        assert!(text.contains("grid_line_style: dashed"));
    }

    #[test]
    fn test_show_unknown_lists_known_styles() {
        let registry = StyleRegistry::builtin();
        let err = show(&registry, "scince", Format::Yaml).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("scince"));
        assert!(msg.contains("science"));
    }

    #[test]
    fn test_palette_plain() {
        assert_eq!(palette(2, false).unwrap(), "#1965B0\n#DC050C\n");
    }

    #[test]
    fn test_palette_with_swatches_keeps_hex() {
        let out = palette(3, true).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("#F7F056"));
    }

    #[test]
    fn test_palette_invalid_count() {
        let err = palette(0, false).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }
}
