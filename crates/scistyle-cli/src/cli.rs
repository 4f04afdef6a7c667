//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use scistyle::Category;

#[derive(Debug, Parser)]
#[command(name = "scistyle", version, about = "Browse scientific plot style presets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Extra stylesheet to load before running the command (repeatable)
    #[arg(long = "stylesheet", value_name = "PATH", global = true)]
    pub stylesheets: Vec<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG also applies
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the base style categories
    Categories,

    /// List style names, sorted
    List {
        /// Only show styles in this category
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Print a style's category, description and settings
    Show {
        /// Style name, e.g. `science+ieee`
        name: String,

        #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },

    /// Print a discrete rainbow palette
    Palette {
        /// Number of colors
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Print hex values only, without color swatches
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_category() {
        let cli = Cli::try_parse_from(["scistyle", "list", "--category", "journals"]).unwrap();
        match cli.command {
            Command::List { category } => assert_eq!(category, Some(Category::Journals)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["scistyle", "list", "-c", "fancy"]).is_err());
    }

    #[test]
    fn test_parse_show_defaults_to_yaml() {
        let cli = Cli::try_parse_from(["scistyle", "show", "science+ieee"]).unwrap();
        match cli.command {
            Command::Show { name, format } => {
                assert_eq!(name, "science+ieee");
                assert_eq!(format, Format::Yaml);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_palette_accepts_negative_count() {
        let cli = Cli::try_parse_from(["scistyle", "palette", "-1", "--plain"]).unwrap();
        match cli.command {
            Command::Palette { count, plain } => {
                assert_eq!(count, -1);
                assert!(plain);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "scistyle",
            "categories",
            "--stylesheet",
            "a.yaml",
            "--stylesheet",
            "b.yaml",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.stylesheets.len(), 2);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
