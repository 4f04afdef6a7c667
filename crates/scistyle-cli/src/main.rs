use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};

use scistyle::StyleRegistry;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn run(cli: Cli) -> Result<String> {
    let registry = load_registry(&cli)?;
    match cli.command {
        Command::Categories => Ok(commands::categories()),
        Command::List { category } => Ok(commands::list(&registry, category)),
        Command::Show { name, format } => commands::show(&registry, &name, format),
        Command::Palette { count, plain } => commands::palette(count, !plain),
    }
}

fn load_registry(cli: &Cli) -> Result<StyleRegistry> {
    let mut registry = scistyle::registry().clone();
    for path in &cli.stylesheets {
        let count = registry.load_stylesheet_file(path)?;
        info!("loaded {} styles from {}", count, path.display());
    }
    Ok(registry)
}
