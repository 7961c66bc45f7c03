use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};
use setlist_normalizer_config::{Config, OutputFormat, ParseDefaults};
use setlist_normalizer_engine::{ParseOptions, parse_setlist};
use std::{
    fs,
    io::{self, Read},
    path::Path,
    process,
};

mod cli;
mod render;

use cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    if cli.init_config {
        return init_config(&config_path);
    }

    let config = match Config::load_from_path(&config_path)? {
        Some(config) => config,
        None => {
            if cli.config.is_some() {
                warn!(
                    "Config file '{}' not found, using defaults",
                    config_path.display()
                );
            }
            Config::default()
        }
    };

    // defaults < config file < flags
    let options: ParseOptions = config.parse_options().merge(cli.parse_options()).into();
    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output);
    info!("Parse options: {options:?}, output: {format:?}");

    let text = read_input(cli.input.as_deref())?;
    let result = parse_setlist(&text, options);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).context("Failed to encode result")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            for line in render::render_text(&result, cli.show_skipped) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            info!("Reading setlist from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read setlist file '{}'", path.display()))
        }
        _ => {
            info!("Reading setlist from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read setlist from stdin")?;
            Ok(text)
        }
    }
}

fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("Config file '{}' already exists", config_path.display());
    }

    let defaults = ParseOptions::default();
    let config = Config {
        output: OutputFormat::Text,
        parse: ParseDefaults {
            exclude_non_songs: Some(defaults.exclude_non_songs),
            keep_encore_markers: Some(defaults.keep_encore_markers),
            ignore_case: Some(defaults.ignore_case),
        },
    };
    config
        .save_to_path(config_path)
        .with_context(|| format!("Failed to write config file '{}'", config_path.display()))?;

    println!("Wrote {}", config_path.display());
    Ok(())
}
