extern crate log;
pub mod filter;
pub mod geofile;
pub mod selection;
use crate::filter::filter_attributes;
use anyhow::anyhow;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::{fs::read_to_string, path::Path};

const DEFAULT_INPUT_FILEPATH: &str = "files/input/barnehager.geojson";
const DEFAULT_OUTPUT_FILEPATH: &str = "files/output/barnehager.geojson";

/// Keep a chosen subset of the properties of a GeoJSON file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input GeoJSON file.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to write the filtered GeoJSON file to.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to an optional YAML config file with input and output paths.
    #[arg(short, long)]
    config_filepath: Option<String>,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
struct Config {
    input_filepath: Option<PathBuf>,
    output_filepath: Option<PathBuf>,
}

fn read_config(config_filepath: &str) -> anyhow::Result<Config> {
    if !Path::new(config_filepath).exists() {
        return Err(anyhow!("Config file {} not found", config_filepath));
    }
    let config_contents = read_to_string(config_filepath)?;
    let config: Config = serde_yaml::from_str(&config_contents)?;
    Ok(config)
}

/// Command line flags win over the config file, which wins over the defaults.
fn resolve_filepaths(args: Args, config: Config) -> (PathBuf, PathBuf) {
    let input_filepath = args
        .input
        .or(config.input_filepath)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILEPATH));
    let output_filepath = args
        .output
        .or(config.output_filepath)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILEPATH));
    (input_filepath, output_filepath)
}

fn try_main() -> anyhow::Result<()> {
    // Help and version requests exit 0, usage errors exit with clap's own status.
    let args = Args::try_parse().unwrap_or_else(|e| e.exit());
    let config = match &args.config_filepath {
        Some(config_filepath) => read_config(config_filepath)?,
        None => Config::default(),
    };
    let (input_filepath, output_filepath) = resolve_filepaths(args, config);
    log::debug!(
        "Filtering {:?} into {:?}",
        &input_filepath,
        &output_filepath
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Some(summary) = filter_attributes(
        &input_filepath,
        &output_filepath,
        &mut stdin.lock(),
        &mut stdout.lock(),
    ) {
        log::info!(
            "Wrote {} features with {} properties to {:?}",
            summary.num_features,
            summary.selected_properties.len(),
            summary.output_filepath
        );
    }
    Ok(())
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
