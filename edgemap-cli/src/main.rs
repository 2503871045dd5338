use clap::Parser;
use edgemap::io::{load_gray_channel, load_rgb_channels, save_mask_png};
use edgemap::{detect_edges, EdgeDetectParams};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Edgemap CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ColorModeConfig {
    Gray,
    Rgb,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ParamsJson {
    sigma: f32,
    low_threshold: f32,
    high_threshold: f32,
    parallel: bool,
}

impl Default for ParamsJson {
    fn default() -> Self {
        let params = EdgeDetectParams::default();
        Self {
            sigma: params.sigma,
            low_threshold: params.low_threshold,
            high_threshold: params.high_threshold,
            parallel: params.parallel,
        }
    }
}

impl From<ParamsJson> for EdgeDetectParams {
    fn from(value: ParamsJson) -> Self {
        Self {
            sigma: value.sigma,
            low_threshold: value.low_threshold,
            high_threshold: value.high_threshold,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    image_path: String,
    output_path: String,
    color_mode: ColorModeConfig,
    params: ParamsJson,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            output_path: String::from("edges.png"),
            color_mode: ColorModeConfig::Gray,
            params: ParamsJson::default(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("edgemap=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.image_path.is_empty() {
        return Err("image_path must be set in the config".into());
    }

    let channels = match config.color_mode {
        ColorModeConfig::Gray => vec![load_gray_channel(&config.image_path)?],
        ColorModeConfig::Rgb => load_rgb_channels(&config.image_path)?,
    };

    let mask = detect_edges(&channels, config.params.into())?;
    save_mask_png(&mask, &config.output_path)?;

    let edge_pixels = mask.data().iter().filter(|&&v| v != 0).count();
    println!(
        "{} ({}x{}): {} edge pixels -> {}",
        config.image_path,
        mask.width(),
        mask.height(),
        edge_pixels,
        config.output_path
    );
    Ok(())
}
