//! Configuration management for the model builder.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML settings file (project-local or user-global)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::interpreter::{DEFAULT_SEGMENT_LENGTH, Options, ShortArcPolicy};

/// Settings file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".gcode-model.toml";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "gcode-model")]
#[command(about = "Reconstruct a layered toolpath model from 3D-printer G-code")]
#[command(version)]
pub struct Args {
    /// G-code program to analyze
    pub input: PathBuf,

    /// Print the whole model as JSON
    #[arg(long)]
    pub json: bool,

    /// Print one summary line per layer
    #[arg(long)]
    pub layers: bool,

    /// Settings file to use instead of the default lookup
    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    /// Chord length for arc subdivision
    #[arg(long, help = "Arc subdivision chord length in mm (default 0.5)")]
    pub arc_segment_length: Option<f64>,

    /// What to do with arcs shorter than one chord
    #[arg(long, value_enum)]
    pub short_arcs: Option<ShortArcPolicy>,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Contents of a settings file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub arc_segment_length: Option<f64>,
    pub short_arcs: Option<ShortArcPolicy>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read settings file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    /// Fill the keys this file leaves unset from `fallback`.
    pub fn or(self, fallback: FileConfig) -> Self {
        Self {
            arc_segment_length: self.arc_segment_length.or(fallback.arc_segment_length),
            short_arcs: self.short_arcs.or(fallback.short_arcs),
            log_level: self.log_level.or(fallback.log_level),
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub json: bool,
    pub layers: bool,
    pub arc_segment_length: f64,
    pub short_arcs: ShortArcPolicy,
    pub log_level: String,
    /// Settings files that were read, highest precedence first
    pub config_paths: Vec<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments, using the default lookup
    pub fn from_args(args: Args) -> Result<Self> {
        Self::from_args_with_search(args, &default_search_paths())
    }

    /// Create configuration from the settings files in `search` order,
    /// earlier files winning key by key. An explicit `--config` file
    /// replaces the search.
    pub fn from_args_with_search(args: Args, search: &[PathBuf]) -> Result<Self> {
        let config_paths: Vec<PathBuf> = match &args.config {
            Some(path) => vec![path.clone()],
            None => search.iter().filter(|p| p.is_file()).cloned().collect(),
        };

        let mut file = FileConfig::default();
        for path in &config_paths {
            file = file.or(FileConfig::load(path)?);
        }

        Ok(Config {
            input: args.input,
            json: args.json,
            layers: args.layers,
            arc_segment_length: args
                .arc_segment_length
                .or(file.arc_segment_length)
                .unwrap_or(DEFAULT_SEGMENT_LENGTH),
            short_arcs: args.short_arcs.or(file.short_arcs).unwrap_or_default(),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| "info".to_string()),
            config_paths,
        })
    }

    pub fn has_config_file(&self) -> bool {
        !self.config_paths.is_empty()
    }

    /// Interpreter options, validated
    pub fn to_options(&self) -> Result<Options> {
        Options::new(self.arc_segment_length, self.short_arcs)
            .context("invalid --arc-segment-length or arc_segment_length setting")
    }
}

/// Project file first, then the user config directory
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("gcode-model").join("config.toml"));
    }

    paths
}
