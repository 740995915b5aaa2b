use std::io::{self, Write};

use anyhow::{Context, Result};

use gcode_model::config::Config;
use gcode_model::{ParseOutput, parse_file};

fn main() -> Result<()> {
    // Parse configuration from command line and settings file
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    for path in &config.config_paths {
        log::debug!("using settings from {}", path.display());
    }

    let options = config.to_options()?;
    let output = parse_file(&config.input, options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.json {
        serde_json::to_writer_pretty(&mut out, &output).context("cannot write JSON")?;
        writeln!(out)?;
    } else {
        write_summary(&mut out, &output, config.layers)?;
    }

    Ok(())
}

fn write_summary(out: &mut impl Write, output: &ParseOutput, with_layers: bool) -> Result<()> {
    let model = &output.model;
    writeln!(out, "{}", model)?;

    if with_layers {
        for layer in &model.layers {
            write!(out, "  {}", layer)?;
            match &layer.bbox {
                Some(bbox) => writeln!(out, " bbox={}", bbox)?,
                None => writeln!(out)?,
            }
        }
    }

    let warnings = output.diagnostics.len();
    if warnings > 0 {
        writeln!(out, "{} warning(s)", warnings)?;
    }

    Ok(())
}
