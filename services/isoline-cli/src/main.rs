//! Isoline command-line tool.
//!
//! Reads a JSON grid, runs marching squares for each requested threshold and
//! writes the resulting segments as JSON.

mod config;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use config::Args;
use isoline::{generate_isolines, Isoline, ScalarField};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args);

    let options = args.contour_options()?;
    let field = read_field(&args.input)?;

    info!(
        input = %args.input.display(),
        columns = field.columns(),
        rows = field.rows(),
        "Loaded grid"
    );

    let isolines = generate_isolines(&field, &options)?;

    info!(
        levels = isolines.len(),
        segments = isolines.iter().map(|i| i.segments.len()).sum::<usize>(),
        "Extracted isolines"
    );

    write_output(&isolines, args.output.as_deref(), args.pretty)
}

fn init_tracing(args: &Args) {
    // Logs go to stderr so stdout carries only results
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr);

    if args.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_field(path: &Path) -> Result<ScalarField> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read grid from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid from {}", path.display()))?
    };

    parse_field(&content)
}

fn parse_field(content: &str) -> Result<ScalarField> {
    let rows: Vec<Vec<f64>> =
        serde_json::from_str(content).context("Grid must be a JSON array of number arrays")?;
    debug!(rows = rows.len(), "Parsed grid rows");
    Ok(ScalarField::from_rows(&rows)?)
}

fn write_output(isolines: &[Isoline], output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(isolines)?
    } else {
        serde_json::to_string(isolines)?
    };

    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write output to {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
