//! Command-line configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use isoline::ContourOptions;

#[derive(Parser, Debug)]
#[command(name = "isoline")]
#[command(about = "Extract marching-squares isolines from a JSON grid")]
#[command(
    long_about = "Reads a rectangular JSON array of numbers (`[[row0...], [row1...], ...]`) \
                  and writes `[{\"level\": ..., \"segments\": [[[x1, y1], [x2, y2]], ...]}]`. \
                  Non-finite coordinates are written as null."
)]
pub struct Args {
    /// Grid file (JSON 2-D array); "-" reads stdin
    pub input: PathBuf,

    /// Threshold to contour (repeatable)
    #[arg(short, long = "level", allow_hyphen_values = true)]
    pub levels: Vec<f64>,

    /// Generate thresholds at this spacing
    #[arg(long)]
    pub interval: Option<f64>,

    /// Lower bound for generated thresholds
    #[arg(long, allow_hyphen_values = true)]
    pub min_value: Option<f64>,

    /// Upper bound for generated thresholds
    #[arg(long, allow_hyphen_values = true)]
    pub max_value: Option<f64>,

    /// World x of the first grid column
    #[arg(long, allow_hyphen_values = true)]
    pub lng_start: Option<f64>,

    /// World y of the first grid row
    #[arg(long, allow_hyphen_values = true)]
    pub lat_start: Option<f64>,

    /// Cell edge length in world units
    #[arg(long)]
    pub grid_size: Option<f64>,

    /// Process grid rows in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Options file (JSON); command-line flags override its values
    #[arg(long, env = "ISOLINE_OPTIONS")]
    pub options: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Log level
    #[arg(long, default_value = "warn", env = "ISOLINE_LOG_LEVEL")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Merge the options file (if any) with command-line overrides.
    pub fn contour_options(&self) -> Result<ContourOptions> {
        let mut options = match &self.options {
            Some(path) => ContourOptions::from_file(path)
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => ContourOptions::default(),
        };

        if !self.levels.is_empty() {
            options.levels = Some(self.levels.clone());
        }
        if self.interval.is_some() {
            options.interval = self.interval;
            // An explicit interval on the command line replaces file levels
            if self.levels.is_empty() {
                options.levels = None;
            }
        }
        if self.min_value.is_some() {
            options.min_value = self.min_value;
        }
        if self.max_value.is_some() {
            options.max_value = self.max_value;
        }
        if let Some(lng_start) = self.lng_start {
            options.lng_start = lng_start;
        }
        if let Some(lat_start) = self.lat_start {
            options.lat_start = lat_start;
        }
        if let Some(grid_size) = self.grid_size {
            options.grid_size = grid_size;
        }
        if self.parallel {
            options.parallel = true;
        }

        options.validate()?;
        Ok(options)
    }
}
