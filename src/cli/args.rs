use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "measurement-generator")]
#[command(about = "Generate a weather station measurements file for billion row benchmarks")]
#[command(version)]
#[command(after_help = "You can use underscore notation for large numbers of records.\n\
    For example:  1_000_000_000 for one billion\n\
    Seed: must be a positive integer value, for example: 69420")]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Positive number of records to create
    #[arg(required = true, value_parser = parse_row_count)]
    pub rows: Option<u64>,

    /// Seed for the random generator
    #[arg(required = true, value_parser = parse_seed)]
    pub seed: Option<u64>,

    #[arg(long, help = "Weather station reference file [default: ./weather_stations.csv]")]
    pub stations: Option<PathBuf>,

    #[arg(short, long, help = "Output file [default: ./measurements.txt]")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Rows generated per write batch [default: 50000]")]
    pub batch_size: Option<usize>,

    #[arg(long, help = "Output buffer size in bytes [default: 131072]")]
    pub buffer_size: Option<usize>,

    #[arg(short, long, help = "Settings file (toml, json, yaml, ...)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Hide the progress bar")]
    pub quiet: bool,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print min/mean/max per station for an existing measurements file
    Process {
        /// Measurements file to aggregate
        file: PathBuf,
    },
}

/// Parse a row count, allowing `_` as a visual separator
pub fn parse_row_count(value: &str) -> Result<u64, String> {
    let rows: u64 = value
        .replace('_', "")
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer number of records", value))?;

    if rows == 0 {
        return Err("number of records must be positive".to_string());
    }

    Ok(rows)
}

pub fn parse_seed(value: &str) -> Result<u64, String> {
    match value.parse::<u64>() {
        Ok(seed) if seed > 0 => Ok(seed),
        _ => Err("Seed must be a positive integer value.".to_string()),
    }
}
