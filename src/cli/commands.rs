use crate::cli::args::{Cli, Commands};
use crate::error::{GeneratorError, Result};
use crate::models::StationList;
use crate::processors::{estimate_file_size, MeasurementAggregator, SizeEstimate};
use crate::readers::StationReader;
use crate::settings::{ConfigOverrides, GeneratorConfig};
use crate::utils::progress::{ProgressObserver, ProgressReporter};
use crate::writers::{BuildSummary, MeasurementWriter};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, Level};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    if let Some(Commands::Process { file }) = cli.command {
        return aggregate_measurements(&file);
    }

    let (Some(rows), Some(seed)) = (cli.rows, cli.seed) else {
        return Err(GeneratorError::InvalidArgument(
            "number of records and seed are required".to_string(),
        ));
    };

    let overrides = ConfigOverrides {
        stations_path: cli.stations,
        output_path: cli.output,
        batch_size: cli.batch_size,
        buffer_size: cli.buffer_size,
    };
    let settings = GeneratorConfig::load(cli.config.as_deref(), overrides)?;
    info!("Resolved settings: {:?}", settings);

    println!("Number of rows to create: {}", rows);
    println!("Using batch size of: {}", settings.batch_size);
    println!("Using buffer size of: {}", settings.buffer_size);
    println!("Using seed: {}", seed);

    let (stations, estimate) = load_and_estimate(&settings, rows)?;
    println!("{}", estimate.summary());

    let writer = configured_writer(&settings)?;
    let mut progress = ProgressReporter::new_percent("Building test data...", cli.quiet);
    let summary = writer.build_file(
        &stations,
        rows,
        &settings.output_path,
        &estimate,
        seed,
        &mut progress,
    )?;
    progress.finish();

    println!("{}", summary.summary());
    println!("Test data build complete.");

    Ok(())
}

/// Load stations, estimate the output size and write the measurements file.
pub fn generate_measurements(
    settings: &GeneratorConfig,
    rows: u64,
    seed: u64,
    progress: &mut dyn ProgressObserver,
) -> Result<BuildSummary> {
    let (stations, estimate) = load_and_estimate(settings, rows)?;
    info!("{}", estimate.summary());

    configured_writer(settings)?.build_file(
        &stations,
        rows,
        &settings.output_path,
        &estimate,
        seed,
        progress,
    )
}

/// Print `name=min/mean/max` for every station in a measurements file
fn aggregate_measurements(path: &Path) -> Result<()> {
    let aggregator = MeasurementAggregator::process_file(path)?;

    for line in aggregator.report_lines() {
        println!("{}", line);
    }

    Ok(())
}

fn load_and_estimate(settings: &GeneratorConfig, rows: u64) -> Result<(StationList, SizeEstimate)> {
    let stations = StationReader::new().read_station_names(&settings.stations_path)?;
    let estimate = estimate_file_size(&stations, rows)?;

    Ok((stations, estimate))
}

fn configured_writer(settings: &GeneratorConfig) -> Result<MeasurementWriter> {
    MeasurementWriter::new()
        .with_batch_size(settings.batch_size)?
        .with_buffer_size(settings.buffer_size)
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| GeneratorError::file_access("open log file", path, e))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if let Err(e) = installed {
        debug!("Keeping the existing tracing subscriber: {}", e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_logging_twice_is_not_an_error() -> Result<()> {
        init_logging(false, None)?;
        init_logging(true, None)?;
        Ok(())
    }

    #[test]
    fn test_init_logging_creates_log_file() -> Result<()> {
        let dir = TempDir::new()?;
        let log_path = dir.path().join("generator.log");

        init_logging(true, Some(&log_path))?;

        assert!(log_path.exists());
        Ok(())
    }

    #[test]
    fn test_init_logging_unopenable_file() {
        let result = init_logging(false, Some(Path::new("no/such/dir/generator.log")));

        assert!(matches!(
            result,
            Err(GeneratorError::FileAccess {
                action: "open log file",
                ..
            })
        ));
    }

    #[test]
    fn test_run_process_missing_file() {
        let cli = Cli {
            command: Some(Commands::Process {
                file: "no/such/measurements.txt".into(),
            }),
            rows: None,
            seed: None,
            stations: None,
            output: None,
            batch_size: None,
            buffer_size: None,
            config: None,
            quiet: true,
            verbose: false,
            log_file: None,
        };

        assert!(matches!(run(cli), Err(GeneratorError::FileAccess { .. })));
    }
}
