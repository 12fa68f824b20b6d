use crate::error::{GeneratorError, Result};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Running min/sum/max for one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationStats {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: u64,
}

impl StationStats {
    fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value,
            count: 1,
        }
    }

    pub fn update(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
    }

    /// Mean rounded to one decimal, halves towards positive infinity
    pub fn mean(&self) -> f64 {
        let mean = self.sum / self.count as f64;
        (mean * 10.0 + 0.5).floor() / 10.0
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // + 0.0 turns -0.0 into 0.0
        write!(
            f,
            "{:.1}/{:.1}/{:.1}",
            self.min + 0.0,
            self.mean() + 0.0,
            self.max + 0.0
        )
    }
}

/// Split a `station;temperature` line, tolerating padding around either field.
///
/// Returns `None` for blank lines, a missing field or an unparsable temperature.
pub fn parse_measurement(line: &str) -> Option<(&str, f64)> {
    let (station, temp) = line.trim().split_once(';')?;
    let station = station.trim();
    let temp = temp.trim();

    if station.is_empty() || temp.is_empty() {
        return None;
    }

    let value: f64 = temp.parse().ok()?;
    value.is_finite().then_some((station, value))
}

/// Per-station statistics over a measurements file.
#[derive(Debug, Default)]
pub struct MeasurementAggregator {
    stations: HashMap<String, StationStats>,
    rows: u64,
    skipped: u64,
}

impl MeasurementAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: &str) {
        let Some((station, value)) = parse_measurement(line) else {
            self.skipped += 1;
            return;
        };

        self.rows += 1;
        match self.stations.get_mut(station) {
            Some(stats) => stats.update(value),
            None => {
                self.stations
                    .insert(station.to_string(), StationStats::new(value));
            }
        }
    }

    /// Stream lines from `reader`; `path` is only used for error context
    pub fn add_lines<R: BufRead>(&mut self, reader: R, path: &Path) -> Result<()> {
        for line_result in reader.lines() {
            let line = line_result.map_err(|e| GeneratorError::file_access("read", path, e))?;
            self.add_line(&line);
        }

        Ok(())
    }

    pub fn process_file(path: &Path) -> Result<Self> {
        let file =
            File::open(path).map_err(|e| GeneratorError::file_access("open", path, e))?;

        let mut aggregator = Self::new();
        aggregator.add_lines(BufReader::new(file), path)?;

        info!(
            "Aggregated {} rows over {} stations from {}",
            aggregator.rows,
            aggregator.stations.len(),
            path.display()
        );
        debug!("Skipped {} malformed or blank lines", aggregator.skipped);

        Ok(aggregator)
    }

    pub fn get(&self, station: &str) -> Option<&StationStats> {
        self.stations.get(station)
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Stations in byte-wise name order
    pub fn sorted(&self) -> Vec<(&str, &StationStats)> {
        let mut sorted: Vec<(&str, &StationStats)> = self
            .stations
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
            .collect();
        sorted.sort_unstable_by_key(|(name, _)| *name);
        sorted
    }

    /// One `name=min/mean/max` line per station, sorted by name
    pub fn report_lines(&self) -> Vec<String> {
        self.sorted()
            .into_iter()
            .map(|(name, stats)| format!("{}={}", name, stats))
            .collect()
    }
}
