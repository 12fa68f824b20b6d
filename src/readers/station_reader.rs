use crate::error::{GeneratorError, Result};
use crate::models::StationList;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

const COMMENT_MARKER: char = '#';
const FIELD_SEPARATOR: char = ';';

#[derive(Debug, Default)]
pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the deduplicated station names from a `weather_stations.csv` style file
    pub fn read_station_names(&self, path: &Path) -> Result<StationList> {
        let file =
            File::open(path).map_err(|e| GeneratorError::file_access("open", path, e))?;
        let stations = self.read_from(BufReader::new(file), path)?;

        info!(
            "Loaded {} unique station names from {}",
            stations.len(),
            path.display()
        );

        Ok(stations)
    }

    /// Scan station lines from any buffered source; `path` is only used for error context
    pub fn read_from<R: BufRead>(&self, reader: R, path: &Path) -> Result<StationList> {
        let mut names = BTreeSet::new();
        let mut skipped = 0usize;

        for line_result in reader.lines() {
            let line = line_result.map_err(|e| GeneratorError::file_access("read", path, e))?;

            match Self::parse_station_line(&line) {
                Some(name) => {
                    names.insert(name.to_string());
                }
                None => skipped += 1,
            }
        }

        debug!("Skipped {} comment or blank lines", skipped);

        if names.is_empty() {
            return Err(GeneratorError::NoStations {
                path: path.to_path_buf(),
            });
        }

        Ok(StationList::from(names))
    }

    /// Extract the station name from a single line, `None` for comments and blanks
    fn parse_station_line(line: &str) -> Option<&str> {
        if line.contains(COMMENT_MARKER) || line.is_empty() {
            return None;
        }

        line.split(FIELD_SEPARATOR).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_station_line() {
        assert_eq!(StationReader::parse_station_line("Riga;56.95;24.10"), Some("Riga"));
        assert_eq!(StationReader::parse_station_line("Cesis"), Some("Cesis"));
        assert_eq!(StationReader::parse_station_line("# header"), None);
        assert_eq!(StationReader::parse_station_line("Port#1;3"), None);
        assert_eq!(StationReader::parse_station_line(""), None);
    }

    #[test]
    fn test_dedups_and_skips_comments() -> Result<()> {
        let input = Cursor::new("A;1\n#comment\nA;2\nB;3\n\n");
        let stations = StationReader::new().read_from(input, Path::new("inline"))?;

        assert_eq!(stations.names(), &["A", "B"]);
        Ok(())
    }

    #[test]
    fn test_read_stations_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "# Adapted from https://simplemaps.com/data/world-cities")?;
        writeln!(temp_file, "# Licensed under Creative Commons Attribution 4.0")?;
        writeln!(temp_file, "Tokyo;35.6897")?;
        writeln!(temp_file, "Jakarta;-6.1750")?;
        writeln!(temp_file)?;
        writeln!(temp_file, "Tokyo;35.6897")?;

        let stations = StationReader::new().read_station_names(temp_file.path())?;

        assert_eq!(stations.len(), 2);
        assert_eq!(stations.names(), &["Jakarta", "Tokyo"]);
        Ok(())
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let input = Cursor::new("# only comments\n\n");
        let result = StationReader::new().read_from(input, Path::new("empty.csv"));

        assert!(matches!(result, Err(GeneratorError::NoStations { .. })));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let result = StationReader::new().read_station_names(Path::new("does/not/exist.csv"));

        match result {
            Err(GeneratorError::FileAccess { action, path, .. }) => {
                assert_eq!(action, "open");
                assert_eq!(path, Path::new("does/not/exist.csv"));
            }
            other => panic!("expected FileAccess error, got {:?}", other),
        }
    }
}
