/// File names
pub const STATIONS_FILE: &str = "./weather_stations.csv";
pub const MEASUREMENTS_FILE: &str = "./measurements.txt";

/// Temperature range of generated readings, upper bound exclusive
pub const COLDEST_TEMP: f64 = -99.9;
pub const HOTTEST_TEMP: f64 = 99.9;

/// Average length of a formatted temperature such as `-12.3`
pub const AVG_TEMP_BYTES: f64 = 4.400200100050025;

/// Separator plus newline
pub const LINE_OVERHEAD_BYTES: f64 = 2.0;

/// Number of stations drawn into the sample pool
pub const SAMPLE_POOL_SIZE: usize = 10_000;

/// Processing defaults
pub const DEFAULT_BATCH_SIZE: usize = 50_000;
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const MAX_BUFFER_SIZE: usize = 1 << 30; // 1GB

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "MEASUREMENTS";
