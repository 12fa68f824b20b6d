pub mod aggregator;
pub mod size_estimator;
pub mod station_sampler;

pub use aggregator::{MeasurementAggregator, StationStats};
pub use size_estimator::{estimate_file_size, SizeEstimate};
pub use station_sampler::SamplePool;
