pub mod measurement;
pub mod station;

pub use measurement::Measurement;
pub use station::StationList;
