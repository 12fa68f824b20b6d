use std::fmt;

use crate::utils::constants::{COLDEST_TEMP, HOTTEST_TEMP};

/// A single generated `station;temperature` row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement<'a> {
    pub station: &'a str,
    pub temperature: f64,
}

impl<'a> Measurement<'a> {
    pub fn new(station: &'a str, temperature: f64) -> Self {
        Self {
            station,
            temperature,
        }
    }

    /// Map a uniform draw in `[0, 1)` onto the temperature range `[-99.9, 99.9)`.
    pub fn temperature_from_unit(unit: f64) -> f64 {
        unit * (HOTTEST_TEMP - COLDEST_TEMP) + COLDEST_TEMP
    }
}

impl fmt::Display for Measurement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{:.1}", self.station, self.temperature)
    }
}
