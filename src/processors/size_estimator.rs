use crate::error::{GeneratorError, Result};
use crate::models::StationList;
use crate::utils::constants::{AVG_TEMP_BYTES, LINE_OVERHEAD_BYTES};
use crate::utils::format::format_bytes;
use tracing::debug;

/// Advisory estimate of the output size for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeEstimate {
    pub avg_line_length: f64,
    pub total_bytes: f64,
}

impl SizeEstimate {
    /// Average line length rounded up, used to pre-size batch buffers
    pub fn line_capacity(&self) -> usize {
        self.avg_line_length.ceil() as usize
    }

    pub fn human_size(&self) -> String {
        format_bytes(self.total_bytes)
    }

    pub fn summary(&self) -> String {
        format!("Estimated max file size is:  {}.", self.human_size())
    }
}

pub fn estimate_file_size(stations: &StationList, rows: u64) -> Result<SizeEstimate> {
    let avg_name_bytes = stations.average_name_len().ok_or_else(|| {
        GeneratorError::InvalidArgument("cannot estimate size of an empty station list".into())
    })?;

    let avg_line_length = avg_name_bytes + AVG_TEMP_BYTES + LINE_OVERHEAD_BYTES;
    let total_bytes = rows as f64 * avg_line_length;

    debug!(
        "Average name length {:.3} bytes, average line length {:.3} bytes",
        avg_name_bytes, avg_line_length
    );

    Ok(SizeEstimate {
        avg_line_length,
        total_bytes,
    })
}
