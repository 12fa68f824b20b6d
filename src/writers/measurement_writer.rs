use crate::error::{GeneratorError, Result};
use crate::models::{Measurement, StationList};
use crate::processors::{SamplePool, SizeEstimate};
use crate::utils::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_BUFFER_SIZE, MAX_BUFFER_SIZE, SAMPLE_POOL_SIZE,
};
use crate::utils::format::{format_bytes, format_elapsed};
use crate::utils::progress::ProgressObserver;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Streams generated measurement rows to a destination in fixed-size batches.
pub struct MeasurementWriter {
    batch_size: usize,
    buffer_size: usize,
    pool_size: usize,
}

/// Outcome of a completed file build.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub path: PathBuf,
    pub rows: u64,
    pub file_size: u64,
    pub elapsed: Duration,
}

impl BuildSummary {
    pub fn summary(&self) -> String {
        format!(
            "Test data successfully written to {}\n\
            Actual file size:  {}\n\
            Elapsed time: {}",
            self.path.display(),
            format_bytes(self.file_size as f64),
            format_elapsed(self.elapsed)
        )
    }
}

impl MeasurementWriter {
    pub fn new() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            buffer_size: DEFAULT_BUFFER_SIZE,
            pool_size: SAMPLE_POOL_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(GeneratorError::InvalidArgument(
                "batch size must be positive".into(),
            ));
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Result<Self> {
        if buffer_size == 0 || buffer_size > MAX_BUFFER_SIZE {
            return Err(GeneratorError::InvalidArgument(format!(
                "buffer size must be between 1 and {} bytes",
                MAX_BUFFER_SIZE
            )));
        }
        self.buffer_size = buffer_size;
        Ok(self)
    }

    /// Create `path` and fill it with `rows` measurements generated from `seed`
    pub fn build_file(
        &self,
        stations: &StationList,
        rows: u64,
        path: &Path,
        estimate: &SizeEstimate,
        seed: u64,
        progress: &mut dyn ProgressObserver,
    ) -> Result<BuildSummary> {
        let start = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let file = File::create(path).map_err(|e| GeneratorError::file_access("create", path, e))?;
        let mut writer = BufWriter::with_capacity(self.buffer_size, file);

        self.write_measurements(
            &mut writer,
            stations,
            rows,
            estimate.line_capacity(),
            &mut rng,
            progress,
        )
        .map_err(|e| match e {
            GeneratorError::Io(source) => GeneratorError::file_access("write to", path, source),
            other => other,
        })?;

        writer
            .flush()
            .map_err(|e| GeneratorError::file_access("flush", path, e))?;
        drop(writer);

        let file_size = std::fs::metadata(path)
            .map_err(|e| GeneratorError::file_access("get file info for", path, e))?
            .len();
        let elapsed = start.elapsed();

        info!(
            "Wrote {} rows ({} bytes) to {} in {:?}",
            rows,
            file_size,
            path.display(),
            elapsed
        );

        Ok(BuildSummary {
            path: path.to_path_buf(),
            rows,
            file_size,
            elapsed,
        })
    }

    /// Generate `rows` measurements into `out`, one buffered batch per write call.
    ///
    /// The sample pool is drawn first, then every row takes one pool index and one
    /// uniform temperature draw from `rng`, so the output depends only on the
    /// station list and the generator state.
    pub fn write_measurements<W, R>(
        &self,
        out: &mut W,
        stations: &StationList,
        rows: u64,
        line_capacity: usize,
        rng: &mut R,
        progress: &mut dyn ProgressObserver,
    ) -> Result<u64>
    where
        W: Write + ?Sized,
        R: Rng + ?Sized,
    {
        let pool = SamplePool::build(stations, self.pool_size, rng)?;

        let batch_rows = self.batch_size as u64;
        let chunks = rows / batch_rows;
        let remainder = (rows % batch_rows) as usize;

        debug!(
            "Generating {} full batches of {} rows plus {} remaining rows",
            chunks, self.batch_size, remainder
        );

        let mut batch = Self::batch_buffer(rows.min(batch_rows) as usize, line_capacity)?;
        let mut written = 0u64;
        let mut percent = 0u64;

        for chunk in 0..chunks {
            Self::fill_batch(&mut batch, &pool, self.batch_size, rng)?;
            out.write_all(batch.as_bytes())?;
            written += batch_rows;

            let new_percent = (chunk + 1) * 100 / chunks;
            if new_percent != percent {
                percent = new_percent;
                progress.on_progress(percent);
            }
        }

        if remainder > 0 {
            Self::fill_batch(&mut batch, &pool, remainder, rng)?;
            out.write_all(batch.as_bytes())?;
            written += remainder as u64;
        }

        progress.on_finish();

        Ok(written)
    }

    /// Pre-sized text buffer for one batch; an impossible size is an argument error
    fn batch_buffer(rows: usize, line_capacity: usize) -> Result<String> {
        let capacity = rows.saturating_mul(line_capacity);
        let mut batch = String::new();

        batch.try_reserve(capacity).map_err(|e| {
            GeneratorError::InvalidArgument(format!(
                "cannot allocate a {} byte batch buffer: {}",
                capacity, e
            ))
        })?;

        Ok(batch)
    }

    fn fill_batch<R: Rng + ?Sized>(
        batch: &mut String,
        pool: &SamplePool<'_>,
        rows: usize,
        rng: &mut R,
    ) -> Result<()> {
        batch.clear();

        for _ in 0..rows {
            let station = pool.draw(rng);
            let temperature = Measurement::temperature_from_unit(rng.gen::<f64>());
            writeln!(batch, "{}", Measurement::new(station, temperature))?;
        }

        Ok(())
    }
}

impl Default for MeasurementWriter {
    fn default() -> Self {
        Self::new()
    }
}
