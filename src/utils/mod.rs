pub mod constants;
pub mod format;
pub mod progress;

pub use constants::*;
pub use format::{format_bytes, format_elapsed};
pub use progress::{NoProgress, ProgressObserver, ProgressReporter};
