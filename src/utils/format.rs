use std::time::Duration;

const BYTE_UNITS: [&str; 4] = ["bytes", "KiB", "MiB", "GiB"];

/// Render a byte count with 1024-based units and one decimal place.
///
/// Anything past the GiB range is still reported in GiB.
pub fn format_bytes(bytes: f64) -> String {
    let mut value = bytes;

    for unit in BYTE_UNITS {
        if value < 1024.0 {
            return format!("{:3.1} {}", value, unit);
        }
        value /= 1024.0;
    }

    format!("{:3.1} {}", value * 1024.0, BYTE_UNITS[BYTE_UNITS.len() - 1])
}

/// Render a wall-clock duration for the final summary.
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();

    if seconds < 60.0 {
        return format!("{:.3} seconds", seconds);
    }

    let whole = elapsed.as_secs();
    if seconds < 3600.0 {
        return format!("{} minutes {} seconds", whole / 60, whole % 60);
    }

    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let remaining = whole % 60;

    if minutes == 0 {
        format!("{} hours {} seconds", hours, remaining)
    } else {
        format!("{} hours {} minutes {} seconds", hours, minutes, remaining)
    }
}
