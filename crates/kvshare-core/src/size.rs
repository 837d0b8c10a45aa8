//! Human-readable byte counts.

const UNITS: [&str; 3] = ["bytes", "KB", "MB"];

/// Format a byte count with base-1024 units.
///
/// The unit index is `floor(log(bytes) / log(1024))`, clamped to `MB`, and
/// the scaled value is rounded to the nearest integer. Zero is special-cased
/// because `log(0)` is undefined.
///
/// The index is computed with integer division so exact powers of 1024 never
/// land one unit low through floating-point error.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", UNITS[0]);
    }
    let mut i = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && i < UNITS.len() - 1 {
        scaled /= 1024;
        i += 1;
    }
    let value = (bytes as f64 / 1024f64.powi(i as i32)).round();
    format!("{} {}", value as u64, UNITS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes_uses_the_byte_label() {
        assert_eq!(format_size(0), "0 bytes");
    }

    #[test]
    fn picks_unit_by_magnitude() {
        assert_eq!(format_size(5), "5 bytes");
        assert_eq!(format_size(1023), "1023 bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "2 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(25 * 1024 * 1024), "25 MB");
    }

    #[test]
    fn values_past_megabytes_stay_in_megabytes() {
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3072 MB");
    }
}
