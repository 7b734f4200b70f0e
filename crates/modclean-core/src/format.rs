//! Human-readable byte counts.

const UNIT: u64 = 1024;
const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Format a byte count using 1024-based units and one fractional digit.
///
/// Counts below 1024 are printed as whole bytes (`"512 B"`); larger counts
/// use the largest unit whose whole-number magnitude stays below 1024
/// (`"1.5 KB"`, `"3.2 GB"`).
pub fn format_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT && exp < PREFIXES.len() - 1 {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_units() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.0 GB");
        assert_eq!(format_size(1 << 40), "1.0 TB");
        assert_eq!(format_size(1 << 50), "1.0 PB");
        assert_eq!(format_size(1 << 60), "1.0 EB");
        assert_eq!(format_size(u64::MAX), "16.0 EB");
    }

    #[test]
    fn test_tier_boundary_rounds_up_within_unit() {
        // One byte short of a mebibyte still formats in KB.
        assert_eq!(format_size(1024 * 1024 - 1), "1024.0 KB");
    }

    #[test]
    fn test_monotonic_within_tier() {
        let mut previous = 0.0;
        for bytes in (1024..1024 * 1024).step_by(4099) {
            let formatted = format_size(bytes);
            assert!(formatted.ends_with(" KB"), "{formatted}");
            let value: f64 = formatted.trim_end_matches(" KB").parse().unwrap();
            assert!(value >= previous);
            previous = value;
        }
    }
}
