//!
//! The human-readable unit formatting.
//!

///
/// Formats a size in bytes with binary prefixes.
///
pub fn size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for prefix in ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"] {
        if value < 1024.0 {
            return format!("{value:.1}{prefix}B");
        }
        value /= 1024.0;
    }
    format!("{value:.1}YiB")
}

///
/// Formats a duration in seconds.
///
pub fn time(seconds: f64) -> String {
    if seconds < 1.0 {
        let mut value = seconds;
        for prefix in ["m", "μ", "n"] {
            value *= 1000.0;
            if value >= 1.0 || prefix == "n" {
                return format!("{value:.1}{prefix}s");
            }
        }
    }

    if seconds < 600.0 {
        format!("{seconds:.1}s")
    } else if seconds < 3600.0 {
        format!("{:.1}min", seconds / 60.0)
    } else {
        format!("{:.1}h", seconds / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn size() {
        assert_eq!(super::size(0), "0.0B");
        assert_eq!(super::size(1023), "1023.0B");
        assert_eq!(super::size(1024), "1.0KiB");
        assert_eq!(super::size(1536), "1.5KiB");
        assert_eq!(super::size(8454144), "8.1MiB");
        assert_eq!(super::size(3 * 1024 * 1024 * 1024), "3.0GiB");
    }

    #[test]
    fn time() {
        assert_eq!(super::time(0.0), "0.0ns");
        assert_eq!(super::time(0.0000025), "2.5μs");
        assert_eq!(super::time(0.5), "500.0ms");
        assert_eq!(super::time(1.0), "1.0s");
        assert_eq!(super::time(42.5), "42.5s");
        assert_eq!(super::time(900.0), "15.0min");
        assert_eq!(super::time(7200.0), "2.0h");
    }
}
