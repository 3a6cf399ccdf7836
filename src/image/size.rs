//! Human readable byte sizes (1024-based).

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count with the largest fitting unit.
///
/// - `None`: up to two decimals, trailing zeros trimmed (`1536` → `"1.5 KB"`)
/// - `Some(d)`: exactly `d` decimals (`1536, Some(2)` → `"1.50 KB"`)
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64, decimals: Option<usize>) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let number = match decimals {
        Some(d) => format!("{value:.d$}"),
        None => trim_fraction(format!("{value:.2}")),
    };
    format!("{number} {}", UNITS[unit])
}

/// `"1.50"` → `"1.5"`, `"2.00"` → `"2"`.
fn trim_fraction(number: String) -> String {
    if !number.contains('.') {
        return number;
    }
    number.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default_decimals() {
        assert_eq!(format_file_size(0, None), "0 Bytes");
        assert_eq!(format_file_size(512, None), "512 Bytes");
        assert_eq!(format_file_size(1024, None), "1 KB");
        assert_eq!(format_file_size(1536, None), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024, None), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024, None), "5 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024, None), "1 GB");
        assert_eq!(format_file_size(1_234_567, None), "1.18 MB");
    }

    #[test]
    fn test_format_fixed_decimals() {
        assert_eq!(format_file_size(1536, Some(0)), "2 KB");
        assert_eq!(format_file_size(1536, Some(2)), "1.50 KB");
        assert_eq!(format_file_size(1024, Some(1)), "1.0 KB");
        assert_eq!(format_file_size(0, Some(3)), "0 Bytes");
    }

    #[test]
    fn test_format_largest_unit() {
        let pb = 1024u64.pow(5);
        assert_eq!(format_file_size(pb, None), "1024 TB");
    }

    #[test]
    fn test_trim_fraction() {
        assert_eq!(trim_fraction("1.50".into()), "1.5");
        assert_eq!(trim_fraction("2.00".into()), "2");
        assert_eq!(trim_fraction("100".into()), "100");
    }
}
