//! Input/output formatting helpers for the numeric fields.

/// Formats a latitude with the 3-decimal precision the dataset is stored in.
pub fn format_latitude(value: f64) -> String {
    format!("{:.3}", value)
}

/// Strips leading zeros from a numeric input's raw text ("007" -> "7").
/// Text whose second character is "." is left alone so "0.5" keeps its zero.
pub fn strip_leading_zeros(text: &str) -> String {
    let mut chars = text.chars();
    let first = chars.next();
    let second = chars.next();
    if first == Some('0') && second.is_some() && second != Some('.') {
        text.trim_start_matches('0').to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_latitude() {
        assert_eq!(format_latitude(40.416), "40.416");
        assert_eq!(format_latitude(28.1), "28.100");
        assert_eq!(format_latitude(-34.603), "-34.603");
        assert_eq!(format_latitude(0.0), "0.000");
    }

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(strip_leading_zeros("007"), "7");
        assert_eq!(strip_leading_zeros("010"), "10");
        assert_eq!(strip_leading_zeros("0.5"), "0.5");
        assert_eq!(strip_leading_zeros("00.5"), ".5");
        assert_eq!(strip_leading_zeros("0"), "0");
        assert_eq!(strip_leading_zeros("-05"), "-05");
        assert_eq!(strip_leading_zeros(""), "");
        // Degenerate all-zero input collapses, same as the regex it replaces
        assert_eq!(strip_leading_zeros("000"), "");
    }
}
