//! Shared formatting helpers for table cells and summary panels.
//!
//! All functions here are pure text formatting; styling lives in `view`.

use crate::table::Align;

/// Placeholder for a missing table value.
pub const MISSING_CELL: &str = "-";
/// Placeholder for an undefined panel average.
pub const MISSING_AVERAGE: &str = "--";

/// Pads or truncates `s` to exactly `width` characters.
pub fn fit(s: &str, width: usize, align: Align) -> String {
    let clipped: String = s.chars().take(width).collect();
    match align {
        Align::Left => format!("{:<width$}", clipped, width = width),
        Align::Right => format!("{:>width$}", clipped, width = width),
    }
}

/// Formats an optional number with fixed precision, right-aligned in `width`.
/// `None` renders as [`MISSING_CELL`].
pub fn format_opt_fixed(v: Option<f64>, width: usize, precision: usize) -> String {
    match v {
        Some(v) => format!("{:>width$.prec$}", v, width = width, prec = precision),
        None => format!("{:>width$}", MISSING_CELL, width = width),
    }
}

/// Formats an age in whole seconds, right-aligned in `width`.
pub fn format_age_secs(secs: i64, width: usize) -> String {
    format!("{:>width$}", secs, width = width)
}

/// `"21.4°C"`, or `"--"` when undefined.
pub fn format_celsius(v: Option<f64>) -> String {
    v.map(|t| format!("{:.1}°C", t))
        .unwrap_or_else(|| MISSING_AVERAGE.to_string())
}

/// `"48%"`, or `"--"` when undefined.
pub fn format_percent(v: Option<f64>) -> String {
    v.map(|h| format!("{:.0}%", h))
        .unwrap_or_else(|| MISSING_AVERAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5, Align::Left), "abc  ");
        assert_eq!(fit("abc", 5, Align::Right), "  abc");
        assert_eq!(fit("abcdefgh", 4, Align::Left), "abcd");
        assert_eq!(fit("", 2, Align::Left), "  ");
        assert_eq!(fit("abc", 0, Align::Left), "");
    }

    #[test]
    fn test_fit_counts_chars_not_bytes() {
        assert_eq!(fit("Küche", 3, Align::Left), "Küc");
        assert_eq!(fit("Küche", 6, Align::Left), "Küche ");
    }

    #[test]
    fn test_format_opt_fixed() {
        assert_eq!(format_opt_fixed(Some(22.5), 10, 1), "      22.5");
        assert_eq!(format_opt_fixed(Some(60.0), 7, 0), "     60");
        assert_eq!(format_opt_fixed(Some(-3.04), 6, 1), "  -3.0");
        assert_eq!(format_opt_fixed(None, 7, 0), "      -");
    }

    #[test]
    fn test_format_age_secs() {
        assert_eq!(format_age_secs(100, 8), "     100");
        assert_eq!(format_age_secs(0, 3), "  0");
    }

    #[test]
    fn test_panel_values() {
        assert_eq!(format_celsius(Some(22.5)), "22.5°C");
        assert_eq!(format_celsius(None), "--");
        assert_eq!(format_percent(Some(60.0)), "60%");
        assert_eq!(format_percent(None), "--");
    }
}
