//! Number formatting utilities for tables and stat cards

/// Format a number with a thousands separator (thin space) and the given
/// number of decimal places.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let mut parts = formatted.split('.');
    let integer_part = parts.next().unwrap_or(&formatted);
    let decimal_part = parts.next();

    // Insert a space every 3 digits from the end of the integer part
    let mut reversed = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            reversed.push(' ');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

/// Money value: 2 decimals, thousands separator
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Integer value with thousands separator
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(-1234.0), "-1 234");
    }
}
