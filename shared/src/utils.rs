// Formatting helpers shared between the engine's log output and any front
// end that renders the dashboard.

/// Formats a monetary/quantity value with comma thousand separators,
/// e.g. `format_amount(1234567.5, 2)` -> `"1,234,567.50"`.
pub fn format_amount(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_small() {
        assert_eq!(format_amount(123.456, 2), "123.46");
    }

    #[test]
    fn test_format_amount_thousands() {
        assert_eq!(format_amount(1_234_567.5, 2), "1,234,567.50");
    }

    #[test]
    fn test_format_amount_no_decimals() {
        assert_eq!(format_amount(1000.0, 0), "1,000");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234.5, 2), "-1,234.50");
    }
}
