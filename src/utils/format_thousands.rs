/// Formats an integer with comma thousands separators.
///
/// ### Example:
/// ```rust
/// use submarket_sniffer::utils::format_thousands;
///
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// assert_eq!(format_thousands(-1500), "-1,500");
/// assert_eq!(format_thousands(999), "999");
/// ```
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
