/// Rounds to the nearest value with the given number of decimal places.
///
/// The exact binary value is rounded, with exact ties going to the even digit,
/// so `0.125` becomes `0.12` while `0.135` (stored just above) becomes `0.14`.
///
/// ### Example:
/// ```rust
/// use submarket_sniffer::utils::round_to;
///
/// assert_eq!(round_to(0.125, 2), 0.12);
/// assert_eq!(round_to(0.375, 2), 0.38);
/// assert_eq!(round_to(100.0 / 3.0, 2), 33.33);
/// ```
pub fn round_to(value: f64, places: usize) -> f64 {
    // float formatting rounds the exact value, ties to even
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// Prints the shortest representation which round-trips, keeping at least one
/// decimal place (`15.0`, `12.34`).
///
/// ### Example:
/// ```rust
/// use submarket_sniffer::utils::format_decimal;
///
/// assert_eq!(format_decimal(15.0), "15.0");
/// assert_eq!(format_decimal(12.34), "12.34");
/// ```
pub fn format_decimal(value: f64) -> String {
    // `Debug` for floats is the shortest round-trip form and keeps a trailing `.0`
    format!("{:?}", value)
}
