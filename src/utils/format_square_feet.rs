use crate::utils::format_thousands;
use crate::Error;

/// Parses a numeric reference cell, accepting thousands separators and decimals.
///
/// Empty cells yield `None`. Decimals are truncated toward zero.
pub fn parse_reference_number(raw: &str, column: &str) -> Result<Option<i64>, Error> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();

    if cleaned.is_empty() {
        return Ok(None);
    }

    if let Ok(value) = cleaned.parse::<i64>() {
        return Ok(Some(value));
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value.trunc() as i64)),
        _ => Err(Error::InvalidNumber {
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Formats square footage accounting-style: `2,500 SF`, `(1,500) SF` for
/// negatives and `0 SF` for empty or zero cells.
///
/// ### Example:
/// ```rust
/// use submarket_sniffer::utils::format_signed_square_feet;
///
/// assert_eq!(format_signed_square_feet("-1500", "Net Absorption SF 12 Mo").unwrap(), "(1,500) SF");
/// assert_eq!(format_signed_square_feet("", "Net Absorption SF 12 Mo").unwrap(), "0 SF");
/// ```
pub fn format_signed_square_feet(raw: &str, column: &str) -> Result<String, Error> {
    let formatted = match parse_reference_number(raw, column)? {
        None | Some(0) => "0 SF".to_string(),
        Some(value) if value < 0 => format!(
            "({}) SF",
            format_thousands(value).trim_start_matches('-')
        ),
        Some(value) => format!("{} SF", format_thousands(value)),
    };

    Ok(formatted)
}
