//! Prices are stored as whole cents (`BIGINT`) and only turned into dollars
//! at the edges: parsing form input and rendering templates.

use crate::shared::error::SharedError;

/// Render cents as `$D.CC`
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a dollar amount typed into a form (`"12"`, `"12.5"`, `"$12.50"`)
///
/// Rejects negative amounts, more than two decimals and anything that is
/// not a plain decimal number.
pub fn parse_price(input: &str) -> Result<i64, SharedError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);

    if trimmed.starts_with('-') {
        return Err(SharedError::validation("price", "Price cannot be negative"));
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return Err(SharedError::validation("price", "Price must be a number like 12.50"));
    }
    if fraction.len() > 2 {
        return Err(SharedError::validation("price", "Price can have at most two decimals"));
    }

    let too_large = || SharedError::validation("price", "Price is too large");
    let dollars: i64 = whole.parse().map_err(|_| too_large())?;
    let cents = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| too_large())? * 10,
        _ => fraction.parse::<i64>().map_err(|_| too_large())?,
    };

    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(too_large)
}
