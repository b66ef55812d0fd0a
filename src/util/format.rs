//! Amount parsing and display.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Ticker shown next to every amount.
pub const CURRENCY: &str = "SLW";

/// Render an amount with up to four decimals and no trailing zeros.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{amount:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

pub fn format_slw(amount: f64) -> String {
    format!("{} {CURRENCY}", format_amount(amount))
}

/// Parse a user-typed amount; only finite values above zero are accepted.
pub fn parse_positive_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Shorten a long address to `head…tail` for compact lists.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 14 {
        return address.to_owned();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
