use chrono::{DateTime, NaiveDate};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats a monetary value with the currency glyph and two decimals.
///
/// Halves round away from zero, so `7.125` shows as `7.13`.
pub fn currency(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{CURRENCY_SYMBOL}{rounded:.2}")
}

/// Renders an ISO date or timestamp as `DD/MM/YYYY`.
///
/// Accepts RFC 3339 timestamps (what the backend stores) and bare
/// `YYYY-MM-DD` dates. Anything else is returned verbatim so a malformed row
/// still shows what the server sent.
pub fn due_date(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match parsed {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Share of `value` in `total` as a whole percentage.
pub fn whole_percent(value: f64, total: f64) -> u32 {
    if total <= 0.0 || value <= 0.0 {
        return 0;
    }
    // Bounded to 0..=100 by the guard above.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (value / total * 100.0).round() as u32;
    percent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_two_decimals() {
        assert_eq!(currency(5.5), "₹5.50");
        assert_eq!(currency(6.0), "₹6.00");
        assert_eq!(currency(1234.567), "₹1234.57");
    }

    #[test]
    fn test_currency_rounds_halves_up() {
        assert_eq!(currency(0.125), "₹0.13");
        assert_eq!(currency(7.125), "₹7.13");
        assert_eq!(currency(2.375), "₹2.38");
        assert_eq!(currency(0.0), "₹0.00");
    }

    #[test]
    fn test_due_date_formats() {
        assert_eq!(due_date("2025-03-14"), "14/03/2025");
        assert_eq!(due_date("2025-03-14T00:00:00.000Z"), "14/03/2025");
        assert_eq!(due_date("next tuesday"), "next tuesday");
    }

    #[test]
    fn test_whole_percent() {
        assert_eq!(whole_percent(3.0, 4.0), 75);
        assert_eq!(whole_percent(1.0, 3.0), 33);
        assert_eq!(whole_percent(2.0, 3.0), 67);
        assert_eq!(whole_percent(1.0, 0.0), 0);
    }
}
