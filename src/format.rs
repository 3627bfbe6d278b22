//! Currency display.
//!
//! Amounts are rendered with the symbol of the unit label they were handed, never
//! converted: the same number formats as `$30.00` under `USD` and `৳30.00` under `BDT`.

/// Formats `amount` with two decimals and thousands separators.
///
/// Known ISO codes get their symbol; any other label is printed as a prefix
/// (`KRW 1,200.00`).
pub fn format_currency(amount: f64, unit: &str) -> String {
    let cents = if amount.is_finite() {
        (amount.abs() * 100.0).round() as u64
    } else {
        0
    };
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let number = format!("{}.{:02}", group_thousands(cents / 100), cents % 100);

    match currency_symbol(unit) {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{} {number}", unit.trim()),
    }
}

fn currency_symbol(unit: &str) -> Option<&'static str> {
    match unit.trim().to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "BDT" => Some("৳"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "INR" => Some("₹"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_amount_different_labels() {
        assert_eq!(format_currency(30.0, "USD"), "$30.00");
        assert_eq!(format_currency(30.0, "BDT"), "৳30.00");
    }

    #[test]
    fn test_grouping_and_rounding() {
        assert_eq!(format_currency(1234567.891, "USD"), "$1,234,567.89");
        assert_eq!(format_currency(999.999, "USD"), "$1,000.00");
        assert_eq!(format_currency(0.0, "BDT"), "৳0.00");
        assert_eq!(format_currency(100.0, "usd"), "$100.00");
    }

    #[test]
    fn test_negative_and_unknown_units() {
        assert_eq!(format_currency(-5.5, "EUR"), "-€5.50");
        assert_eq!(format_currency(1200.0, "KRW"), "KRW 1,200.00");
        assert_eq!(format_currency(-0.001, "USD"), "$0.00");
    }
}
