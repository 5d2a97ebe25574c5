//! Formatting utilities used for CLI and export outputs.

/// Group the integer part in thousands: 1234567 → "1,234,567".
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Locale-style amount: thousands separators, decimals only when present.
///
/// `2500.0` → `2,500`, `1234.5` → `1,234.5`
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let text = format!("{}", rounded);

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };

    match frac_part {
        Some(f) => format!("{sign}{}.{f}", group_thousands(&int_part)),
        None => format!("{sign}{}", group_thousands(&int_part)),
    }
}

pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{currency}{}", format_amount(amount))
}
