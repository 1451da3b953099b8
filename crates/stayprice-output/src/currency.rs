//! Rupee formatting.

/// Format an amount as whole rupees with comma thousands separators.
///
/// The sign follows the currency symbol: `-1234.4` becomes `₹-1,234`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("₹{amount}");
    }

    let rounded = format!("{amount:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some("0") => ("", "0"),
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("₹{sign}{grouped}")
}
