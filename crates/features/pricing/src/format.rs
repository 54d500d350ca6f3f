/// Renders a price with two decimals and thousands separators, symbol first.
///
/// Negative values keep the symbol in front of the sign (`₹-12.50`), the way
/// the price has always been shown. Non-finite values are passed through.
#[must_use]
pub fn format_price(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{symbol}{value}");
    }

    let fixed = format!("{value:.2}");
    let (sign, digits) = fixed.strip_prefix('-').map_or(("", fixed.as_str()), |rest| ("-", rest));
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{symbol}{sign}{grouped}.{fraction}")
}
