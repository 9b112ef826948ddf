/// Up to three fractional digits are shown, trailing zeros trimmed.
const FRACTION_SCALE: f64 = 1000.0;

/// Placeholder shown for missing fields.
pub const PLACEHOLDER: &str = "—";

fn format_with_commas(digits: &str) -> String {
    let digits = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Groups thousands: `1234567.891` -> `1,234,567.891`.
///
/// The whole and fractional parts are rounded separately, so amounts past
/// the exact range of `f64` never grow fraction digits.
pub fn format_amount(amount: f64) -> String {
    let magnitude = amount.abs();
    let mut whole = magnitude.trunc();
    let mut fraction = ((magnitude - whole) * FRACTION_SCALE).round() as u16;
    if fraction >= 1000 {
        whole += 1.0;
        fraction = 0;
    }

    let grouped = format_with_commas(&format!("{whole:.0}"));
    let sign = if amount < 0.0 && (whole > 0.0 || fraction > 0) {
        "-"
    } else {
        ""
    };

    if fraction == 0 {
        format!("{sign}{grouped}")
    } else {
        let fraction = format!("{fraction:03}");
        format!("{sign}{grouped}.{}", fraction.trim_end_matches('0'))
    }
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    let formatted = format_amount(amount.abs());
    if amount < 0.0 && formatted != "0" {
        format!("-{symbol}{formatted}")
    } else {
        format!("{symbol}{formatted}")
    }
}

/// The text shown for an optional field.
pub fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}
