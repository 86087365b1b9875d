//! Money formatting for VND amounts.
//!
//! Prices are integer đồng throughout; the backend never sends fractional
//! amounts. Display format groups thousands with `.` and appends the
//! currency glyph: `100000` → `"100.000₫"`.

/// Label shown in place of a price when a listing has no minimum price.
pub const CONTACT_PRICE_LABEL: &str = "Liên hệ";

/// Formats an amount in đồng as a thousands-grouped string with the
/// trailing currency glyph, e.g. `100000` → `"100.000₫"`.
#[must_use]
pub fn format_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 + 4);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.push('₫');
    out
}

/// Renders a price range for display.
///
/// A missing minimum means "contact for price" and renders the literal
/// [`CONTACT_PRICE_LABEL`]. A missing maximum, or one equal to the minimum,
/// collapses to a single formatted price.
#[must_use]
pub fn price_range_label(min: Option<i64>, max: Option<i64>) -> String {
    match min {
        None => CONTACT_PRICE_LABEL.to_string(),
        Some(lo) => match max {
            Some(hi) if hi != lo => format!("{} - {}", format_money(lo), format_money(hi)),
            _ => format_money(lo),
        },
    }
}
