//! Value formatting for printed offers.

use chrono::NaiveDate;
use std::borrow::Cow;

/// Formats an amount with two decimals and a literal euro prefix.
///
/// ```
/// use offerpdf_layout::text::format_currency;
/// assert_eq!(format_currency(1234.5), "€ 1234.50");
/// ```
pub fn format_currency(value: f64) -> String {
    // Avoid printing "-0.00" for tiny negative rounding residue.
    let value = if value.abs() < 0.005 { 0.0 } else { value };
    format!("€ {:.2}", value)
}

/// Day/month/year ordering, as the Italian locale prints dates.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Quantities print without decimals when whole, otherwise with up to two.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        let s = format!("{:.2}", quantity);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Replaces control characters, which the text operator cannot show, with spaces.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_control) {
        Cow::Owned(
            text.chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

/// Cuts `text` to at most `max_chars` characters. No ellipsis is added.
pub fn truncate_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => Cow::Owned(text[..byte_idx].to_string()),
        None => Cow::Borrowed(text),
    }
}
