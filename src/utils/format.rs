use rust_decimal::Decimal;

use crate::models::PriceSummary;

/// Digit-grouped amount for display, e.g. 1250000 -> "1,250,000".
/// Amounts are whole currency units; any fraction is already rounded away
/// by the price calculator.
pub fn format_amount(amount: Decimal) -> String {
    let raw = amount.trunc().to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Single-ticket price label; an unannounced price renders as "TBD".
pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(amount) if amount.is_zero() => "Free".to_string(),
        Some(amount) => format_amount(amount),
        None => "TBD".to_string(),
    }
}

/// List-view label for a conference price summary. Currency symbol and
/// locale decoration stay with the caller.
pub fn format_summary(summary: &PriceSummary) -> String {
    match (summary.min_price, summary.max_price) {
        (Some(min), Some(max)) if min == max => format_price(Some(min)),
        (Some(min), Some(max)) => format!("{} - {}", format_amount(min), format_amount(max)),
        _ => "Free".to_string(),
    }
}
