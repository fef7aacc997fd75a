use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const TOOLTIP_DATE_PATTERN: &str = "%Y-%m-%d";
pub const MONTH_TICK_PATTERN: &str = "%b %Y";

#[must_use]
pub fn format_tooltip_date(date: NaiveDate) -> String {
    date.format(TOOLTIP_DATE_PATTERN).to_string()
}

#[must_use]
pub fn format_month_tick(date: NaiveDate) -> String {
    date.format(MONTH_TICK_PATTERN).to_string()
}

/// Formats an integer with `,` thousands separators: `1234567` -> `1,234,567`.
#[must_use]
pub fn format_grouped_integer(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[must_use]
pub fn format_population_label(value: u64) -> String {
    format!("Pop: {}", format_grouped_integer(value))
}

/// Axis tick label with grouped integer part; fractional ticks keep up to
/// six decimals with trailing zeros removed.
#[must_use]
pub fn format_axis_number(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let formatted = format!("{:.6}", value.abs());
    let (integer, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() && integer.bytes().all(|digit| digit == b'0') {
        return "0".to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let grouped = group_digits(integer);
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Percentage label shown exactly as the decimal was given: `79.68` -> `79.68%`.
#[must_use]
pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

#[must_use]
pub fn format_percentage_tick(value: f64) -> String {
    format!("{}%", format_axis_number(value))
}
