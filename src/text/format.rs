//! Stock number formatters for counting labels

use num_format::{Locale, ToFormattedString};

/// Whole-number rendering, truncating toward zero like an integer cast
pub fn integer(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

/// Fixed number of decimal places
pub fn fixed(precision: usize) -> impl Fn(f64) -> String {
    move |value| format!("{:.*}", precision, value)
}

/// Whole number with `,` between groups of three digits
pub fn grouped(value: f64) -> String {
    (value.trunc() as i64).to_formatted_string(&Locale::en)
}

/// Wrap a formatter so its output is followed by `suffix`
pub fn with_suffix<F>(formatter: F, suffix: impl Into<String>) -> impl Fn(f64) -> String
where
    F: Fn(f64) -> String,
{
    let suffix = suffix.into();
    move |value| format!("{}{}", formatter(value), suffix)
}
