//! Locale-aware formatting primitives.
//!
//! Covers the variable kinds a dictionary template can carry: plain
//! numbers, integers, percentages, currency amounts, and timestamps.
//! Separator and pattern tables cover the major locale families; languages
//! outside the tables get a neutral fallback rather than an error.

use chrono::{DateTime, Utc};

use crate::locale::language_of;

/// Date rendering styles, from numeric-compact to fully spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `1/5/24`
    Short,
    /// `Jan 5, 2024`
    #[default]
    Medium,
    /// `January 5, 2024`
    Long,
    /// `Friday, January 5, 2024`
    Full,
}

/// Time rendering styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeStyle {
    /// `1:30 PM`
    #[default]
    Short,
    /// `1:30:45 PM`
    Medium,
}

/// Grouping and decimal separators for a language.
/// `None` grouping means digits are left ungrouped.
fn separators(lang: &str) -> (Option<char>, char) {
    match lang {
        "en" | "zh" | "ja" | "ko" | "he" | "th" => (Some(','), '.'),
        "de" | "es" | "it" | "pt" | "nl" | "tr" | "id" | "da" | "el" => (Some('.'), ','),
        "ru" | "uk" | "pl" | "cs" | "sv" | "fi" | "nb" => (Some('\u{a0}'), ','),
        "fr" => (Some('\u{a0}'), ','),
        _ => (None, '.'),
    }
}

fn group_digits(digits: &str, sep: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(ch);
    }
    grouped
}

fn format_decimal(value: f64, lang: &str, fraction_digits: Option<usize>) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let (group, decimal) = separators(lang);
    let rendered = match fraction_digits {
        Some(digits) => format!("{value:.digits$}"),
        None => value.to_string(),
    };
    let (sign, rendered) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered, None),
    };
    let int_part = match group {
        Some(sep) => group_digits(int_part, sep),
        None => int_part.to_string(),
    };
    let mut out = String::new();
    out.push_str(sign);
    out.push_str(&int_part);
    if let Some(frac) = frac_part {
        out.push(decimal);
        out.push_str(frac);
    }
    out
}

/// Format a number with the locale's grouping and decimal separators.
///
/// # Example
/// ```
/// use glossa::format::format_number;
///
/// assert_eq!(format_number(1234.56, "en"), "1,234.56");
/// assert_eq!(format_number(1234.56, "de"), "1.234,56");
/// assert_eq!(format_number(1234.56, "fr"), "1\u{a0}234,56");
/// ```
#[must_use]
pub fn format_number(value: f64, locale: &str) -> String {
    format_decimal(value, &language_of(locale), None)
}

/// Format a number with a fixed count of fraction digits.
#[must_use]
pub fn format_number_with(value: f64, locale: &str, fraction_digits: usize) -> String {
    format_decimal(value, &language_of(locale), Some(fraction_digits))
}

/// Format an integer with the locale's grouping separator.
#[must_use]
pub fn format_integer(value: i64, locale: &str) -> String {
    let (group, _) = separators(&language_of(locale));
    let rendered = value.unsigned_abs().to_string();
    let grouped = match group {
        Some(sep) => group_digits(&rendered, sep),
        None => rendered,
    };
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a ratio as a percentage (`0.75` renders as `75%`).
/// Rounds to whole percent.
#[must_use]
pub fn format_percent(value: f64, locale: &str) -> String {
    let lang = language_of(locale);
    let number = format_decimal(value * 100.0, &lang, Some(0));
    match lang.as_str() {
        "fr" | "de" | "es" | "it" | "ru" | "sv" | "fi" | "nb" | "cs" | "pl" => {
            format!("{number}\u{a0}%")
        }
        _ => format!("{number}%"),
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" | "CNY" => Some("¥"),
        "KRW" => Some("₩"),
        "INR" => Some("₹"),
        _ => None,
    }
}

fn currency_fraction_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

/// Format a currency amount with the locale's symbol placement.
///
/// Unknown currency codes render as `amount CODE`.
///
/// # Example
/// ```
/// use glossa::format::format_currency;
///
/// assert_eq!(format_currency(1234.5, "USD", "en"), "$1,234.50");
/// assert_eq!(format_currency(1234.5, "EUR", "de"), "1.234,50\u{a0}€");
/// assert_eq!(format_currency(500.0, "JPY", "ja"), "¥500");
/// ```
#[must_use]
pub fn format_currency(value: f64, code: &str, locale: &str) -> String {
    let lang = language_of(locale);
    let number = format_decimal(value, &lang, Some(currency_fraction_digits(code)));
    let Some(symbol) = currency_symbol(code) else {
        return format!("{number}\u{a0}{code}");
    };
    match lang.as_str() {
        "en" | "ja" | "ko" | "zh" | "he" | "th" => format!("{symbol}{number}"),
        "de" | "fr" | "es" | "it" | "pt" | "nl" | "ru" | "pl" | "sv" | "fi" | "tr" => {
            format!("{number}\u{a0}{symbol}")
        }
        _ => format!("{number}\u{a0}{code}"),
    }
}

/// Format a date per locale conventions.
#[must_use]
pub fn format_date(dt: &DateTime<Utc>, style: DateStyle, locale: &str) -> String {
    let pattern = match (language_of(locale).as_str(), style) {
        ("en", DateStyle::Short) => "%-m/%-d/%y",
        ("en", DateStyle::Medium) => "%b %-d, %Y",
        ("en", DateStyle::Long) => "%B %-d, %Y",
        ("en", DateStyle::Full) => "%A, %B %-d, %Y",

        ("de", DateStyle::Short) => "%d.%m.%y",
        ("de", DateStyle::Medium) => "%d. %b %Y",
        ("de", DateStyle::Long | DateStyle::Full) => "%d. %B %Y",

        ("fr" | "es" | "it" | "pt", DateStyle::Short) => "%d/%m/%y",
        ("fr" | "es" | "it" | "pt", DateStyle::Medium) => "%-d %b %Y",
        ("fr" | "es" | "it" | "pt", DateStyle::Long | DateStyle::Full) => "%-d %B %Y",

        ("ja", DateStyle::Short) => "%y/%m/%d",
        ("ja", _) => "%Y年%m月%d日",
        ("ko", DateStyle::Short) => "%y. %m. %d.",
        ("ko", _) => "%Y년 %m월 %d일",
        ("zh", DateStyle::Short) => "%y/%m/%d",
        ("zh", _) => "%Y年%m月%d日",

        _ => "%Y-%m-%d",
    };
    dt.format(pattern).to_string()
}

/// Format a time of day per locale conventions.
#[must_use]
pub fn format_time(dt: &DateTime<Utc>, style: TimeStyle, locale: &str) -> String {
    let pattern = match (language_of(locale).as_str(), style) {
        ("en", TimeStyle::Short) => "%-I:%M %p",
        ("en", TimeStyle::Medium) => "%-I:%M:%S %p",
        (_, TimeStyle::Short) => "%H:%M",
        (_, TimeStyle::Medium) => "%H:%M:%S",
    };
    dt.format(pattern).to_string()
}

/// Format a date and time together.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>, style: DateStyle, locale: &str) -> String {
    let date = format_date(dt, style, locale);
    let time = format_time(
        dt,
        match style {
            DateStyle::Short | DateStyle::Medium => TimeStyle::Short,
            DateStyle::Long | DateStyle::Full => TimeStyle::Medium,
        },
        locale,
    );
    format!("{date} {time}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn number_grouping_per_locale() {
        assert_eq!(format_number(1234567.89, "en-US"), "1,234,567.89");
        assert_eq!(format_number(1234567.89, "de"), "1.234.567,89");
        assert_eq!(format_number(1234567.89, "fr"), "1\u{a0}234\u{a0}567,89");
        assert_eq!(format_number(1234.5, "ja"), "1,234.5");
    }

    #[test]
    fn number_without_table_entry_is_plain() {
        assert_eq!(format_number(1234.5, "sw"), "1234.5");
    }

    #[test]
    fn small_and_negative_numbers() {
        assert_eq!(format_number(0.5, "en"), "0.5");
        assert_eq!(format_number(-1234.0, "en"), "-1,234");
        assert_eq!(format_number(999.0, "de"), "999");
    }

    #[test]
    fn fixed_fraction_digits() {
        assert_eq!(format_number_with(5.0, "en", 2), "5.00");
        assert_eq!(format_number_with(1234.567, "en", 1), "1,234.6");
    }

    #[test]
    fn integer_grouping() {
        assert_eq!(format_integer(1234567, "en"), "1,234,567");
        assert_eq!(format_integer(-42, "en"), "-42");
        assert_eq!(format_integer(1000, "ru"), "1\u{a0}000");
    }

    #[test]
    fn percent_multiplies_and_suffixes() {
        assert_eq!(format_percent(0.75, "en"), "75%");
        assert_eq!(format_percent(0.5, "fr"), "50\u{a0}%");
        assert_eq!(format_percent(1.0, "de"), "100\u{a0}%");
    }

    #[test]
    fn currency_symbol_and_placement() {
        assert_eq!(format_currency(1234.5, "USD", "en"), "$1,234.50");
        assert_eq!(format_currency(1234.5, "EUR", "fr"), "1\u{a0}234,50\u{a0}€");
        assert_eq!(format_currency(1234.5, "EUR", "de"), "1.234,50\u{a0}€");
        assert_eq!(format_currency(500.0, "JPY", "ja"), "¥500");
        assert_eq!(format_currency(500.0, "KRW", "ko"), "₩500");
    }

    #[test]
    fn unknown_currency_uses_code() {
        assert_eq!(format_currency(10.0, "CHF", "en"), "10.00\u{a0}CHF");
    }

    #[test]
    fn date_styles_english() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 13, 30, 45).unwrap();
        assert_eq!(format_date(&dt, DateStyle::Short, "en"), "1/5/24");
        assert_eq!(format_date(&dt, DateStyle::Medium, "en"), "Jan 5, 2024");
        assert_eq!(format_date(&dt, DateStyle::Long, "en"), "January 5, 2024");
        assert_eq!(
            format_date(&dt, DateStyle::Full, "en"),
            "Friday, January 5, 2024"
        );
    }

    #[test]
    fn date_styles_other_locales() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 13, 30, 45).unwrap();
        assert_eq!(format_date(&dt, DateStyle::Short, "de"), "05.01.24");
        assert_eq!(format_date(&dt, DateStyle::Medium, "ja"), "2024年01月05日");
        assert_eq!(format_date(&dt, DateStyle::Medium, "ko"), "2024년 01월 05일");
        assert_eq!(format_date(&dt, DateStyle::Short, "sw"), "2024-01-05");
    }

    #[test]
    fn time_styles() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 13, 30, 45).unwrap();
        assert_eq!(format_time(&dt, TimeStyle::Short, "en"), "1:30 PM");
        assert_eq!(format_time(&dt, TimeStyle::Medium, "en"), "1:30:45 PM");
        assert_eq!(format_time(&dt, TimeStyle::Short, "de"), "13:30");
    }

    #[test]
    fn datetime_combines() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 13, 30, 45).unwrap();
        assert_eq!(
            format_datetime(&dt, DateStyle::Medium, "en"),
            "Jan 5, 2024 1:30 PM"
        );
    }

    #[test]
    fn non_finite_passthrough() {
        assert_eq!(format_number(f64::NAN, "en"), "NaN");
        assert_eq!(format_number(f64::INFINITY, "en"), "inf");
    }
}
