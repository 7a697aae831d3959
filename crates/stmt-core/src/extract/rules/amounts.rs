//! Amount normalization for statement columns.
//!
//! Parsing is total: text that is not a number after cleanup becomes `0.0`
//! so one bad cell never aborts a document. Each such fallback is reported
//! as a `debug` event on [`AMOUNT_FALLBACK_TARGET`].

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

/// Tracing target carrying fail-to-zero events.
pub const AMOUNT_FALLBACK_TARGET: &str = "stmt_core::amounts";

const CURRENCY_SYMBOLS: [char; 5] = ['$', '£', '€', '¥', '₹'];

/// How separators inside a numeral are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberLocale {
    /// `1,234.56` / `1 234.56`: dot decimal, comma or space thousands.
    #[default]
    Standard,
    /// `1 234,56` / `1.234,56` / `1,234.56`: the last comma or dot followed by
    /// one or two digits is the decimal point.
    European,
}

/// A normalized amount cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParsedAmount {
    /// Absolute value.
    pub magnitude: f64,
    /// A minus sign or accounting parentheses were present.
    pub negative: bool,
    /// The remainder was not a number and was replaced by zero.
    pub fallback: bool,
}

impl ParsedAmount {
    pub fn signed(&self) -> f64 {
        if self.negative { -self.magnitude } else { self.magnitude }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }
}

/// Parse a standard-locale amount whose matched text is also its source fragment.
pub fn parse_amount(raw: &str) -> ParsedAmount {
    parse_amount_in(raw, raw, NumberLocale::Standard)
}

/// Parse a matched amount.
///
/// `original` is the unstripped source fragment; parentheses are detected
/// there since accounting negatives may sit outside the matched digits.
pub fn parse_amount_in(raw: &str, original: &str, locale: NumberLocale) -> ParsedAmount {
    let without_currency: String = raw
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c))
        .collect();

    let cleaned = strip_separators(&without_currency, locale);

    let negative = cleaned.contains('-') || original.contains('(');

    let unsigned: String = cleaned
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')'))
        .collect();
    let unsigned = unsigned.trim();

    if unsigned.is_empty() {
        return ParsedAmount {
            magnitude: 0.0,
            negative,
            fallback: false,
        };
    }

    match to_magnitude(unsigned) {
        Some(magnitude) => ParsedAmount {
            magnitude,
            negative,
            fallback: false,
        },
        None => {
            debug!(target: AMOUNT_FALLBACK_TARGET, raw = original, "unparseable amount, using 0.0");
            ParsedAmount {
                magnitude: 0.0,
                negative,
                fallback: true,
            }
        }
    }
}

/// Exact decimal first; numerals wider than `Decimal`'s 28 digits fall back to `f64`.
fn to_magnitude(unsigned: &str) -> Option<f64> {
    Decimal::from_str(unsigned)
        .ok()
        .and_then(|value| value.abs().to_f64())
        .or_else(|| {
            unsigned
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(f64::abs)
        })
}

fn strip_separators(s: &str, locale: NumberLocale) -> String {
    match locale {
        NumberLocale::Standard => s
            .chars()
            .filter(|c| !matches!(c, ',' | ' ' | '\u{00a0}'))
            .collect(),
        NumberLocale::European => {
            let compact: String = s
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            let decimal_mark = decimal_mark_position(&compact);

            compact
                .char_indices()
                .filter_map(|(i, c)| match c {
                    ',' | '.' if Some(i) == decimal_mark => Some('.'),
                    ',' | '.' => None,
                    other => Some(other),
                })
                .collect()
        }
    }
}

/// Byte index of the separator acting as decimal point, if any.
fn decimal_mark_position(s: &str) -> Option<usize> {
    let idx = s.rfind([',', '.'])?;
    let tail = s[idx + 1..].trim_end_matches(')');
    let is_fraction = (1..=2).contains(&tail.len()) && tail.chars().all(|c| c.is_ascii_digit());
    is_fraction.then_some(idx)
}
