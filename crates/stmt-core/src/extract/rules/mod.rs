//! Field normalizers and row filters used by the layout recognizers.

pub mod amounts;
pub mod description;
pub mod filters;
pub mod patterns;

pub use amounts::{
    AMOUNT_FALLBACK_TARGET, NumberLocale, ParsedAmount, parse_amount, parse_amount_in,
};
pub use description::clean_description;
pub use filters::{RowFilter, has_payment_cue, is_header_or_footer, keyword_direction};

use crate::models::TransactionType;

/// Direction from the amount's sign alone: negative is money out.
pub fn direction_from_sign(amount: &ParsedAmount) -> TransactionType {
    if amount.negative {
        TransactionType::Debit
    } else {
        TransactionType::Credit
    }
}

/// A column cell holding an actual figure rather than padding.
pub fn has_digits(cell: Option<&str>) -> bool {
    cell.is_some_and(|c| c.chars().any(|ch| ch.is_ascii_digit()))
}
