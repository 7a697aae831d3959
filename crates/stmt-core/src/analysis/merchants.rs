//! Merchant names recovered from transaction descriptions.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Card and transfer wording in front of the merchant.
    static ref PREFIXES: [Regex; 3] = [
        Regex::new(
            r"(?i)^(purchase|payment|debit card|credit card|withdrawal|transfer|atm|pos|direct debit)\s+(at|to|from|for)?\s*"
        ).unwrap(),
        Regex::new(r"(?i)^(card payment|online payment|mobile payment)\s+(to|at)?\s*").unwrap(),
        // Bank transaction codes (DD, SO, BGC, ...) as whole words only
        Regex::new(r"(?i)^(dd|so|bp|tfr|trf|tfp|bgc)\b\s*").unwrap(),
    ];

    /// Noise removed from a merchant name, applied in order.
    static ref NOISE: [Regex; 6] = [
        // Transaction and store ids
        Regex::new(r"\s+#?\d{3,}").unwrap(),
        Regex::new(r"\s+\d{1,2}/\d{1,2}/\d{2,4}").unwrap(),
        Regex::new(r"\s+\d{1,2}-\d{1,2}-\d{2,4}").unwrap(),
        Regex::new(r"(?i)\s+(store|location|branch)\s+#?\d+").unwrap(),
        // State and ZIP at the end
        Regex::new(r"(?i)\s+[A-Z]{2}\s+\d{5}(-\d{4})?$").unwrap(),
        Regex::new(r"(?i)\s+(inc|llc|ltd|corp|corporation)\.?$").unwrap(),
    ];

    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9\s]").unwrap();
}

/// Strip ids, dates, store numbers, trailing state/ZIP and company suffixes.
pub fn clean_merchant_name(name: &str) -> String {
    let cleaned = NOISE
        .iter()
        .fold(name.trim().to_string(), |acc, re| re.replace_all(&acc, "").into_owned());

    WHITESPACE.replace_all(&cleaned, " ").trim().to_string()
}

/// Merchant part of a description such as `PURCHASE AT SHELL OIL 57444`.
///
/// Falls back to the trimmed description when cleanup leaves nothing.
pub fn extract_merchant_name(description: &str) -> String {
    let stripped = PREFIXES
        .iter()
        .fold(description.trim().to_string(), |acc, re| re.replace(&acc, "").into_owned());

    let merchant = clean_merchant_name(&stripped);
    if merchant.is_empty() {
        WHITESPACE.replace_all(description.trim(), " ").into_owned()
    } else {
        merchant
    }
}

/// Lowercase alphanumeric key used to group spellings of one merchant.
pub fn normalize_merchant_name(name: &str) -> String {
    let lower = extract_merchant_name(name).to_lowercase();
    let alnum = NON_ALNUM.replace_all(&lower, "");
    WHITESPACE.replace_all(&alnum, " ").trim().to_string()
}
