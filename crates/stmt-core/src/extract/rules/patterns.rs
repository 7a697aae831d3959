//! Regex shapes for the statement layouts.
//!
//! Every pattern is applied to the whole statement text. `.` never crosses a
//! newline, so descriptions stay on one line while the whitespace between
//! columns may wrap.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Canadian dual-column: [Date] Description Withdrawal [Deposit] [Balance]
    // Date is "Jan 5" or "5 Jan", and may be absent on same-day rows.
    pub static ref CANADIAN_COLUMNS: Regex = Regex::new(concat!(
        r"(?:(?P<date>(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2}",
        r"|\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*)\s+)?",
        r"(?P<desc>[A-Za-z].*?)\s+",
        r"(?P<first>\d{1,3}(?:,\d{3})*\.\d{2})",
        r"(?:\s+(?P<second>\d{1,3}(?:,\d{3})*\.\d{2}))?",
        r"(?:\s+(?P<third>\d{1,3}(?:,\d{3})*\.\d{2}))?",
    )).unwrap();

    // Credit card: Trans date | Post date | Description | Amount
    pub static ref DUAL_DATE: Regex = Regex::new(concat!(
        r"(?P<trans>(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2}|\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\s+",
        r"(?P<post>(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2}|\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?P<amount>-?\d{1,3}(?:,\d{3})*\.\d{2})(?:\s|$)",
    )).unwrap();

    // Date | Description | Amount | [Balance]
    pub static ref SINGLE_DATE: Regex = Regex::new(concat!(
        r"(?P<date>\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}-\d{2}-\d{2})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?P<amount>-?[\$€£¥₹]?\s*\d{1,3}(?:,\d{3})*\.\d{2})\s+",
        r"(?P<balance>[\$€£¥₹]?\s*\d{1,3}(?:,\d{3})*\.\d{2})?(?:\s|$)",
    )).unwrap();

    // Check # | Date | Description | Debit | Credit | Balance
    pub static ref CHECK_REGISTER: Regex = Regex::new(concat!(
        r"(?P<check>\d{3,6}|\*{4})\s+",
        r"(?P<date>\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?:(?P<debit>\d{1,3}(?:,\d{3})*\.\d{2})|\s+)\s+",
        r"(?:(?P<credit>\d{1,3}(?:,\d{3})*\.\d{2})|\s+)\s+",
        r"(?P<balance>\d{1,3}(?:,\d{3})*\.\d{2})",
    )).unwrap();

    // Date | Description | Amount, nothing after
    pub static ref MINIMAL_EXPORT: Regex = Regex::new(concat!(
        r"(?P<date>\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}-\d{2}-\d{2})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?P<amount>-?[\$€£¥₹]?\s*\d{1,3}(?:,\d{3})*\.\d{2})(?:\s|$)",
    )).unwrap();

    // Date | Reference | Description | Amount | [Balance]
    pub static ref REFERENCE_CODE: Regex = Regex::new(concat!(
        r"(?P<date>\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\s+",
        r"(?P<reference>[A-Z0-9]{6,20})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?P<amount>-?\$?\d{1,3}(?:,\d{3})*\.\d{2})\s+",
        r"(?P<balance>\$?\d{1,3}(?:,\d{3})*\.\d{2})?(?:\s|$)",
    )).unwrap();

    // Trade | Settlement | Symbol | Description | Action | Quantity | Price | Amount
    pub static ref BROKERAGE: Regex = Regex::new(concat!(
        r"(?P<trade>\d{1,2}/\d{1,2}/\d{2,4})\s+",
        r"(?P<settle>\d{1,2}/\d{1,2}/\d{2,4})\s+",
        r"(?P<symbol>[A-Z]{1,5})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?P<action>BUY|SELL|DIV|INT)\s+",
        r"(?P<quantity>-?\d+(?:\.\d+)?)\s+",
        r"(?P<price>\d+\.\d{2,4})\s+",
        r"(?P<amount>-?\d{1,3}(?:,\d{3})*\.\d{2})",
    )).unwrap();

    // Date | Description | Débit/Debit | Crédit/Credit | Solde/Balance
    // Numerals use comma or space thousands and comma or dot decimals.
    pub static ref BILINGUAL: Regex = Regex::new(concat!(
        r"(?P<date>(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec|Janv|Févr|Mars|Avr|Mai|Juin|Juil|Août|Sept)[a-z]*\s+\d{1,2})\s+",
        r"(?P<desc>.*?)\s+",
        r"(?:(?P<debit>\d{1,3}(?:[,\s]\d{3})*[,\.]\d{2})|\s+)\s+",
        r"(?:(?P<credit>\d{1,3}(?:[,\s]\d{3})*[,\.]\d{2})|\s+)\s+",
        r"(?P<balance>\d{1,3}(?:[,\s]\d{3})*[,\.]\d{2})",
    )).unwrap();

    // Date | Description | Amount | Currency | Converted amount
    pub static ref MULTI_CURRENCY: Regex = Regex::new(concat!(
        r"(?P<date>\d{1,2}/\d{1,2}/\d{2,4})\s+",
        r"(?P<desc>.+?)\s+",
        r"(?P<amount>-?\d{1,3}(?:,\d{3})*\.\d{2})\s+",
        r"(?P<currency>[A-Z]{3})\s+",
        r"(?P<converted>-?\d{1,3}(?:,\d{3})*\.\d{2})",
    )).unwrap();

    // Date | Description (5-80 chars) | unsigned Amount
    pub static ref LEGACY: Regex = Regex::new(concat!(
        r"(?P<date>(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2}|\d{1,2}[/-]\d{1,2}(?:[/-]\d{2,4})?)\s+",
        r"(?P<desc>.{5,80}?)\s+",
        r"(?P<amount>\d{1,3}(?:,\d{3})*\.\d{2})(?:\s|$)",
    )).unwrap();

    // A description that is only a number ("42", "1234.5")
    pub static ref NUMERIC_ONLY: Regex = Regex::new(
        r"^\s*\d+\.?\d*\s*$"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canadian_columns_optional_date() {
        let caps = CANADIAN_COLUMNS.captures("Jan 5 Coffee Shop 4.50 95.50").unwrap();
        assert_eq!(&caps["date"], "Jan 5");
        assert_eq!(&caps["desc"], "Coffee Shop");
        assert_eq!(&caps["first"], "4.50");
        assert_eq!(&caps["second"], "95.50");
        assert!(caps.name("third").is_none());

        let caps = CANADIAN_COLUMNS.captures("Interac purchase 12.00").unwrap();
        assert!(caps.name("date").is_none());
        assert_eq!(&caps["desc"], "Interac purchase");
    }

    #[test]
    fn test_dual_date_requires_two_dates() {
        assert!(DUAL_DATE.is_match("Aug 25 Aug 26 PAYMENT THANK YOU 200.00"));
        assert!(DUAL_DATE.is_match("08/25/24 08/26/24 AMAZON.CA -19.99"));
        assert!(!DUAL_DATE.is_match("Aug 25 PAYMENT THANK YOU 200.00"));
    }

    #[test]
    fn test_description_does_not_cross_lines() {
        assert!(!DUAL_DATE.is_match("Jan 5 Jan 7 STARBUCKS\n#123 -4.50"));
        assert!(!MINIMAL_EXPORT.is_match("01/15/2024 Coffee\nShop\n-4.50x"));
    }

    #[test]
    fn test_bilingual_accepts_french_months_and_european_numerals() {
        let caps = BILINGUAL
            .captures("Févr 3   Épicerie Metro   45,67      1 234,56")
            .unwrap();
        assert_eq!(&caps["date"], "Févr 3");
        assert_eq!(&caps["desc"], "Épicerie Metro");
        assert_eq!(&caps["debit"], "45,67");
        assert!(caps.name("credit").is_none());
        assert_eq!(&caps["balance"], "1 234,56");
    }

    #[test]
    fn test_numeric_only() {
        assert!(NUMERIC_ONLY.is_match("1234"));
        assert!(NUMERIC_ONLY.is_match(" 12.5 "));
        assert!(!NUMERIC_ONLY.is_match("12 Main St"));
    }
}
