//! Description cleanup.

use super::patterns::WHITESPACE_RUN;

/// Trim and collapse internal whitespace runs to one space.
pub fn clean_description(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_description("  STARBUCKS   #123 \t"), "STARBUCKS #123");
        assert_eq!(clean_description("PAYMENT\nTHANK  YOU"), "PAYMENT THANK YOU");
    }

    #[test]
    fn test_keeps_case_and_punctuation() {
        assert_eq!(clean_description("Amazon.ca*Mktp"), "Amazon.ca*Mktp");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["  a  b  ", "\tE-TRANSFER\u{00a0}\u{00a0}SENT ", "", "x"] {
            let once = clean_description(raw);
            assert_eq!(clean_description(&once), once);
        }
    }
}
