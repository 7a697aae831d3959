//! Log events emitted while extracting: the matched layout, the no-match
//! warning and amount fallbacks.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use stmt_core::extract::rules::AMOUNT_FALLBACK_TARGET;
use stmt_core::{StatementExtractor, parse_amount};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Shared in-memory sink for formatted events.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a subscriber that records every event down to TRACE.
fn capture_logs(f: impl FnOnce()) -> String {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    sink.contents()
}

#[test]
fn unmatched_text_logs_warning() {
    let logs = capture_logs(|| {
        let result = StatementExtractor::new().extract_detailed("Lorem ipsum dolor sit amet");
        assert!(result.is_empty());
    });

    let warning = logs
        .lines()
        .find(|line| line.contains("No pattern matched"))
        .expect("no-match warning");
    assert!(warning.contains("WARN"));
    assert!(!logs.contains("Matched"));
}

#[test]
fn matched_layout_is_logged_with_count() {
    let logs = capture_logs(|| {
        let txns = StatementExtractor::new()
            .extract("Jan 5 Deposit from Employer 100.00\nPurchase at Store 20.00");
        assert_eq!(txns.len(), 2);
    });

    let matched = logs
        .lines()
        .find(|line| line.contains("Matched"))
        .expect("matched-layout event");
    assert!(matched.contains("INFO"));
    assert!(matched.contains("Pattern 1: Canadian Dual-Date Separate Columns"));
    assert!(matched.contains("2 transactions"));
    assert!(!logs.contains("No pattern matched"));
}

#[test]
fn amount_fallback_reported_on_its_target() {
    let logs = capture_logs(|| {
        assert!(parse_amount("abc").fallback);
    });

    let event = logs
        .lines()
        .find(|line| line.contains(AMOUNT_FALLBACK_TARGET))
        .expect("fallback event");
    assert!(event.contains("DEBUG"));
    assert!(event.contains("abc"));
}

#[test]
fn clean_amounts_emit_no_fallback() {
    let logs = capture_logs(|| {
        assert_eq!(parse_amount("1,234.56").magnitude, 1234.56);
        assert!(!parse_amount("$ ").fallback);
    });

    assert!(!logs.contains(AMOUNT_FALLBACK_TARGET));
}
