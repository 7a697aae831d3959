//! Transaction extraction from statement text.
//!
//! Ten [`LayoutRecognizer`]s each encode one family of statement layouts.
//! [`StatementExtractor`] tries them in [`RecognizerId::PRIORITY`] order and
//! trusts only the first one that finds anything.

mod extractor;
pub mod recognizers;
pub mod rules;

pub use extractor::{ExtractionResult, StatementExtractor, extract_transactions};
pub use recognizers::{LayoutRecognizer, RecognizerId};
