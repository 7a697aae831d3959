//! Layout recognizers, one per statement family.
//!
//! Each recognizer scans the whole text for one column layout and returns
//! every row it could turn into a [`Transaction`], top to bottom.

mod bilingual;
mod brokerage;
mod canadian_columns;
mod check_register;
mod dual_date;
mod legacy;
mod minimal_export;
mod multi_currency;
mod reference_code;
mod single_date;

pub use bilingual::BilingualRecognizer;
pub use brokerage::BrokerageRecognizer;
pub use canadian_columns::CanadianColumnsRecognizer;
pub use check_register::CheckRegisterRecognizer;
pub use dual_date::DualDateRecognizer;
pub use legacy::LegacyRecognizer;
pub use minimal_export::MinimalExportRecognizer;
pub use multi_currency::MultiCurrencyRecognizer;
pub use reference_code::ReferenceCodeRecognizer;
pub use single_date::SingleDateRecognizer;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Trait for layout recognizers.
pub trait LayoutRecognizer: Send + Sync {
    /// Which layout this recognizer encodes.
    fn id(&self) -> RecognizerId;

    /// Extract every matching row from the full statement text.
    fn recognize(&self, text: &str) -> Vec<Transaction>;
}

/// Identity of a layout recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognizerId {
    /// 1. Withdrawal / deposit / balance columns with same-day date carry-forward.
    CanadianColumns,
    /// 2. Transaction date + post date + signed amount (credit cards).
    DualDate,
    /// 3. Date + description + amount + optional balance.
    SingleDate,
    /// 4. Check number + debit / credit / balance columns.
    CheckRegister,
    /// 5. Date + description + amount, nothing else.
    MinimalExport,
    /// 6. Date + reference code + description + amount.
    ReferenceCode,
    /// 7. Brokerage trade ledger.
    Brokerage,
    /// 8. English / French columns with European numerals.
    Bilingual,
    /// 9. Foreign amount + ISO currency + converted amount.
    MultiCurrency,
    /// 10. Permissive last-resort date + text + amount.
    Legacy,
}

impl RecognizerId {
    /// Fixed trial order, most common layouts first.
    pub const PRIORITY: [RecognizerId; 10] = [
        RecognizerId::DualDate,
        RecognizerId::CanadianColumns,
        RecognizerId::SingleDate,
        RecognizerId::Legacy,
        RecognizerId::CheckRegister,
        RecognizerId::ReferenceCode,
        RecognizerId::MinimalExport,
        RecognizerId::Brokerage,
        RecognizerId::Bilingual,
        RecognizerId::MultiCurrency,
    ];

    /// Pattern number used in diagnostics.
    pub fn number(self) -> u8 {
        match self {
            Self::CanadianColumns => 1,
            Self::DualDate => 2,
            Self::SingleDate => 3,
            Self::CheckRegister => 4,
            Self::MinimalExport => 5,
            Self::ReferenceCode => 6,
            Self::Brokerage => 7,
            Self::Bilingual => 8,
            Self::MultiCurrency => 9,
            Self::Legacy => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CanadianColumns => "Canadian Dual-Date Separate Columns",
            Self::DualDate => "US/Credit Card Dual-Date",
            Self::SingleDate => "Simple Date-Description-Amount",
            Self::CheckRegister => "Check-Heavy Format",
            Self::MinimalExport => "Minimal Export",
            Self::ReferenceCode => "Reference Number Format",
            Self::Brokerage => "Investment/Brokerage",
            Self::Bilingual => "Bilingual English/French",
            Self::MultiCurrency => "Multi-Currency Format",
            Self::Legacy => "Legacy Single-Date-Amount",
        }
    }

    /// The recognizer implementing this layout.
    pub fn recognizer(self) -> Box<dyn LayoutRecognizer> {
        match self {
            Self::CanadianColumns => Box::new(CanadianColumnsRecognizer),
            Self::DualDate => Box::new(DualDateRecognizer),
            Self::SingleDate => Box::new(SingleDateRecognizer),
            Self::CheckRegister => Box::new(CheckRegisterRecognizer),
            Self::MinimalExport => Box::new(MinimalExportRecognizer),
            Self::ReferenceCode => Box::new(ReferenceCodeRecognizer),
            Self::Brokerage => Box::new(BrokerageRecognizer),
            Self::Bilingual => Box::new(BilingualRecognizer),
            Self::MultiCurrency => Box::new(MultiCurrencyRecognizer),
            Self::Legacy => Box::new(LegacyRecognizer),
        }
    }
}

impl fmt::Display for RecognizerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern {}: {}", self.number(), self.label())
    }
}
