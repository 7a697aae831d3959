//! Keyword categorization of transaction descriptions.
//!
//! Rules are tried in order against the lowercased description and the first
//! keyword hit wins. Income is only considered for credits, and before
//! everything else.

use crate::models::{Transaction, TransactionType};

pub const GROCERIES: &str = "Groceries";
pub const DINING: &str = "Dining & Restaurants";
pub const TRANSPORTATION: &str = "Transportation";
pub const UTILITIES: &str = "Utilities";
pub const SHOPPING: &str = "Shopping";
pub const ENTERTAINMENT: &str = "Entertainment";
pub const HEALTHCARE: &str = "Healthcare";
pub const TRAVEL: &str = "Travel";
pub const INCOME: &str = "Income";
pub const TRANSFER: &str = "Transfer";
pub const BILLS: &str = "Bills & Subscriptions";
pub const EDUCATION: &str = "Education";
pub const PERSONAL_CARE: &str = "Personal Care";
pub const HOME: &str = "Home & Garden";
pub const INSURANCE: &str = "Insurance";
pub const FEES: &str = "Fees & Charges";
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A category and the description fragments that select it.
#[derive(Debug)]
pub struct CategoryRule {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

const INCOME_RULE: CategoryRule = CategoryRule {
    category: INCOME,
    keywords: &[
        "salary", "payroll", "direct deposit", "wage", "payment received", "dividend",
        "interest", "refund", "reimbursement", "paycheck", "income", "deposit",
        "transfer from",
    ],
};

/// Spending rules in match order.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: GROCERIES,
        keywords: &[
            "walmart", "target", "costco", "kroger", "safeway", "whole foods", "trader joe",
            "aldi", "publix", "food lion", "wegmans", "heb", "sprouts", "albertsons", "giant",
            "stop & shop", "market", "grocery", "supermarket", "food mart", "fresh market",
        ],
    },
    CategoryRule {
        category: DINING,
        keywords: &[
            "restaurant", "cafe", "coffee", "starbucks", "dunkin", "mcdonald", "burger king",
            "wendy", "taco bell", "subway", "chipotle", "panera", "pizza", "domino",
            "papa john", "kfc", "chick-fil-a", "popeyes", "five guys", "shake shack",
            "in-n-out", "dining", "food delivery", "doordash", "uber eats", "grubhub",
            "postmates", "bar & grill", "bistro", "diner", "eatery", "bakery", "deli",
        ],
    },
    CategoryRule {
        category: TRANSPORTATION,
        keywords: &[
            "shell", "exxon", "chevron", "bp", "mobil", "texaco", "gas station", "fuel",
            "gasoline", "parking", "uber", "lyft", "taxi", "metro", "transit", "train",
            "bus fare", "subway", "toll", "car wash", "auto repair", "mechanic", "oil change",
            "tire", "dmv",
        ],
    },
    CategoryRule {
        category: UTILITIES,
        keywords: &[
            "electric", "power", "energy", "water", "gas company", "utility", "internet",
            "cable", "phone", "wireless", "verizon", "at&t", "t-mobile", "sprint", "comcast",
            "xfinity", "spectrum", "cox", "trash", "waste management", "recycling",
        ],
    },
    CategoryRule {
        category: SHOPPING,
        keywords: &[
            "amazon", "ebay", "etsy", "best buy", "apple store", "microsoft",
            "department store", "mall", "outlet", "retail", "clothing", "fashion", "shoes",
            "nordstrom", "macy", "gap", "old navy", "tj maxx", "marshalls", "ross",
            "burlington", "kohl", "jcpenney", "sears", "online shopping",
        ],
    },
    CategoryRule {
        category: ENTERTAINMENT,
        keywords: &[
            "netflix", "hulu", "disney", "spotify", "apple music", "youtube", "amazon prime",
            "hbo", "movie", "theater", "cinema", "concert", "ticket", "game", "steam",
            "playstation", "xbox", "nintendo", "entertainment", "amusement", "theme park",
            "zoo", "museum", "gym", "fitness", "sports",
        ],
    },
    CategoryRule {
        category: HEALTHCARE,
        keywords: &[
            "pharmacy", "cvs", "walgreens", "rite aid", "medical", "doctor", "hospital",
            "clinic", "urgent care", "dental", "dentist", "vision", "optometry", "health",
            "prescription", "rx", "medicine", "lab corp", "quest diagnostics",
        ],
    },
    CategoryRule {
        category: TRAVEL,
        keywords: &[
            "airline", "united", "delta", "american airlines", "southwest", "jetblue", "hotel",
            "motel", "marriott", "hilton", "hyatt", "holiday inn", "airbnb", "booking.com",
            "expedia", "travel", "vacation", "rental car", "hertz", "enterprise", "avis",
            "budget",
        ],
    },
    CategoryRule {
        category: TRANSFER,
        keywords: &[
            "transfer to", "transfer from", "venmo", "paypal", "zelle", "cash app",
            "apple pay", "google pay", "atm withdrawal", "withdrawal", "internal transfer",
            "savings transfer",
        ],
    },
    CategoryRule {
        category: BILLS,
        keywords: &[
            "subscription", "monthly payment", "autopay", "bill pay", "insurance payment",
            "loan payment", "mortgage", "rent", "lease", "hoa", "condo fee", "membership",
            "dues",
        ],
    },
    CategoryRule {
        category: EDUCATION,
        keywords: &[
            "school", "university", "college", "tuition", "student", "textbook", "education",
            "learning", "course", "class", "academy", "institute", "library", "bookstore",
        ],
    },
    CategoryRule {
        category: PERSONAL_CARE,
        keywords: &[
            "salon", "spa", "barber", "haircut", "nail", "beauty", "cosmetic", "skincare",
            "massage", "personal care",
        ],
    },
    CategoryRule {
        category: HOME,
        keywords: &[
            "home depot", "lowes", "menards", "hardware", "furniture", "ikea", "bed bath",
            "garden", "nursery", "plant", "lawn", "home improvement", "repair", "contractor",
            "plumber", "electrician", "hvac",
        ],
    },
    CategoryRule {
        category: INSURANCE,
        keywords: &[
            "insurance", "geico", "state farm", "allstate", "progressive", "usaa",
            "liberty mutual", "nationwide", "farmers insurance", "auto insurance",
            "health insurance", "life insurance",
        ],
    },
    CategoryRule {
        category: FEES,
        keywords: &[
            "fee", "charge", "overdraft", "late fee", "annual fee", "service charge",
            "maintenance fee", "atm fee", "penalty", "interest charge", "finance charge",
        ],
    },
];

impl CategoryRule {
    fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|keyword| lower.contains(keyword))
    }
}

/// Category label for one description.
pub fn categorize(description: &str, kind: TransactionType) -> &'static str {
    let lower = description.to_lowercase();

    if kind.is_credit() && INCOME_RULE.matches(&lower) {
        return INCOME;
    }

    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map_or(UNCATEGORIZED, |rule| rule.category)
}

/// Copies of `transactions` with their category assigned.
pub fn categorize_all(transactions: &[Transaction]) -> Vec<Transaction> {
    transactions
        .iter()
        .map(|txn| {
            txn.clone()
                .with_category(categorize(&txn.description, txn.kind))
        })
        .collect()
}

/// Every label [`categorize`] can return.
pub fn all_categories() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = CATEGORY_RULES.iter().map(|rule| rule.category).collect();
    labels.insert(8, INCOME);
    labels.push(UNCATEGORIZED);
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNCATEGORIZED as EXTRACTED;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spending_rules() {
        assert_eq!(categorize("STARBUCKS #123", TransactionType::Debit), DINING);
        assert_eq!(categorize("SHELL C02345", TransactionType::Debit), TRANSPORTATION);
        assert_eq!(categorize("Netflix", TransactionType::Debit), ENTERTAINMENT);
        assert_eq!(categorize("Monthly maintenance fee", TransactionType::Debit), FEES);
    }

    #[test]
    fn test_income_only_for_credits() {
        assert_eq!(categorize("Payroll ACME", TransactionType::Credit), INCOME);
        assert_eq!(categorize("Transfer from savings", TransactionType::Credit), INCOME);
        // the same words on a debit fall through to the spending rules
        assert_eq!(categorize("Transfer from savings", TransactionType::Debit), TRANSFER);
    }

    #[test]
    fn test_unknown_description() {
        assert_eq!(categorize("Zqxv", TransactionType::Debit), UNCATEGORIZED);
    }

    #[test]
    fn test_categorize_all_leaves_input_untouched() {
        let txns = vec![Transaction::new("Jan 5", "Netflix", 15.99, TransactionType::Debit)];
        let categorized = categorize_all(&txns);

        assert_eq!(txns[0].category, EXTRACTED);
        assert_eq!(categorized[0].category, ENTERTAINMENT);
        assert_eq!(categorized[0].amount, txns[0].amount);
    }

    #[test]
    fn test_all_categories() {
        let labels = all_categories();
        assert_eq!(labels.len(), 17);
        assert_eq!(labels[8], INCOME);
        assert_eq!(labels.last(), Some(&UNCATEGORIZED));
    }
}
