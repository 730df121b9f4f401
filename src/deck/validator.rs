//! Deck legality validation.
//!
//! `validate` is a pure function of the deck and a rules table. It never
//! fails; it returns every violation it finds, in this order:
//!
//! 1. Missing hero
//! 2. Per card, in name order: copy limit, then format legality
//! 3. Deck size

use serde::Serialize;

use crate::cards::Format;
use crate::config::{FormatRules, SizeRule};

use super::model::Deck;

/// One rule a deck breaks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Violation {
    NoHero,
    TooManyCopies {
        name: String,
        quantity: u32,
        limit: u32,
    },
    NotLegal {
        name: String,
        format: Format,
    },
    TooSmall {
        format: Format,
        total: u32,
        minimum: u32,
    },
    WrongSize {
        format: Format,
        total: u32,
        required: u32,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::NoHero => f.write_str("No hero selected."),
            Violation::TooManyCopies {
                name,
                quantity,
                limit,
            } => write!(f, "{name}: Too many copies ({quantity}/{limit})."),
            Violation::NotLegal { name, format } => write!(f, "{name}: Not legal in {format}."),
            Violation::TooSmall {
                format,
                total,
                minimum,
            } => write!(f, "{format} Deck too small: {total}/{minimum} cards."),
            Violation::WrongSize {
                format,
                total,
                required,
            } => write!(
                f,
                "{format} Deck must be exactly {required} cards (Current: {total})."
            ),
        }
    }
}

/// Result of validating a deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LegalityReport {
    pub violations: Vec<Violation>,
}

impl LegalityReport {
    /// A deck is legal when nothing was reported.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable violation messages, in report order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl From<LegalityReport> for (bool, Vec<String>) {
    fn from(report: LegalityReport) -> Self {
        (report.is_legal(), report.messages())
    }
}

/// Check a deck against the rules for its format.
#[must_use]
pub fn validate(deck: &Deck, rules: &FormatRules) -> LegalityReport {
    let format = deck.format();
    let rule = rules.rule(format);
    let mut violations = Vec::new();

    if deck.hero().is_none() {
        violations.push(Violation::NoHero);
    }

    for entry in deck.entries() {
        if entry.quantity > rule.copy_limit {
            violations.push(Violation::TooManyCopies {
                name: entry.card.name.clone(),
                quantity: entry.quantity,
                limit: rule.copy_limit,
            });
        }
        if !entry.card.is_legal(format.as_str()) {
            violations.push(Violation::NotLegal {
                name: entry.card.name.clone(),
                format,
            });
        }
    }

    let total = deck.total_cards();
    match rule.size {
        SizeRule::AtLeast(minimum) if total < minimum => {
            violations.push(Violation::TooSmall {
                format,
                total,
                minimum,
            });
        }
        SizeRule::Exactly(required) if total != required => {
            violations.push(Violation::WrongSize {
                format,
                total,
                required,
            });
        }
        _ => {}
    }

    LegalityReport { violations }
}
