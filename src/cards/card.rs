//! Card entities - immutable catalog cards.
//!
//! A `Card` is built once from a `CardRecord` and never changes afterwards.
//! Decks share cards through `Arc<Card>`, so the same entity can sit in any
//! number of decks at once.
//!
//! Construction never fails. Missing or malformed fields become sentinels:
//! empty strings, empty tag lists, or `None` for stats.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::format::{Format, Legalities};
use super::record::{CardRecord, RawStat};

/// Short list of tags (types, traits, keywords).
pub type Tags = SmallVec<[String; 4]>;

/// Type marker that makes a card a hero.
pub const HERO_TYPE: &str = "Hero";

/// A cost, power or defense value. Flesh and Blood allows symbolic values
/// such as `X` or `*`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatValue {
    Number(i64),
    Symbol(String),
}

impl StatValue {
    /// Get the number, if this stat is numeric.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            StatValue::Number(n) => Some(*n),
            StatValue::Symbol(_) => None,
        }
    }

    fn from_raw(raw: &RawStat) -> Option<Self> {
        match raw {
            RawStat::Int(n) => Some(StatValue::Number(*n)),
            RawStat::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else if let Ok(n) = s.parse() {
                    Some(StatValue::Number(n))
                } else {
                    Some(StatValue::Symbol(s.to_string()))
                }
            }
            RawStat::Other(_) => None,
        }
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{n}"),
            StatValue::Symbol(s) => f.write_str(s),
        }
    }
}

/// An immutable card.
///
/// ## Example
///
/// ```
/// use fab_deck::cards::Card;
///
/// let hero = Card::builder("Prism").type_text("Light Illusionist Hero").build();
/// assert!(hero.is_hero());
///
/// let attack = Card::builder("Snatch").pitch(1).legal_in("CC").build();
/// assert!(!attack.is_hero());
/// assert!(attack.is_legal("CC"));
/// assert!(!attack.is_legal("Blitz"));
/// assert_eq!(attack.pitch_tag(), " (red)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Catalog-unique name; the deck aggregation key.
    pub name: String,
    pub color: String,
    pub pitch: Option<u8>,
    pub cost: Option<StatValue>,
    pub power: Option<StatValue>,
    pub defense: Option<StatValue>,
    pub type_tags: Tags,
    pub type_text: String,
    pub traits: Tags,
    pub keywords: Tags,
    pub rules_text: String,
    pub legalities: Legalities,
    /// Artwork reference from the first printing.
    pub image_url: Option<String>,
}

impl Card {
    /// Start building a card with the given name and no other attributes.
    pub fn builder(name: impl Into<String>) -> CardBuilder {
        CardBuilder {
            card: Card {
                name: name.into(),
                color: String::new(),
                pitch: None,
                cost: None,
                power: None,
                defense: None,
                type_tags: Tags::new(),
                type_text: String::new(),
                traits: Tags::new(),
                keywords: Tags::new(),
                rules_text: String::new(),
                legalities: Legalities::new(),
                image_url: None,
            },
        }
    }

    /// Build a card from a raw catalog record.
    #[must_use]
    pub fn from_record(record: &CardRecord) -> Self {
        let mut legalities = Legalities::new();
        legalities.set(Format::CC.as_str(), record.cc_legal.unwrap_or(false));
        legalities.set(Format::Blitz.as_str(), record.blitz_legal.unwrap_or(false));
        legalities.set(
            Format::SilverAge.as_str(),
            record.silver_age_legal.unwrap_or(false),
        );

        Self {
            name: record.name.clone().unwrap_or_default(),
            color: record.color.clone().unwrap_or_default(),
            pitch: record.pitch.as_ref().and_then(pitch_from_raw),
            cost: record.cost.as_ref().and_then(StatValue::from_raw),
            power: record.power.as_ref().and_then(StatValue::from_raw),
            defense: record.defense.as_ref().and_then(StatValue::from_raw),
            type_tags: record.types.iter().cloned().collect(),
            type_text: record.type_text.clone().unwrap_or_default(),
            traits: record.traits.iter().cloned().collect(),
            keywords: record.card_keywords.iter().cloned().collect(),
            rules_text: record.functional_text.clone().unwrap_or_default(),
            legalities,
            image_url: record.image_url().map(str::to_string),
        }
    }

    /// Heroes occupy the deck's hero slot instead of the card pool.
    ///
    /// A card is a hero when "Hero" appears in its type line or its type tags.
    #[must_use]
    pub fn is_hero(&self) -> bool {
        self.type_text.contains(HERO_TYPE) || self.type_tags.iter().any(|t| t == HERO_TYPE)
    }

    /// Legality flag for a format name. Unknown names are not legal.
    #[must_use]
    pub fn is_legal(&self, format_name: &str) -> bool {
        self.legalities.is_legal(format_name)
    }

    /// Cosmetic pitch decoration used in deck-list export.
    #[must_use]
    pub fn pitch_tag(&self) -> &'static str {
        match self.pitch {
            Some(1) => " (red)",
            Some(2) => " (yellow)",
            Some(3) => " (blue)",
            _ => "",
        }
    }
}

fn pitch_from_raw(raw: &RawStat) -> Option<u8> {
    match raw {
        RawStat::Int(n) => u8::try_from(*n).ok(),
        RawStat::Text(s) => s.trim().parse().ok(),
        RawStat::Other(_) => None,
    }
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Card::from_record(&record)
    }
}

/// Builder for hand-made cards (tests, fixtures, fake catalogs).
#[derive(Clone, Debug)]
pub struct CardBuilder {
    card: Card,
}

impl CardBuilder {
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.card.color = color.into();
        self
    }

    #[must_use]
    pub fn pitch(mut self, pitch: u8) -> Self {
        self.card.pitch = Some(pitch);
        self
    }

    #[must_use]
    pub fn cost(mut self, cost: StatValue) -> Self {
        self.card.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn power(mut self, power: StatValue) -> Self {
        self.card.power = Some(power);
        self
    }

    #[must_use]
    pub fn defense(mut self, defense: StatValue) -> Self {
        self.card.defense = Some(defense);
        self
    }

    #[must_use]
    pub fn type_tag(mut self, tag: impl Into<String>) -> Self {
        self.card.type_tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn type_text(mut self, text: impl Into<String>) -> Self {
        self.card.type_text = text.into();
        self
    }

    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.card.keywords.push(keyword.into());
        self
    }

    #[must_use]
    pub fn rules_text(mut self, text: impl Into<String>) -> Self {
        self.card.rules_text = text.into();
        self
    }

    /// Mark the card legal in one format.
    #[must_use]
    pub fn legal_in(mut self, format_name: impl Into<String>) -> Self {
        self.card.legalities.set(format_name, true);
        self
    }

    /// Mark the card legal in every known format.
    #[must_use]
    pub fn legal_everywhere(mut self) -> Self {
        self.card.legalities = Legalities::everywhere();
        self
    }

    #[must_use]
    pub fn build(self) -> Card {
        self.card
    }
}
