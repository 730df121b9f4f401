//! Format rules configuration.
//!
//! Each format sets a per-card copy limit and a deck-size rule. The defaults
//! are the Classic Constructed and Blitz rules; Silver Age has only a copy
//! limit until its size rule is settled. Shells can override the table from
//! JSON:
//!
//! ```json
//! { "rules": [
//!     { "format": "CC", "copy_limit": 3, "size": { "at_least": 60 } },
//!     { "format": "Blitz", "copy_limit": 2, "size": { "exactly": 40 } }
//! ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cards::Format;
use crate::error::RulesError;

/// Copy limit for formats without an explicit rule.
pub const FALLBACK_COPY_LIMIT: u32 = 2;

/// Deck-size requirement, counting non-hero cards only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeRule {
    /// At least this many cards, no maximum.
    AtLeast(u32),
    /// Exactly this many cards.
    Exactly(u32),
    /// No size requirement.
    Unbounded,
}

/// Rules for one format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRule {
    pub format: Format,
    /// Maximum copies of one card.
    pub copy_limit: u32,
    pub size: SizeRule,
}

impl FormatRule {
    #[must_use]
    pub const fn new(format: Format, copy_limit: u32, size: SizeRule) -> Self {
        Self {
            format,
            copy_limit,
            size,
        }
    }
}

/// Rules table used by the legality validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRules {
    pub rules: Vec<FormatRule>,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            rules: vec![
                FormatRule::new(Format::CC, 3, SizeRule::AtLeast(60)),
                FormatRule::new(Format::Blitz, 2, SizeRule::Exactly(40)),
                FormatRule::new(Format::SilverAge, 2, SizeRule::Unbounded),
            ],
        }
    }
}

impl FormatRules {
    /// Replace (or add) the rule for one format.
    #[must_use]
    pub fn with_rule(mut self, rule: FormatRule) -> Self {
        match self.rules.iter_mut().find(|r| r.format == rule.format) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }

    /// Rule for a format, falling back to the default copy limit with no
    /// size requirement.
    #[must_use]
    pub fn rule(&self, format: Format) -> FormatRule {
        self.rules
            .iter()
            .find(|r| r.format == format)
            .copied()
            .unwrap_or(FormatRule::new(format, FALLBACK_COPY_LIMIT, SizeRule::Unbounded))
    }

    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RulesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = FormatRules::default();
        assert_eq!(rules.rule(Format::CC).copy_limit, 3);
        assert_eq!(rules.rule(Format::CC).size, SizeRule::AtLeast(60));
        assert_eq!(rules.rule(Format::Blitz).copy_limit, 2);
        assert_eq!(rules.rule(Format::Blitz).size, SizeRule::Exactly(40));
        assert_eq!(rules.rule(Format::SilverAge).size, SizeRule::Unbounded);
    }

    #[test]
    fn test_missing_format_falls_back() {
        let rules = FormatRules { rules: vec![] };
        let rule = rules.rule(Format::CC);
        assert_eq!(rule.copy_limit, FALLBACK_COPY_LIMIT);
        assert_eq!(rule.size, SizeRule::Unbounded);
    }

    #[test]
    fn test_with_rule_replaces() {
        let rules = FormatRules::default()
            .with_rule(FormatRule::new(Format::SilverAge, 1, SizeRule::Exactly(55)));
        assert_eq!(rules.rules.len(), 3);
        assert_eq!(rules.rule(Format::SilverAge).copy_limit, 1);
        assert_eq!(rules.rule(Format::SilverAge).size, SizeRule::Exactly(55));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{ "rules": [
            { "format": "CC", "copy_limit": 4, "size": { "at_least": 80 } },
            { "format": "Silver Age", "copy_limit": 2, "size": "unbounded" }
        ] }"#;
        let rules = FormatRules::from_json_str(json).unwrap();
        assert_eq!(rules.rule(Format::CC).copy_limit, 4);
        assert_eq!(rules.rule(Format::CC).size, SizeRule::AtLeast(80));
        // Blitz not listed
        assert_eq!(rules.rule(Format::Blitz).size, SizeRule::Unbounded);
    }

    #[test]
    fn test_serialization() {
        let rules = FormatRules::default();
        let json = serde_json::to_string(&rules).unwrap();
        let back = FormatRules::from_json_str(&json).unwrap();
        assert_eq!(rules, back);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            FormatRules::from_json_str("[]"),
            Err(RulesError::Parse(_))
        ));
    }
}
