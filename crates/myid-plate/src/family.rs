//! # Plate Prefix Families
//!
//! Every structurally valid plate is checked against an ordered rule table.
//! The first rule whose prefix matcher accepts the normalized prefix decides
//! the number range and the suffix policy.
//!
//! ## Built-in Table
//!
//! | Family        | Prefix                         | Numbers | Suffix                  |
//! |---------------|--------------------------------|---------|-------------------------|
//! | Special       | `A1M`                          | 1–1000  | none                    |
//! | Special       | `G1M`                          | 1–9999  | none                    |
//! | Special       | `K1M`                          | 1–100   | none                    |
//! | Special       | `T1M`                          | 1–1000  | none                    |
//! | Special       | `1M4U`                         | 1–9999  | none                    |
//! | Vanity        | `PERFECT`                      | 1–100   | none                    |
//! | Vanity        | `UP`                           | 1–999   | none                    |
//! | State series  | state letter + 0–2 series letters | 1–9999 | one series letter, optional |
//! | Generic       | any other letters              | 1–9999  | none                    |
//!
//! State letters are `A B C D F H J K L M N P Q R S T V W`. Series letters
//! are `A`–`Y` without `I` and `O`, which are never issued because they read
//! as digits.
//!
//! Prefixes with no documented range fall back to the generic family.

use std::str::FromStr;
use std::sync::LazyLock;

use myid_core::FormatError;
use serde::{Deserialize, Serialize};

/// Letters that open a state registration series.
const STATE_LETTERS: &str = "ABCDFHJKLMNPQRSTVW";

/// Highest number a four-digit plate can carry.
pub const MAX_PLATE_NUMBER: u16 = 9999;

static BUILTIN_RULES: LazyLock<PlateRuleTable> = LazyLock::new(|| {
    PlateRuleTable::new(vec![
        PlateRule::exact(PlateFamily::Special, "A1M", 1, 1000),
        PlateRule::exact(PlateFamily::Special, "G1M", 1, MAX_PLATE_NUMBER),
        PlateRule::exact(PlateFamily::Special, "K1M", 1, 100),
        PlateRule::exact(PlateFamily::Special, "T1M", 1, 1000),
        PlateRule::exact(PlateFamily::Special, "1M4U", 1, MAX_PLATE_NUMBER),
        PlateRule::exact(PlateFamily::Vanity, "PERFECT", 1, 100),
        PlateRule::exact(PlateFamily::Vanity, "UP", 1, 999),
        PlateRule {
            family: PlateFamily::StateSeries,
            prefix: PrefixMatch::StateSeries,
            min_number: 1,
            max_number: MAX_PLATE_NUMBER,
            suffix: SuffixRule::SeriesLetter,
        },
        PlateRule {
            family: PlateFamily::Generic,
            prefix: PrefixMatch::AnyLetters,
            min_number: 1,
            max_number: MAX_PLATE_NUMBER,
            suffix: SuffixRule::None,
        },
    ])
});

/// Grouping of prefixes that share a number range and suffix policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateFamily {
    /// Commemorative tokens containing digits (`A1M`, `1M4U`, ...).
    Special,
    /// Vanity words with their own range (`PERFECT`, `UP`).
    Vanity,
    /// Ordinary state registration series (`W`, `WA`, `WXG`, ...).
    StateSeries,
    /// Any other letter prefix.
    Generic,
}

impl PlateFamily {
    pub fn all() -> &'static [PlateFamily] {
        &[Self::Special, Self::Vanity, Self::StateSeries, Self::Generic]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Special => "special",
            Self::Vanity => "vanity",
            Self::StateSeries => "state_series",
            Self::Generic => "generic",
        }
    }
}

impl std::fmt::Display for PlateFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlateFamily {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "special" => Ok(Self::Special),
            "vanity" => Ok(Self::Vanity),
            "state_series" => Ok(Self::StateSeries),
            "generic" => Ok(Self::Generic),
            other => Err(FormatError::UnknownPlateFamily(other.to_string())),
        }
    }
}

/// How a rule selects prefixes. Matching is against the uppercased prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrefixMatch {
    /// Exactly this prefix.
    Exact(String),
    /// A state letter followed by up to two series letters.
    StateSeries,
    /// Any non-empty run of ASCII letters.
    AnyLetters,
}

impl PrefixMatch {
    pub fn matches(&self, prefix: &str) -> bool {
        match self {
            Self::Exact(expected) => prefix == expected,
            Self::StateSeries => {
                let mut chars = prefix.chars();
                let Some(first) = chars.next() else {
                    return false;
                };
                prefix.len() <= 3 && STATE_LETTERS.contains(first) && chars.all(is_series_letter)
            }
            Self::AnyLetters => {
                !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphabetic())
            }
        }
    }
}

/// Which suffixes a family issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixRule {
    /// No suffix.
    None,
    /// Either no suffix or a single series letter.
    SeriesLetter,
}

impl SuffixRule {
    pub fn allows(&self, suffix: Option<&str>) -> bool {
        match (self, suffix) {
            (_, None) => true,
            (Self::None, Some(_)) => false,
            (Self::SeriesLetter, Some(s)) => {
                let mut chars = s.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if is_series_letter(c))
            }
        }
    }
}

/// Number range and suffix policy for one group of prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlateRule {
    pub family: PlateFamily,
    pub prefix: PrefixMatch,
    pub min_number: u16,
    pub max_number: u16,
    pub suffix: SuffixRule,
}

impl PlateRule {
    /// A rule for one literal prefix that takes no suffix.
    pub fn exact(family: PlateFamily, prefix: &str, min_number: u16, max_number: u16) -> Self {
        Self {
            family,
            prefix: PrefixMatch::Exact(prefix.to_string()),
            min_number,
            max_number,
            suffix: SuffixRule::None,
        }
    }

    /// Check a normalized plate against this rule.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::NumberOutOfRange`] or
    /// [`FormatError::SuffixNotAllowed`].
    pub fn check(&self, prefix: &str, number: u16, suffix: Option<&str>) -> Result<(), FormatError> {
        if !(self.min_number..=self.max_number).contains(&number) {
            return Err(FormatError::NumberOutOfRange {
                prefix: prefix.to_string(),
                number,
                min: self.min_number,
                max: self.max_number,
            });
        }
        if !self.suffix.allows(suffix) {
            return Err(FormatError::SuffixNotAllowed {
                prefix: prefix.to_string(),
                suffix: suffix.unwrap_or_default().to_string(),
            });
        }
        Ok(())
    }
}

/// Ordered list of plate rules. The first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateRuleTable {
    rules: Vec<PlateRule>,
}

impl PlateRuleTable {
    pub fn new(rules: Vec<PlateRule>) -> Self {
        Self { rules }
    }

    /// The built-in Malaysian table described in the module docs.
    pub fn builtin() -> &'static PlateRuleTable {
        &BUILTIN_RULES
    }

    pub fn rules(&self) -> &[PlateRule] {
        &self.rules
    }

    /// First rule whose prefix matcher accepts `prefix`.
    pub fn lookup(&self, prefix: &str) -> Option<&PlateRule> {
        self.rules.iter().find(|rule| rule.prefix.matches(prefix))
    }
}

impl Default for PlateRuleTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn is_series_letter(c: char) -> bool {
    c.is_ascii_uppercase() && !matches!(c, 'I' | 'O' | 'Z')
}
