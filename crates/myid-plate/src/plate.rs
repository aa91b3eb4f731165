use std::str::FromStr;
use std::sync::LazyLock;

use myid_core::{CodecError, FormatError};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::family::{PlateRuleTable, MAX_PLATE_NUMBER};

// Alternation is leftmost-first: `K1M100` tries `K` + `1` + `M` before
// falling back to the `K1M` token.
static PLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+|A1M|G1M|K1M|T1M|1M4U)\s?([0-9]{1,4})\s?([A-Za-z]{1,2})?$")
        .expect("plate pattern is a valid regex")
});

/// Malaysian vehicle plate number.
///
/// # Invariants
///
/// - Prefix and suffix are uppercase.
/// - Valid iff prefix and number are present. The suffix is optional.
/// - A plate rejected by the grammar or by its family rule has every field
///   unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "PlateFields", try_from = "PlateFields")]
pub struct PlateNumber {
    prefix: Option<String>,
    number: Option<u16>,
    suffix: Option<String>,
}

/// Persisted form of a [`PlateNumber`].
///
/// `number` is an integer. An absent suffix is `null`, never `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlateFields {
    pub prefix: Option<String>,
    pub number: Option<u16>,
    pub suffix: Option<String>,
}

impl PlateNumber {
    /// Leniently parse against the built-in rule table.
    pub fn given(input: &str) -> Self {
        Self::given_with_rules(input, PlateRuleTable::builtin())
    }

    /// Leniently parse against a caller-supplied rule table.
    pub fn given_with_rules(input: &str, rules: &PlateRuleTable) -> Self {
        Self::parse_with_rules(input, rules).unwrap_or_default()
    }

    /// Strictly parse against the built-in rule table.
    ///
    /// # Errors
    ///
    /// See [`PlateNumber::parse_with_rules`].
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        Self::parse_with_rules(input, PlateRuleTable::builtin())
    }

    /// Strictly parse against a caller-supplied rule table.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidPlateNumber`] if the input does not
    /// match the grammar or no rule covers its prefix, and
    /// [`FormatError::NumberOutOfRange`] / [`FormatError::SuffixNotAllowed`]
    /// if the matching rule rejects it.
    pub fn parse_with_rules(input: &str, rules: &PlateRuleTable) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidPlateNumber(input.to_string());

        let captures = PLATE_PATTERN.captures(input).ok_or_else(invalid)?;
        let prefix = captures[1].to_ascii_uppercase();
        let number: u16 = captures[2].parse().map_err(|_| invalid())?;
        let suffix = captures.get(3).map(|m| m.as_str().to_ascii_uppercase());

        let rule = rules.lookup(&prefix).ok_or_else(invalid)?;
        if let Err(err) = rule.check(&prefix, number, suffix.as_deref()) {
            tracing::debug!(
                prefix = %prefix,
                number,
                family = %rule.family,
                "plate number rejected by family rule"
            );
            return Err(err);
        }

        Ok(Self {
            prefix: Some(prefix),
            number: Some(number),
            suffix,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.prefix.is_some() && self.number.is_some()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn number(&self) -> Option<u16> {
        self.number
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// `[prefix, number, suffix]`, with the suffix slot omitted when the
    /// suffix is absent or empty. Empty when invalid.
    pub fn to_fields(&self) -> Vec<String> {
        let (Some(prefix), Some(number)) = (&self.prefix, self.number) else {
            return Vec::new();
        };
        let mut fields = vec![prefix.clone(), number.to_string()];
        if let Some(suffix) = self.suffix.as_deref().filter(|s| !s.is_empty()) {
            fields.push(suffix.to_string());
        }
        fields
    }

    /// Join the parts with `separator`. Empty when invalid.
    pub fn format(&self, separator: &str) -> String {
        self.to_fields().join(separator)
    }

    /// Unseparated form, e.g. `WA605S`.
    pub fn to_canonical_string(&self) -> String {
        self.format("")
    }

    /// Space-separated form, e.g. `WA 605 S`.
    pub fn to_display_string(&self) -> String {
        self.format(" ")
    }

    pub fn to_persisted_fields(&self) -> PlateFields {
        PlateFields {
            prefix: self.prefix.clone(),
            number: self.number,
            suffix: self.suffix.clone(),
        }
    }

    /// Rebuild from a stored mapping, copying fields verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidField`] if `number` has more than four
    /// digits.
    pub fn from_persisted_fields(fields: PlateFields) -> Result<Self, CodecError> {
        if let Some(number) = fields.number.filter(|n| *n > MAX_PLATE_NUMBER) {
            return Err(CodecError::InvalidField {
                field: "number",
                reason: format!("{number} has more than four digits"),
            });
        }

        if fields.prefix.is_some() != fields.number.is_some() {
            tracing::warn!(?fields, "decoded a partially populated plate number");
        }

        Ok(Self {
            prefix: fields.prefix,
            number: fields.number,
            suffix: fields.suffix,
        })
    }

    /// Encode through the canonical field-mapping codec.
    ///
    /// # Errors
    ///
    /// Propagates [`CodecError`] from [`myid_core::encode_fields`].
    pub fn to_persisted_string(&self) -> Result<String, CodecError> {
        myid_core::encode_fields(&self.to_persisted_fields())
    }

    /// Decode a string produced by [`PlateNumber::to_persisted_string`].
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] for malformed mappings.
    pub fn from_persisted_str(encoded: &str) -> Result<Self, CodecError> {
        Self::from_persisted_fields(myid_core::decode_fields(encoded)?)
    }
}

impl std::fmt::Display for PlateNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl FromStr for PlateNumber {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<PlateNumber> for PlateFields {
    fn from(plate: PlateNumber) -> Self {
        plate.to_persisted_fields()
    }
}

impl TryFrom<PlateFields> for PlateNumber {
    type Error = CodecError;

    fn try_from(fields: PlateFields) -> Result<Self, Self::Error> {
        Self::from_persisted_fields(fields)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Canonical and display strings of a valid plate re-parse to the
        /// same value.
        #[test]
        fn format_then_parse_is_identity(input in "[A-Za-z]{1,6} ?[1-9][0-9]{0,3} ?[A-Za-z]{0,1}") {
            let plate = PlateNumber::given(&input);
            if plate.is_valid() {
                prop_assert_eq!(PlateNumber::parse(&plate.to_canonical_string()), Ok(plate.clone()));
                prop_assert_eq!(PlateNumber::parse(&plate.to_display_string()), Ok(plate));
            }
        }

        /// Lenient parsing never panics and an invalid plate has no fields.
        #[test]
        fn lenient_invalid_is_empty(input in "[A-Za-z0-9 ]{0,12}") {
            let plate = PlateNumber::given(&input);
            if !plate.is_valid() {
                prop_assert_eq!(plate, PlateNumber::default());
            }
        }
    }
}
