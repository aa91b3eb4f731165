//! # Identity Number
//!
//! Grammar, anchored at the start of the input and not at the end:
//!
//! ```text
//! YY [01]M [0-3]D  -?  PB  -?  ###G
//! ```
//!
//! The month and day digits get only a coarse range check from the pattern.
//! The real check is the calendar round trip in
//! [`myid_core::temporal::parse_yymmdd`]. Anything after the twelfth digit
//! is ignored.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use myid_core::temporal::{self, Clock, SystemClock};
use myid_core::{CodecError, FormatError};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::gender::Gender;

static NRIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}[01][0-9][0-3][0-9])-?([0-9]{2})-?([0-9]{4})")
        .expect("NRIC pattern is a valid regex")
});

/// Malaysian national registration identity number.
///
/// # Invariants
///
/// - Parsing populates either all three fields or none.
/// - Valid iff the birth date and both codes are present and non-empty.
/// - Immutable after construction.
///
/// A partially populated value can only come from decoding a stored
/// mapping that was itself partial.
///
/// # Serde
///
/// Serializes as [`IdentityFields`]. Deserializing re-expands the stored
/// `YYMMDD` against [`SystemClock`], so the inferred century depends on
/// the year the value is read in. Use
/// [`IdentityNumber::from_persisted_str`] with an explicit date when that
/// matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "IdentityFields", try_from = "IdentityFields")]
pub struct IdentityNumber {
    birth_date: Option<NaiveDate>,
    place_of_birth_code: Option<String>,
    gender_serial_code: Option<String>,
}

/// Persisted form of an [`IdentityNumber`].
///
/// `birth_date` is stored as `YYMMDD`. Absent fields are stored as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IdentityFields {
    pub birth_date: Option<String>,
    pub place_of_birth_code: Option<String>,
    pub gender_serial_code: Option<String>,
}

impl IdentityNumber {
    /// Leniently parse against today's date from the system clock.
    pub fn given(input: &str) -> Self {
        Self::given_with(input, &SystemClock)
    }

    /// Leniently parse, inferring the century relative to `today`.
    pub fn given_at(input: &str, today: NaiveDate) -> Self {
        Self::parse_at(input, today).unwrap_or_default()
    }

    /// Leniently parse, reading the reference date from `clock` once.
    pub fn given_with(input: &str, clock: &impl Clock) -> Self {
        Self::given_at(input, clock.today())
    }

    /// Strictly parse, inferring the century relative to `today`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidIdentityNumber`] if the input does not
    /// match the grammar, and [`FormatError::InvalidBirthDate`] if the six
    /// date digits are not a real calendar date.
    pub fn parse_at(input: &str, today: NaiveDate) -> Result<Self, FormatError> {
        let captures = NRIC_PATTERN
            .captures(input)
            .ok_or_else(|| FormatError::InvalidIdentityNumber(input.to_string()))?;

        let digits = &captures[1];
        let Some(birth_date) = temporal::parse_yymmdd(digits, today) else {
            tracing::debug!(digits, "identity number birth date failed calendar validation");
            return Err(FormatError::InvalidBirthDate {
                input: input.to_string(),
                digits: digits.to_string(),
            });
        };

        Ok(Self {
            birth_date: Some(birth_date),
            place_of_birth_code: Some(captures[2].to_string()),
            gender_serial_code: Some(captures[3].to_string()),
        })
    }

    /// Strictly parse, reading the reference date from `clock` once.
    ///
    /// # Errors
    ///
    /// Same as [`IdentityNumber::parse_at`].
    pub fn parse_with(input: &str, clock: &impl Clock) -> Result<Self, FormatError> {
        Self::parse_at(input, clock.today())
    }

    pub fn is_valid(&self) -> bool {
        self.birth_date.is_some()
            && self.place_of_birth_code.as_deref().is_some_and(|c| !c.is_empty())
            && self.gender_serial_code.as_deref().is_some_and(|c| !c.is_empty())
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn place_of_birth_code(&self) -> Option<&str> {
        self.place_of_birth_code.as_deref()
    }

    pub fn gender_serial_code(&self) -> Option<&str> {
        self.gender_serial_code.as_deref()
    }

    /// Gender implied by the last digit of the gender/serial code.
    pub fn gender(&self) -> Option<Gender> {
        self.gender_serial_code.as_deref().and_then(Gender::from_serial_code)
    }

    /// `[YYMMDD, place-of-birth code, gender/serial code]`, or empty when
    /// invalid.
    pub fn to_fields(&self) -> Vec<String> {
        match (&self.birth_date, &self.place_of_birth_code, &self.gender_serial_code) {
            (Some(date), Some(place), Some(serial)) if self.is_valid() => vec![
                temporal::format_yymmdd(*date),
                place.clone(),
                serial.clone(),
            ],
            _ => Vec::new(),
        }
    }

    /// Join the segments with `separator`. Empty when invalid.
    pub fn format(&self, separator: &str) -> String {
        self.to_fields().join(separator)
    }

    /// Unseparated form, e.g. `810102081110`.
    pub fn to_canonical_string(&self) -> String {
        self.format("")
    }

    /// Dash-separated form, e.g. `810102-08-1110`.
    pub fn to_display_string(&self) -> String {
        self.format("-")
    }

    pub fn to_persisted_fields(&self) -> IdentityFields {
        IdentityFields {
            birth_date: self.birth_date.map(temporal::format_yymmdd),
            place_of_birth_code: self.place_of_birth_code.clone(),
            gender_serial_code: self.gender_serial_code.clone(),
        }
    }

    /// Rebuild from a stored mapping.
    ///
    /// The stored `YYMMDD` is trusted apart from being a real date; its
    /// century is inferred against `today` with the same rule parsing uses.
    /// The codes are copied verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidField`] if `birthDate` is present but is
    /// not a real `YYMMDD` date.
    pub fn from_persisted_fields(
        fields: IdentityFields,
        today: NaiveDate,
    ) -> Result<Self, CodecError> {
        let birth_date = fields
            .birth_date
            .as_deref()
            .map(|digits| {
                temporal::parse_yymmdd(digits, today).ok_or_else(|| CodecError::InvalidField {
                    field: "birthDate",
                    reason: format!("{digits:?} is not a YYMMDD calendar date"),
                })
            })
            .transpose()?;

        let decoded = Self {
            birth_date,
            place_of_birth_code: fields.place_of_birth_code,
            gender_serial_code: fields.gender_serial_code,
        };

        let populated = [
            decoded.birth_date.is_some(),
            decoded.place_of_birth_code.is_some(),
            decoded.gender_serial_code.is_some(),
        ];
        if populated.iter().any(|p| *p) && !decoded.is_valid() {
            tracing::warn!(
                fields = ?decoded.to_persisted_fields(),
                "decoded a partially populated identity number"
            );
        }

        Ok(decoded)
    }

    /// Encode through the canonical field-mapping codec.
    ///
    /// # Errors
    ///
    /// Propagates [`CodecError`] from [`myid_core::encode_fields`].
    pub fn to_persisted_string(&self) -> Result<String, CodecError> {
        myid_core::encode_fields(&self.to_persisted_fields())
    }

    /// Decode a string produced by [`IdentityNumber::to_persisted_string`].
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] for malformed mappings and impossible dates.
    pub fn from_persisted_str(encoded: &str, today: NaiveDate) -> Result<Self, CodecError> {
        let fields: IdentityFields = myid_core::decode_fields(encoded)?;
        Self::from_persisted_fields(fields, today)
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl FromStr for IdentityNumber {
    type Err = FormatError;

    /// Strict parse against the system clock.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &SystemClock)
    }
}

impl From<IdentityNumber> for IdentityFields {
    fn from(nric: IdentityNumber) -> Self {
        nric.to_persisted_fields()
    }
}

impl TryFrom<IdentityFields> for IdentityNumber {
    type Error = CodecError;

    /// Decode against the system clock. See the serde notes on
    /// [`IdentityNumber`].
    fn try_from(fields: IdentityFields) -> Result<Self, Self::Error> {
        Self::from_persisted_fields(fields, SystemClock.today())
    }
}
