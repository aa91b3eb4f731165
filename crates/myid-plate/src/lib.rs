//! # myid-plate: Malaysian Vehicle Plate Numbers
//!
//! [`PlateNumber`] parses plates such as `WA 605 S`, `RIMAU 1437`, or
//! `A1M 1000` into a prefix, a number, and an optional suffix.
//!
//! Parsing runs in two stages:
//!
//! 1. **Grammar.** A letter prefix or one of the fixed tokens `A1M`, `G1M`,
//!    `K1M`, `T1M`, `1M4U`; then 1–4 digits; then an optional 1–2 letter
//!    suffix. Single whitespace separators are allowed between parts.
//! 2. **Family rules.** The normalized prefix selects a [`PlateRule`] from a
//!    [`PlateRuleTable`], which bounds the number and decides which suffixes
//!    are issued. See [`family`] for the built-in table.
//!
//! A plate that fails either stage is invalid as a whole: lenient
//! constructors return a value with every field unset, strict constructors
//! return a [`myid_core::FormatError`].

pub mod family;
mod plate;

pub use family::{PlateFamily, PlateRule, PlateRuleTable, PrefixMatch, SuffixRule};
pub use plate::{PlateFields, PlateNumber};
