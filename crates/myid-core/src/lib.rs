//! # myid-core: Shared Collaborators for Identification Value Types
//!
//! This crate holds the pieces that both value-type crates lean on. It
//! defines no identification type itself; `myid-nric` and `myid-plate`
//! depend on it and never on each other.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit reference date.** Century inference needs "today". Parsing
//!    code receives it through the [`Clock`] trait or as a plain
//!    [`chrono::NaiveDate`]; nothing inside the parsers reads the system
//!    clock on its own.
//!
//! 2. **Calendar round-trip guard.** [`temporal::try_make_date`] rejects
//!    impossible dates, and callers compare the re-formatted `YYMMDD` string
//!    against their input so a normalizing calendar could never sneak a
//!    shifted date through.
//!
//! 3. **One encoding path.** Persisted field mappings go through
//!    [`canonical::encode_fields`] (RFC 8785 JSON) and come back through
//!    [`canonical::decode_fields`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `myid-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod error;
pub mod temporal;

pub use canonical::{decode_fields, encode_fields};
pub use error::{CodecError, FormatError};
pub use temporal::{Clock, FixedClock, SystemClock};
