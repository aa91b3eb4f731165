//! # myid-nric: Malaysian Identity Numbers
//!
//! [`IdentityNumber`] parses the twelve-digit national registration
//! identity number (`YYMMDD-PB-###G`) into its birth date, place-of-birth
//! code, and gender/serial code.
//!
//! ## Construction Modes
//!
//! - **Lenient** ([`IdentityNumber::given`], [`IdentityNumber::given_at`],
//!   [`IdentityNumber::given_with`]): never fails. Malformed input yields a
//!   value whose [`IdentityNumber::is_valid`] is `false` and whose accessors
//!   return `None`.
//! - **Strict** ([`IdentityNumber::parse_at`], [`IdentityNumber::parse_with`],
//!   `FromStr`): returns a [`myid_core::FormatError`] instead. A value built
//!   this way is always valid.
//!
//! The reference date used for century inference is always explicit except
//! in `given()` and `FromStr`, which read [`myid_core::SystemClock`].
//!
//! This crate checks structure and calendar validity only. It does not
//! consult any registry.

mod gender;
mod identity;

pub use gender::Gender;
pub use identity::{IdentityFields, IdentityNumber};
