//! # Plate Number Behaviour Tests
//!
//! Accepted and rejected plates per prefix family, formatting, and the
//! persisted field mapping.

use myid_core::FormatError;
use myid_plate::{PlateFamily, PlateFields, PlateNumber, PlateRuleTable};

// ---------------------------------------------------------------------------
// Family table
// ---------------------------------------------------------------------------

#[test]
fn accepted_plates() {
    for (input, prefix, number, suffix) in [
        ("RIMAU1437", "RIMAU", 1437, None),
        ("WA605S", "WA", 605, Some("S")),
        ("WXG 8888", "WXG", 8888, None),
        ("BAMBEE 1", "BAMBEE", 1, None),
        ("PUTRAJAYA1", "PUTRAJAYA", 1, None),
        ("PROTON 1", "PROTON", 1, None),
        ("PERFECT 100", "PERFECT", 100, None),
        ("U 1", "U", 1, None),
        ("UP 999", "UP", 999, None),
        ("A1M1000", "A1M", 1000, None),
        ("G1M1", "G1M", 1, None),
        ("K1M100", "K1M", 100, None),
        ("T1M1000", "T1M", 1000, None),
        ("1M4U1", "1M4U", 1, None),
    ] {
        let plate = PlateNumber::given(input);
        assert!(plate.is_valid(), "{input:?} should be valid");
        assert_eq!(plate.prefix(), Some(prefix), "{input:?}");
        assert_eq!(plate.number(), Some(number), "{input:?}");
        assert_eq!(plate.suffix(), suffix, "{input:?}");
    }
}

#[test]
fn rejected_plates() {
    for input in [
        "R1MAU1437",
        "A1M1001",
        "K1M101",
        "T1M1001",
        "UP1000",
        "PERFECT101",
        "G1000G",
        "PROTON1A",
        "WA0",
        "WA 605 SS",
    ] {
        let plate = PlateNumber::given(input);
        assert!(!plate.is_valid(), "{input:?} should be invalid");
        assert_eq!(plate, PlateNumber::default());
        assert!(PlateNumber::parse(input).is_err(), "{input:?}");
    }
}

#[test]
fn strict_parse_matches_lenient() {
    for input in ["RIMAU1437", "WA605S", "A1M1000"] {
        assert_eq!(PlateNumber::parse(input), Ok(PlateNumber::given(input)));
    }
    assert!(matches!(
        PlateNumber::parse("A1M1001"),
        Err(FormatError::NumberOutOfRange { min: 1, max: 1000, .. })
    ));
}

#[test]
fn builtin_family_lookup() {
    let table = PlateRuleTable::builtin();
    assert_eq!(table.lookup("WA").map(|r| r.family), Some(PlateFamily::StateSeries));
    assert_eq!(table.lookup("RIMAU").map(|r| r.family), Some(PlateFamily::Generic));
    assert_eq!(table.lookup("T1M").map(|r| r.family), Some(PlateFamily::Special));
    assert_eq!(table.lookup("PERFECT").map(|r| r.family), Some(PlateFamily::Vanity));
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn canonical_and_display_strings() {
    let plate = PlateNumber::given("RIMAU1437");
    assert_eq!(plate.to_canonical_string(), "RIMAU1437");
    assert_eq!(plate.to_display_string(), "RIMAU 1437");
    assert_eq!(plate.format("-"), "RIMAU-1437");

    let plate = PlateNumber::given("wa 605 s");
    assert_eq!(plate.to_canonical_string(), "WA605S");
    assert_eq!(plate.to_display_string(), "WA 605 S");
}

#[test]
fn formatted_output_reparses_to_equal_value() {
    for input in ["RIMAU 1437", "WA605S", "K1M 100", "1M4U 77"] {
        let plate = PlateNumber::given(input);
        assert_eq!(PlateNumber::given(&plate.to_canonical_string()), plate, "{input:?}");
        assert_eq!(PlateNumber::given(&plate.to_display_string()), plate, "{input:?}");
    }
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn persisted_mapping_roundtrip() {
    for input in ["RIMAU1437", "WA605S", "R1MAU1437"] {
        let plate = PlateNumber::given(input);
        let decoded = PlateNumber::from_persisted_str(&plate.to_persisted_string().unwrap()).unwrap();
        assert_eq!(decoded, plate, "{input:?}");
        assert_eq!(decoded.is_valid(), plate.is_valid(), "{input:?}");
    }
}

#[test]
fn persisted_fields_keep_number_as_integer() {
    let plate = PlateNumber::given("RIMAU1437");
    assert_eq!(
        plate.to_persisted_fields(),
        PlateFields {
            prefix: Some("RIMAU".to_string()),
            number: Some(1437),
            suffix: None,
        }
    );
    let json = serde_json::to_value(&plate).unwrap();
    assert_eq!(json["number"], serde_json::json!(1437));
    assert!(json["suffix"].is_null());
}
