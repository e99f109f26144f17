//! Tests for the category registry and level mask.

use tilelog::category::{ALL, bit_for_index};
use tilelog::{Categories, DEFAULT_CATEGORIES, Error, LevelMask};

#[test]
fn bit_zero_is_never_assigned() {
    let categories = Categories::new(["event", "ipc"]).unwrap();
    assert_eq!(categories.bit("event"), Some(0b10));
    assert_eq!(categories.bit("ipc"), Some(0b100));
}

#[test]
fn lookup_is_case_insensitive() {
    let categories = Categories::new(["A", "B", "C"]).unwrap();
    assert_eq!(categories.index_of("b"), Some(1));
    assert_eq!(categories.index_of("B"), Some(1));
    assert_eq!(categories.bit("c"), Some(1 << 3));
}

#[test]
fn first_match_wins() {
    let categories = Categories::new(["dup", "DUP"]).unwrap();
    assert_eq!(categories.index_of("Dup"), Some(0));
}

#[test]
fn unknown_name_has_no_bit() {
    let categories = Categories::new(["event"]).unwrap();
    assert_eq!(categories.bit("nope"), None);
    assert!(matches!(
        categories.resolve("nope"),
        Err(Error::UnknownCategory(name)) if name == "nope"
    ));
}

#[test]
fn all_resolves_to_every_bit() {
    let categories = Categories::new(["event"]).unwrap();
    for name in ["all", "ALL", "All"] {
        assert_eq!(categories.resolve(name).unwrap(), u64::MAX);
    }
    assert_eq!(ALL, "all");
}

#[test]
fn sixty_three_categories_fit() {
    let names: Vec<String> = (0..63).map(|i| format!("cat{i}")).collect();
    let categories = Categories::new(names).unwrap();
    assert_eq!(categories.len(), 63);
    assert_eq!(categories.bit("cat62"), Some(1 << 63));
}

#[test]
fn sixty_four_categories_are_rejected() {
    let names: Vec<String> = (0..64).map(|i| format!("cat{i}")).collect();
    assert!(matches!(
        Categories::new(names),
        Err(Error::TooManyCategories(64))
    ));
}

#[test]
fn default_registry_matches_constant() {
    let categories = Categories::default();
    assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
    assert!(categories.names().eq(DEFAULT_CATEGORIES.iter().copied()));
    assert!(categories.bit("workspace").is_some());
}

#[test]
fn bit_for_index_offsets_by_one() {
    assert_eq!(bit_for_index(0), 2);
    assert_eq!(bit_for_index(62), 1 << 63);
}

#[test]
fn mask_enable_is_monotonic() {
    let mut mask = LevelMask::NONE;
    mask.enable(0b100);
    mask.enable(0b10);
    mask.enable(0b100);
    assert_eq!(mask.bits(), 0b110);
    assert!(mask.admits(0b10));
    assert!(!mask.admits(0b1000));
}

#[test]
fn mask_admits_any_overlap() {
    let mask = LevelMask::from_bits(0b100);
    assert!(mask.admits(0b110));
    assert!(!mask.admits(0));
    assert!(LevelMask::ALL.admits(1));
    assert!(LevelMask::ALL.admits(1 << 63));
}

#[test]
fn mask_display_is_hex() {
    assert_eq!(LevelMask::from_bits(0b110).to_string(), "0x0000000000000006");
}
