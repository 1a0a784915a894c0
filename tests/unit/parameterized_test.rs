//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use pcshop::core::models::{Category, Money};
use pcshop::core::services::compatible;
use test_case::test_case;

use crate::common::fixture_catalog;

// =============================================================================
// Money Parsing Tests
// =============================================================================

#[test_case("1000", 100_000 ; "whole dollars")]
#[test_case("999.99", 99_999 ; "two decimals")]
#[test_case("12.5", 1_250 ; "one decimal")]
#[test_case("$40", 4_000 ; "dollar sign")]
#[test_case("-5", -500 ; "negative")]
#[test_case("-$5.25", -525 ; "negative with sign")]
#[test_case("  7 ", 700 ; "surrounding whitespace")]
fn test_money_parse(input: &str, cents: i64) {
    assert_eq!(input.parse::<Money>().unwrap(), Money::from_cents(cents));
}

#[test_case("" ; "empty")]
#[test_case("abc" ; "letters")]
#[test_case("1.234" ; "three decimals")]
#[test_case("1,000" ; "thousands separator")]
#[test_case("$" ; "bare sign")]
fn test_money_parse_rejects(input: &str) {
    assert!(input.parse::<Money>().is_err());
}

#[test_case(0, "$0.00" ; "zero")]
#[test_case(150_050, "$1500.50" ; "dollars and cents")]
#[test_case(-500, "-$5.00" ; "negative")]
#[test_case(7, "$0.07" ; "cents only")]
fn test_money_display(cents: i64, expected: &str) {
    assert_eq!(Money::from_cents(cents).to_string(), expected);
}

// =============================================================================
// Category Tests
// =============================================================================

#[test_case("CPU", Some(Category::Cpu) ; "cpu")]
#[test_case("Motherboard", Some(Category::Motherboard) ; "motherboard")]
#[test_case("Storage", Some(Category::Storage) ; "storage")]
#[test_case("Case", None ; "unknown")]
#[test_case("gpu", None ; "wrong case")]
fn test_category_parse(input: &str, expected: Option<Category>) {
    assert_eq!(input.parse::<Category>().ok(), expected);
}

// =============================================================================
// Pairwise Compatibility Tests
// =============================================================================

#[test_case("MB_01", "CPU_01", true ; "matching socket")]
#[test_case("CPU_01", "MB_01", true ; "matching socket reversed")]
#[test_case("MB_01", "CPU_02", false ; "socket mismatch")]
#[test_case("CPU_02", "MB_01", false ; "socket mismatch reversed")]
#[test_case("MB_02", "CPU_02", true ; "intel pair")]
#[test_case("RAM_01", "RAM_01", true ; "same ram")]
#[test_case("RAM_01", "RAM_02", false ; "different ram")]
#[test_case("GPU_02", "PSU_02", true ; "power is not pairwise")]
#[test_case("MB_01", "MB_02", true ; "two motherboards")]
#[test_case("STORAGE_01", "CPU_02", true ; "unrelated categories")]
fn test_pair_compatibility(first: &str, second: &str, expected: bool) {
    let catalog = fixture_catalog();
    let a = catalog.get(first).unwrap();
    let b = catalog.get(second).unwrap();
    assert_eq!(compatible(a, b), expected);
}
