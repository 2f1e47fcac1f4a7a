//! Number Tests - Parsing, Rendering and Ordering
//!
//! Tests for the `major.minor[-tag]patch[.build]` grammar and the
//! release-after-pre-release ordering rule.

use rstest::rstest;
use std::cmp::Ordering;
use version::{Number, VersionError};

fn v(s: &'static str) -> Number {
    Number::literal(s)
}

// ============================================================================
// Parsing
// ============================================================================

#[rstest]
#[case("0.0.0", 0, 0, "", 0, 0)]
#[case("0.0.1", 0, 0, "", 1, 0)]
#[case("10.234.3456", 10, 234, "", 3456, 0)]
#[case("10.234.3456.1", 10, 234, "", 3456, 1)]
#[case("10.234.3456.64", 10, 234, "", 3456, 64)]
#[case("10.235.3456", 10, 235, "", 3456, 0)]
#[case("1.21-alpha1", 1, 21, "alpha", 1, 0)]
#[case("1.21-alpha1.1", 1, 21, "alpha", 1, 1)]
#[case("1.21-alpha10", 1, 21, "alpha1", 0, 0)]
#[case("1.21.0", 1, 21, "", 0, 0)]
#[case("1.2-rc_2", 1, 2, "rc_", 2, 0)]
fn test_parse_components(
    #[case] input: &str,
    #[case] major: u32,
    #[case] minor: u32,
    #[case] tag: &str,
    #[case] patch: u32,
    #[case] build: u32,
) {
    let parsed = Number::parse(input).unwrap();
    assert_eq!(parsed.major, major, "major of {input}");
    assert_eq!(parsed.minor, minor, "minor of {input}");
    assert_eq!(parsed.tag, tag, "tag of {input}");
    assert_eq!(parsed.patch, patch, "patch of {input}");
    assert_eq!(parsed.build, build, "build of {input}");
}

#[rstest]
#[case("")]
#[case("1")]
#[case("1.2")]
#[case("v1.2.3")]
#[case("1.2.3.4.5")]
#[case("1.2.3.")]
#[case(" 1.2.3")]
#[case("1.2.3 ")]
#[case("1.2.3\n")]
#[case("-1.2.3")]
#[case("1.-2.3")]
#[case("1.2-3")]
#[case("1.2-beta")]
#[case("1.2-beta-1")]
#[case("1.2.3-beta1")]
#[case("1234567890.2.3")]
#[case("1.2.3.1234567890")]
#[case("a.b.c")]
fn test_parse_rejects(#[case] input: &str) {
    let err = Number::parse(input).unwrap_err();
    assert_eq!(
        err,
        VersionError::InvalidFormat {
            kind: "version",
            input: input.to_string(),
        }
    );
}

#[test]
fn test_from_str_matches_parse() {
    let parsed: Number = "1.2-beta1.3".parse().unwrap();
    assert_eq!(parsed, Number::tagged(1, 2, "beta", 1).with_build(3));
}

#[test]
#[should_panic(expected = r#"invalid version "1.2""#)]
fn test_literal_panics() {
    v("1.2");
}

// ============================================================================
// Rendering
// ============================================================================

#[rstest]
#[case(Number::new(1, 2, 3), "1.2.3")]
#[case(Number::new(1, 2, 3).with_build(0), "1.2.3")]
#[case(Number::new(1, 2, 3).with_build(4), "1.2.3.4")]
#[case(Number::tagged(1, 2, "beta", 3), "1.2-beta3")]
#[case(Number::tagged(1, 2, "beta", 3).with_build(4), "1.2-beta3.4")]
#[case(Number::zero(), "0.0.0")]
fn test_render(#[case] number: Number, #[case] expected: &str) {
    assert_eq!(number.to_string(), expected);
}

#[rstest]
#[case(Number::zero())]
#[case(Number::new(1, 2, 3))]
#[case(Number::new(999_999_999, 999_999_999, 999_999_999).with_build(999_999_999))]
#[case(Number::tagged(2, 0, "rc", 1))]
#[case(Number::tagged(2, 0, "A_b", 9).with_build(12))]
fn test_round_trip(#[case] number: Number) {
    assert_eq!(Number::parse(&number.to_string()).unwrap(), number);
}

// ============================================================================
// Ordering
// ============================================================================

#[rstest]
#[case("1.0.0", "1.0.0", 0)]
#[case("1.0.0", "1.0.1", -1)]
#[case("1.0.0", "0.9.9", 1)]
#[case("1.2.0", "1.10.0", -1)]
#[case("1.2.0", "1.2-beta1", 1)]
#[case("1.2-beta1", "1.2.0", -1)]
#[case("1.2-alpha2", "1.2-beta1", -1)]
#[case("1.2-beta1", "1.2-beta2", -1)]
#[case("1.2-rc1", "1.2-beta9", 1)]
#[case("1.3-alpha1", "1.2.9", 1)]
#[case("1.2.3", "1.2.3.1", -1)]
#[case("1.2.3.2", "1.2.3.1", 1)]
#[case("0.0.0", "0.0.0.1", -1)]
fn test_compare(#[case] a: &'static str, #[case] b: &'static str, #[case] expected: i32) {
    assert_eq!(v(a).compare(&v(b)), expected, "compare({a}, {b})");
    assert_eq!(v(b).compare(&v(a)), -expected, "compare({b}, {a})");
}

#[test]
fn test_release_beats_prerelease() {
    assert_eq!(v("1.2.0").compare(&v("1.2-beta1")), 1);
}

#[test]
fn test_order_is_total() {
    let ordered = [
        "0.0.0", "0.0.1", "0.1.0", "1.0-alpha1", "1.0-alpha1.5", "1.0-beta1", "1.0-rc1",
        "1.0.0", "1.0.0.1", "1.0.1", "2.0-zeta0", "2.0.0",
    ]
    .map(v);

    for (i, a) in ordered.iter().enumerate() {
        for (j, b) in ordered.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{a} vs {b}");
        }
    }

    let mut shuffled = ordered.to_vec();
    shuffled.reverse();
    shuffled.swap(2, 7);
    shuffled.sort();
    assert_eq!(shuffled, ordered);
}

#[test]
fn test_equal_only_when_identical() {
    let a = Number::tagged(1, 2, "beta", 3);
    let b = a.clone().with_build(1);
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    assert_ne!(a.cmp(&b), Ordering::Equal);
}
