//! Major.Minor Tests

use rstest::rstest;
use version::{UNSPECIFIED_MINOR, parse_major_minor};

#[rstest]
#[case("2.7", 2, 7)]
#[case("2", 2, UNSPECIFIED_MINOR)]
#[case("0.0", 0, 0)]
#[case("10.42", 10, 42)]
#[case("007.08", 7, 8)]
#[case("+2", 2, UNSPECIFIED_MINOR)]
#[case("2.+7", 2, 7)]
fn test_parse(#[case] input: &str, #[case] major: i32, #[case] minor: i32) {
    assert_eq!(parse_major_minor(input).unwrap(), (major, minor));
}

#[rstest]
#[case("")]
#[case(".")]
#[case("2.")]
#[case(".7")]
#[case("2.7.1")]
#[case("a.b.c")]
#[case("...")]
#[case("x")]
#[case("2.x")]
#[case("-2.7")]
#[case("2.-7")]
#[case("+-2")]
#[case("2.+")]
#[case(" 2.7")]
#[case("3000000000.1")]
fn test_parse_rejects(#[case] input: &str) {
    let err = parse_major_minor(input).unwrap_err();
    assert_eq!(err.input(), input);
}

#[test]
fn test_three_segments_always_rejected() {
    let err = parse_major_minor("2.7.1").unwrap_err();
    assert_eq!(err.to_string(), r#"invalid major.minor version number "2.7.1""#);
}
