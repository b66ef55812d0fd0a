use super::*;

#[test]
fn format_amount_trims_trailing_zeros() {
    assert_eq!(format_amount(10.0), "10");
    assert_eq!(format_amount(2.5), "2.5");
    assert_eq!(format_amount(0.123_456), "0.1235");
    assert_eq!(format_amount(0.0), "0");
    assert_eq!(format_amount(-0.0), "0");
}

#[test]
fn format_slw_appends_ticker() {
    assert_eq!(format_slw(5.0), "5 SLW");
    assert_eq!(format_slw(1.25), "1.25 SLW");
}

#[test]
fn parse_positive_amount_accepts_only_positive_finite() {
    assert_eq!(parse_positive_amount(" 3.5 "), Some(3.5));
    assert_eq!(parse_positive_amount("0"), None);
    assert_eq!(parse_positive_amount("-1"), None);
    assert_eq!(parse_positive_amount("abc"), None);
    assert_eq!(parse_positive_amount(""), None);
    assert_eq!(parse_positive_amount("inf"), None);
    assert_eq!(parse_positive_amount("NaN"), None);
}

#[test]
fn short_address_keeps_short_values() {
    assert_eq!(short_address("NLT1234"), "NLT1234");
}

#[test]
fn short_address_elides_middle() {
    assert_eq!(short_address("NLTabcdefghijklmnop"), "NLTabcde…mnop");
}
