use super::*;

#[test]
fn thousands_separators() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(890), "890");
    assert_eq!(format_thousands(1_000), "1,000");
    assert_eq!(format_thousands(10_000), "10,000");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
}

#[test]
fn currency_matches_order_cards() {
    assert_eq!(format_currency(2_450), "$2,450");
    assert_eq!(format_currency(890), "$890");
}

#[test]
fn compact_currency_uses_one_decimal_k() {
    assert_eq!(format_compact_currency(8_415), "$8.4k");
    assert_eq!(format_compact_currency(3_000), "$3k");
    assert_eq!(format_compact_currency(999), "$999");
}

#[test]
fn compact_currency_rounds_tenths_half_up() {
    assert_eq!(format_compact_currency(1_950), "$2k");
    assert_eq!(format_compact_currency(1_949), "$1.9k");
    assert_eq!(format_compact_currency(1_050), "$1.1k");
    assert_eq!(format_compact_currency(999_949), "$999.9k");
    assert_eq!(format_compact_currency(999_960), "$1,000k");
}

#[test]
fn quantity_distance_rating_and_percent() {
    assert_eq!(format_quantity(10_000, "meters"), "10,000 meters");
    assert_eq!(format_distance(12), "12 miles");
    assert_eq!(format_rating(4.8), "4.8");
    assert_eq!(format_rating(5.0), "5.0");
    assert_eq!(format_percent(93), "93%");
}
