use super::*;

#[test]
fn tooltip_spaces_word_units_only() {
    assert_eq!(point_tooltip("Jan", 210.0, "units"), "Jan: 210 units");
    assert_eq!(point_tooltip("Mailers", 28.0, "k units"), "Mailers: 28 k units");
    assert_eq!(point_tooltip("Food Packaging", 85.0, "%"), "Food Packaging: 85%");
    assert_eq!(point_tooltip("Feb", 12.5, ""), "Feb: 12.5");
}

#[test]
fn series_max_scans_every_series() {
    let series = vec![
        Series { name: "Actual", values: vec![180.0, 195.0], tone: Tone::Primary },
        Series { name: "Predicted", values: vec![175.0, 210.0], tone: Tone::Secondary },
    ];
    assert!((series_max(&series) - 210.0).abs() < 1e-9);
    assert!(series_max(&[]).abs() < 1e-9);
}

#[test]
fn view_box_uses_one_decimal() {
    assert_eq!(view_box(CHART_WIDTH, 300.0), "0 0 600.0 300.0");
    assert_eq!(coord(12.345), "12.3");
}
