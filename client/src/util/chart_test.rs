use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// =============================================================
// Axis
// =============================================================

#[test]
fn nice_max_rounds_up_to_readable_values() {
    assert!(close(nice_max(280.0), 300.0));
    assert!(close(nice_max(45.0), 50.0));
    assert!(close(nice_max(720.0), 800.0));
    assert!(close(nice_max(100.0), 100.0));
    assert!(close(nice_max(195.0), 200.0));
}

#[test]
fn nice_max_handles_degenerate_input() {
    assert!(close(nice_max(0.0), 1.0));
    assert!(close(nice_max(-5.0), 1.0));
    assert!(close(nice_max(f64::NAN), 1.0));
}

#[test]
fn ticks_span_zero_to_max() {
    assert_eq!(ticks(300.0, 4), vec![0.0, 75.0, 150.0, 225.0, 300.0]);
    assert_eq!(ticks(10.0, 0), vec![0.0, 10.0]);
}

#[test]
fn tick_labels_drop_trailing_zero() {
    assert_eq!(tick_label(75.0), "75");
    assert_eq!(tick_label(12.5), "12.5");
}

// =============================================================
// Plot
// =============================================================

#[test]
fn y_for_maps_zero_to_baseline_and_max_to_top() {
    let plot = Plot::new(600.0, 300.0);
    assert!(close(plot.y_for(0.0, 300.0), plot.baseline()));
    assert!(close(plot.y_for(300.0, 300.0), plot.top));
    assert!(close(plot.y_for(600.0, 300.0), plot.top));
    assert!(close(plot.y_for(5.0, 0.0), plot.baseline()));
}

#[test]
fn bands_tile_the_inner_width() {
    let plot = Plot::new(600.0, 300.0);
    let (start0, band) = plot.x_band(0, 6);
    let (start5, _) = plot.x_band(5, 6);
    assert!(close(start0, plot.left));
    assert!(close(start5 + band, plot.left + plot.inner_width()));
    assert!(close(plot.x_center(0, 6), plot.left + band / 2.0));
}

#[test]
fn inner_size_never_negative() {
    let plot = Plot::new(10.0, 10.0);
    assert!(close(plot.inner_width(), 0.0));
    assert!(close(plot.inner_height(), 0.0));
}

// =============================================================
// Paths
// =============================================================

#[test]
fn line_path_moves_then_draws() {
    assert_eq!(line_path(&[(0.0, 10.0), (5.0, 2.5)]), "M0.0,10.0 L5.0,2.5");
    assert_eq!(line_path(&[]), "");
}

#[test]
fn area_path_closes_on_baseline() {
    let path = area_path(&[(0.0, 10.0), (5.0, 2.5)], 20.0);
    assert_eq!(path, "M0.0,10.0 L5.0,2.5 L5.0,20.0 L0.0,20.0 Z");
    assert_eq!(area_path(&[], 20.0), "");
}

#[test]
fn series_points_are_deterministic() {
    let plot = Plot::new(600.0, 300.0);
    let values = [210.0, 225.0, 240.0];
    assert_eq!(series_points(&plot, &values, 300.0), series_points(&plot, &values, 300.0));
}

// =============================================================
// Bars
// =============================================================

#[test]
fn column_bars_stand_on_baseline_with_band_padding() {
    let plot = Plot::new(440.0, 250.0);
    let bars = column_bars(&plot, &[45.0, 0.0], 50.0);
    assert_eq!(bars.len(), 2);
    assert!(close(bars[0].y + bars[0].height, plot.baseline()));
    assert!(close(bars[1].height, 0.0));
    let (_, band) = plot.x_band(0, 2);
    assert!(close(bars[0].width, band * (1.0 - BAR_BAND_PADDING)));
}

#[test]
fn row_bars_scale_with_value() {
    let plot = Plot::new(600.0, 250.0).with_left(120.0);
    let bars = row_bars(&plot, &[50.0, 100.0], 100.0);
    assert!(close(bars[0].x, 120.0));
    assert!(close(bars[1].width, plot.inner_width()));
    assert!(close(bars[0].width * 2.0, bars[1].width));
    assert!(bars[0].y < bars[1].y);
}

#[test]
fn row_center_splits_height_evenly() {
    let plot = Plot::new(600.0, 248.0);
    let first = row_center(&plot, 0, 4);
    let second = row_center(&plot, 1, 4);
    assert!(close(second - first, plot.inner_height() / 4.0));
}

// =============================================================
// Pie
// =============================================================

#[test]
fn pie_slices_cover_the_full_circle() {
    let slices = pie_slices(&[65.0, 25.0, 10.0], 100.0, 100.0, 80.0);
    assert_eq!(slices.len(), 3);
    assert!(close(slices[0].start, 0.0));
    assert!(close(slices[2].end, TAU));
    assert!(close(slices[0].fraction, 0.65));
    for pair in slices.windows(2) {
        assert!(close(pair[0].end, pair[1].start));
    }
}

#[test]
fn large_slice_uses_large_arc_flag() {
    let slices = pie_slices(&[65.0, 35.0], 100.0, 100.0, 80.0);
    assert!(slices[0].path.contains(" 0 1,1 "));
    assert!(slices[1].path.contains(" 0 0,1 "));
}

#[test]
fn single_value_draws_full_circle() {
    let slices = pie_slices(&[42.0], 50.0, 50.0, 40.0);
    assert_eq!(slices.len(), 1);
    assert!(slices[0].path.starts_with("M50.0,10.0 A"));
}

#[test]
fn empty_total_yields_no_slices() {
    assert!(pie_slices(&[], 0.0, 0.0, 10.0).is_empty());
    assert!(pie_slices(&[0.0, 0.0], 0.0, 0.0, 10.0).is_empty());
}
