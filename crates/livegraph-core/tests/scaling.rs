// File: crates/livegraph-core/tests/scaling.rs
// Purpose: Viewport deltas in fixed-range and crop modes, point mapping, tick placement and margin sizing.

use livegraph_core::scale::{margin_needs_update, required_margin, CROP_SPAN_FLOOR};
use livegraph_core::{AxisTickSet, Extrema, LayoutMode, PanelSize, PixelPoint, Point, TextExtent, ViewportScaler};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn five_ticks() -> AxisTickSet {
    AxisTickSet::from_integers(vec![0, 1, 2, 3, 4])
}

fn fixed(width: u32, height: u32, margin: f64, x: &AxisTickSet, y: &AxisTickSet) -> ViewportScaler {
    ViewportScaler::compute(PanelSize::new(width, height), margin, x, y, &Extrema::EMPTY, LayoutMode::FixedRange)
}

fn cropped(width: u32, height: u32, margin: f64, points: &[(f64, f64)]) -> ViewportScaler {
    let extrema = Extrema::from_points(points.iter().map(|&p| Point::from(p)));
    let ticks = AxisTickSet::new();
    ViewportScaler::compute(PanelSize::new(width, height), margin, &ticks, &ticks, &extrema, LayoutMode::CropToData)
}

#[test]
fn fixed_range_delta_spans_tick_intervals() {
    let ticks = five_ticks();
    let s = fixed(210, 210, 10.0, &ticks, &ticks);
    assert_eq!(s.delta_x(), 47.5);
    assert_eq!(s.delta_y(), 47.5);
}

#[test]
fn fixed_range_delta_grows_with_width() {
    let ticks = five_ticks();
    let mut last = f64::NEG_INFINITY;
    for width in (100..=1000).step_by(37) {
        let d = fixed(width, 300, 16.0, &ticks, &ticks).delta_x();
        assert!(d > last, "width {width}: {d} <= {last}");
        last = d;
    }
}

#[test]
fn zero_or_one_tick_uses_single_interval() {
    let none = AxisTickSet::new();
    let one = AxisTickSet::from_integers(vec![7]);
    assert_eq!(fixed(120, 120, 10.0, &none, &one).delta_x(), 100.0);
    assert_eq!(fixed(120, 120, 10.0, &none, &one).delta_y(), 100.0);
}

#[test]
fn crop_mode_delta_spans_data_extent() {
    let s = cropped(640, 480, 32.0, &[(0.0, 0.0), (10.0, 10.0)]);
    assert!(close(s.delta_x(), (640.0 - 2.0 * 32.0) / 10.0));
    assert!(close(s.delta_y(), (480.0 - 2.0 * 32.0) / 10.0));
    assert_eq!(s.x_axis().origin, 0.0);
}

#[test]
fn crop_mode_single_point_stays_finite() {
    let s = cropped(640, 480, 32.0, &[(5.0, 5.0)]);
    for d in [s.delta_x(), s.delta_y()] {
        assert!(d.is_finite() && !d.is_nan());
    }
    assert_eq!(s.x_axis().visible_span, CROP_SPAN_FLOOR);
    let p = s.to_pixel(Point::new(5.0, 5.0));
    assert_eq!(p, PixelPoint::new(32.0, 448.0));
}

#[test]
fn crop_mode_without_data_falls_back_to_tick_range() {
    let ticks = five_ticks();
    let s = ViewportScaler::compute(PanelSize::new(210, 210), 10.0, &ticks, &ticks, &Extrema::EMPTY, LayoutMode::CropToData);
    assert_eq!(s.delta_x(), 47.5);
    assert!(!s.x_axis().cropped);
}

#[test]
fn mapping_inverts_y_and_offsets_margin() {
    let ticks = five_ticks();
    let s = fixed(210, 210, 10.0, &ticks, &ticks);
    assert_eq!(s.to_pixel(Point::new(0.0, 0.0)), PixelPoint::new(10.0, 200.0));
    assert_eq!(s.to_pixel(Point::new(2.0, 1.0)), PixelPoint::new(105.0, 152.5));
    // outside the nominal range is plotted off-scale, not clipped
    assert_eq!(s.to_pixel(Point::new(5.0, -1.0)), PixelPoint::new(247.5, 247.5));
}

#[test]
fn crop_mapping_uses_data_minimum_as_origin() {
    let s = cropped(220, 120, 10.0, &[(100.0, -5.0), (150.0, 5.0)]);
    // x: 200px over 50 units, y: 100px over 10 units
    assert_eq!(s.to_pixel(Point::new(100.0, -5.0)), PixelPoint::new(10.0, 110.0));
    assert_eq!(s.to_pixel(Point::new(125.0, 0.0)), PixelPoint::new(110.0, 60.0));
}

#[test]
fn to_data_inverts_to_pixel() {
    let s = cropped(800, 600, 24.0, &[(-3.0, 2.0), (9.0, 40.0)]);
    for p in [Point::new(-3.0, 2.0), Point::new(1.5, 17.25), Point::new(9.0, 40.0)] {
        let back = s.to_data(s.to_pixel(p));
        assert!((back.x - p.x).abs() < 1e-3 && (back.y - p.y).abs() < 1e-3, "{p:?} -> {back:?}");
    }
}

#[test]
fn margin_larger_than_panel_does_not_divide_by_zero() {
    let ticks = five_ticks();
    let s = fixed(40, 40, 32.0, &ticks, &ticks);
    assert_eq!(s.delta_x(), 0.0);
    let p = s.to_pixel(Point::new(3.0, 3.0));
    assert!(p.x.is_finite() && p.y.is_finite());
    let back = s.to_data(p);
    assert!(back.x.is_finite());
}

#[test]
fn fixed_ticks_are_evenly_spaced_by_index() {
    let ticks = AxisTickSet::from_integers(vec![0, 10, 20, 30, 40]);
    let s = fixed(210, 210, 10.0, &ticks, &ticks);
    let xs: Vec<f32> = s.x_ticks(&ticks).iter().map(|m| m.pixel).collect();
    let ys: Vec<f32> = s.y_ticks(&ticks).iter().map(|m| m.pixel).collect();
    assert_eq!(xs, vec![10.0, 57.5, 105.0, 152.5, 200.0]);
    assert_eq!(ys, vec![200.0, 152.5, 105.0, 57.5, 10.0]);
}

#[test]
fn crop_mode_skips_ticks_outside_data_extent() {
    let extrema = Extrema::from_points([Point::new(2.0, 0.0), Point::new(6.0, 4.0)]);
    let ticks = AxisTickSet::from_integers((0..=8).collect::<Vec<i64>>());
    let s = ViewportScaler::compute(PanelSize::new(210, 210), 10.0, &ticks, &ticks, &extrema, LayoutMode::CropToData);

    let marks = s.x_ticks(&ticks);
    assert_eq!(marks.iter().map(|m| m.value).collect::<Vec<_>>(), vec![2.0, 3.0, 4.0, 5.0, 6.0]);
    let four = marks.iter().find(|m| m.value == 4.0).unwrap();
    assert_eq!(four.pixel, 105.0);

    let y_values: Vec<f64> = s.y_ticks(&ticks).iter().map(|m| m.value).collect();
    assert_eq!(y_values, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    // the tick set itself is untouched
    assert_eq!(ticks.tick_count(), 9);
}

#[test]
fn plot_rect_is_margin_inset() {
    let ticks = five_ticks();
    let r = fixed(300, 200, 20.0, &ticks, &ticks).plot_rect();
    assert_eq!((r.left, r.top, r.right, r.bottom), (20.0, 20.0, 280.0, 180.0));
}

#[test]
fn required_margin_takes_larger_estimate() {
    let wide = TextExtent { width: 30.0, height: 12.0, ascent: 9.0 };
    assert_eq!(required_margin(wide, 5.0), 37.0);
    let tall = TextExtent { width: 4.0, height: 30.0, ascent: 24.0 };
    assert_eq!(required_margin(tall, 5.0), 45.0);
}

#[test]
fn margin_updates_only_beyond_one_pixel() {
    assert!(!margin_needs_update(32.0, 32.0));
    assert!(!margin_needs_update(32.0, 33.0));
    assert!(!margin_needs_update(32.0, 31.2));
    assert!(margin_needs_update(32.0, 33.5));
    assert!(margin_needs_update(32.0, 20.0));
}

#[test]
fn crop_mode_keeps_generated_ticks_on_data_extent() {
    let cases = [(0.0, 29.95, 11), (0.1, 0.7, 7), (-3.3, 17.45, 9), (1e6 + 0.1, 1e6 + 9.9, 5)];
    for (lo, hi, n) in cases {
        let extrema = Extrema::from_points([Point::new(lo, lo), Point::new(hi, hi)]);
        let ticks = AxisTickSet::evenly_spaced(lo, hi, n);
        let s = ViewportScaler::compute(PanelSize::new(640, 480), 32.0, &ticks, &ticks, &extrema, LayoutMode::CropToData);

        let xs = s.x_ticks(&ticks);
        assert_eq!(xs.len(), n, "x marks for {lo}..{hi}");
        assert_eq!(s.y_ticks(&ticks).len(), n, "y marks for {lo}..{hi}");
        assert!((xs[n - 1].pixel - 608.0).abs() < 0.01, "last tick at {}", xs[n - 1].pixel);
    }
}
