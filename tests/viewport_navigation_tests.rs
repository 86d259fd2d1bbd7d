use timeline_rs::binning::coarse_step_for_span;
use timeline_rs::core::types::{DAY_MS, HOUR_MS, MIN_SPAN_MS};
use timeline_rs::core::{PanDirection, TimeViewport, TimestampIndex, UtcOffset};

fn week_viewport() -> TimeViewport {
    let base = 19_000 * DAY_MS;
    let index = TimestampIndex::from_values(vec![base + HOUR_MS, base + 7 * DAY_MS - HOUR_MS]);
    TimeViewport::from_index(&index, UtcOffset::UTC).expect("non-empty index")
}

#[test]
fn zoom_in_then_out_restores_span_and_midpoint() {
    let mut viewport = week_viewport();
    let span_before = viewport.span();
    let midpoint_before = viewport.midpoint();

    viewport.zoom(2.0).expect("valid factor");
    assert_eq!(viewport.span(), span_before / 2);
    assert_eq!(viewport.midpoint(), midpoint_before);

    viewport.zoom(0.5).expect("valid factor");
    assert!((viewport.span() - span_before).abs() <= 1);
    assert!((viewport.midpoint() - midpoint_before).abs() <= 1);
}

#[test]
fn zoom_in_keeps_midpoint_fixed() {
    let mut viewport = week_viewport();
    viewport.recenter(19_003 * DAY_MS);
    let midpoint = viewport.midpoint();
    viewport.zoom(4.0).expect("valid factor");
    assert!((viewport.midpoint() - midpoint).abs() <= 1);
}

#[test]
fn zoom_in_never_shrinks_below_minimum_span() {
    let mut viewport = week_viewport();
    viewport.zoom(1e9).expect("valid factor");
    assert_eq!(viewport.span(), MIN_SPAN_MS);
}

#[test]
fn zoom_out_never_grows_past_global_span() {
    let mut viewport = week_viewport();
    viewport.zoom(1e-9).expect("valid factor");
    assert_eq!(viewport.span(), viewport.global_span());
}

#[test]
fn pan_step_scales_with_magnitude() {
    let mut small = week_viewport();
    small.zoom(8.0).expect("valid factor");
    let mut large = small;

    let before = small.visible_range().0;
    small.pan(PanDirection::Forward, 0.5).expect("valid magnitude");
    large.pan(PanDirection::Forward, 1.5).expect("valid magnitude");

    let small_shift = small.visible_range().0 - before;
    let large_shift = large.visible_range().0 - before;
    assert!(small_shift > 0);
    assert_eq!(large_shift, 3 * small_shift);
}

#[test]
fn pan_step_uses_span_fraction_when_bucket_step_is_smaller() {
    let mut viewport = week_viewport();
    let span = viewport.span();
    let step = coarse_step_for_span(span);
    assert!(step < span / 5, "test setup expects the span term to win");

    let before = viewport.visible_range();
    viewport.pan(PanDirection::Backward, 1.0).expect("valid magnitude");
    // Already at the left edge: translation clamps in place.
    assert_eq!(viewport.visible_range(), before);

    viewport.zoom(4.0).expect("valid factor");
    let before = viewport.visible_range().0;
    viewport.pan(PanDirection::Forward, 1.0).expect("valid magnitude");
    let expected = viewport.span() / 5;
    assert_eq!(viewport.visible_range().0 - before, expected);
}

#[test]
fn recenter_preserves_window_width() {
    let mut viewport = week_viewport();
    viewport.zoom(8.0).expect("valid factor");
    let span = viewport.span();

    viewport.recenter(19_005 * DAY_MS);
    assert_eq!(viewport.span(), span);
    assert!((viewport.midpoint() - 19_005 * DAY_MS).abs() <= 1);
}

#[test]
fn recenter_near_edge_clamps_inside_global_bounds() {
    let mut viewport = week_viewport();
    viewport.zoom(8.0).expect("valid factor");
    let span = viewport.span();

    viewport.recenter(viewport.global_range().1 + DAY_MS);
    let (visible_min, visible_max) = viewport.visible_range();
    assert_eq!(visible_max, viewport.global_range().1);
    assert_eq!(visible_max - visible_min, span);
}
