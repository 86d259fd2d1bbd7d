use timeline_rs::binning::{BinningTuning, coarse_step_for_span, refine_step_for_density};
use timeline_rs::core::types::{DAY_MS, HOUR_MS, MIN_SPAN_MS, MINUTE_MS, STEP_LADDER_MS};

#[test]
fn coarse_step_is_monotonic_in_span() {
    let mut previous = 0;
    for exponent in 0..24 {
        let span = MINUTE_MS << exponent;
        let step = coarse_step_for_span(span);
        assert!(step >= previous, "coarser spans never pick finer steps");
        previous = step;
    }
}

#[test]
fn coarse_step_comes_from_the_ladder() {
    for span in [
        5 * MINUTE_MS,
        3 * HOUR_MS,
        18 * HOUR_MS,
        4 * DAY_MS,
        90 * DAY_MS,
        730 * DAY_MS,
    ] {
        let step = coarse_step_for_span(span);
        assert!(STEP_LADDER_MS.contains(&step));
    }
}

#[test]
fn day_long_span_selects_sub_hour_buckets() {
    let step = coarse_step_for_span(24 * HOUR_MS);
    assert!(step >= 30 * MINUTE_MS && step <= HOUR_MS);
}

#[test]
fn refined_step_keeps_bucket_width_in_pixel_band() {
    let tuning = BinningTuning::default();
    for span in [HOUR_MS, 24 * HOUR_MS, 7 * DAY_MS, 365 * DAY_MS] {
        for width_px in [240.0, 600.0, 1440.0, 3840.0] {
            let coarse = coarse_step_for_span(span);
            let step = refine_step_for_density(coarse, span, width_px, tuning);
            let px_per_bucket = width_px / (span as f64 / step as f64);

            let at_floor = step == MIN_SPAN_MS;
            let at_ceiling = step >= span;
            assert!(
                px_per_bucket >= tuning.min_bucket_px || at_ceiling,
                "span={span} width={width_px}: {px_per_bucket}px bucket too narrow"
            );
            assert!(
                px_per_bucket <= tuning.max_bucket_px || at_floor,
                "span={span} width={width_px}: {px_per_bucket}px bucket too wide"
            );
        }
    }
}

#[test]
fn default_container_over_one_day_lands_near_half_hour_buckets() {
    let span = 24 * HOUR_MS;
    let coarse = coarse_step_for_span(span);
    let step = refine_step_for_density(coarse, span, 600.0, BinningTuning::default());
    assert!(
        (30 * MINUTE_MS..=HOUR_MS).contains(&step),
        "expected a 30-60 minute step, got {step}ms"
    );
}

#[test]
fn two_year_span_resolves_to_day_tier_or_coarser() {
    let span = 730 * DAY_MS;
    let coarse = coarse_step_for_span(span);
    assert_eq!(coarse, DAY_MS);
    let step = refine_step_for_density(coarse, span, 600.0, BinningTuning::default());
    assert!(step >= DAY_MS);
}

#[test]
fn degenerate_width_leaves_coarse_step_untouched() {
    let tuning = BinningTuning::default();
    let coarse = coarse_step_for_span(24 * HOUR_MS);
    assert_eq!(
        refine_step_for_density(coarse, 24 * HOUR_MS, 0.0, tuning),
        coarse
    );
    assert_eq!(
        refine_step_for_density(coarse, 24 * HOUR_MS, f64::NAN, tuning),
        coarse
    );
}
