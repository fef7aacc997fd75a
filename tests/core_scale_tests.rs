use approx::assert_abs_diff_eq;
use camp_charts::core::{
    BandScale, LinearScale, Margins, Observation, ObservationSeries, PlotArea, TimeScale,
    Viewport, linear_ticks, midnight, month_ticks,
};
use camp_charts::error::ChartError;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_domain(px).expect("from pixel");
    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn zero_width_domain_is_rejected() {
    assert!(LinearScale::new(5.0, 5.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(f64::NAN, 5.0, 0.0, 100.0).is_err());
}

#[test]
fn value_scale_draws_bottom_up() {
    let scale = LinearScale::for_values(400.0, 520.0).expect("value scale");

    assert_abs_diff_eq!(scale.domain_to_pixel(0.0).expect("zero"), 520.0);
    assert_abs_diff_eq!(scale.domain_to_pixel(400.0).expect("max"), 0.0);
    assert_abs_diff_eq!(scale.domain_to_pixel(100.0).expect("quarter"), 390.0);
}

#[test]
fn value_scale_with_zero_maximum_stays_usable() {
    let scale = LinearScale::for_values(0.0, 520.0).expect("value scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
}

#[test]
fn time_scale_maps_extent_onto_plot_width() {
    let series = ObservationSeries::new(vec![
        Observation::new(date(2012, 1, 1), 100),
        Observation::new(date(2012, 1, 11), 400),
        Observation::new(date(2012, 1, 21), 200),
    ])
    .expect("series");
    let scale = TimeScale::from_series(&series, 600.0).expect("time scale");

    assert_abs_diff_eq!(scale.date_to_pixel(date(2012, 1, 1)).expect("start"), 0.0);
    assert_abs_diff_eq!(scale.date_to_pixel(date(2012, 1, 11)).expect("mid"), 300.0);
    assert_abs_diff_eq!(scale.date_to_pixel(date(2012, 1, 21)).expect("end"), 600.0);
    assert_eq!(scale.date_range(), (date(2012, 1, 1), date(2012, 1, 21)));
}

#[test]
fn time_scale_inverts_pixels_to_timestamps() {
    let scale = TimeScale::new(date(2012, 1, 1), date(2012, 1, 21), 600.0).expect("time scale");

    let px = scale.date_to_pixel(date(2012, 1, 11)).expect("to pixel");
    assert_eq!(
        scale.pixel_to_time(px).expect("from pixel"),
        midnight(date(2012, 1, 11))
    );

    // 30 px per day: 45 px is a day and a half in.
    let noon = date(2012, 1, 2).and_hms_opt(12, 0, 0).expect("time");
    assert_eq!(scale.pixel_to_time(45.0).expect("from pixel"), noon);
}

#[test]
fn single_date_time_scale_centers_the_point() {
    let scale = TimeScale::new(date(2013, 5, 1), date(2013, 5, 1), 600.0).expect("time scale");
    assert_abs_diff_eq!(
        scale.date_to_pixel(date(2013, 5, 1)).expect("center"),
        300.0,
        epsilon = 1e-9
    );
}

#[test]
fn time_scale_rejects_empty_series_and_reversed_range() {
    assert!(TimeScale::from_series(&ObservationSeries::default(), 600.0).is_err());
    assert!(TimeScale::new(date(2013, 5, 2), date(2013, 5, 1), 600.0).is_err());
}

#[test]
fn band_scale_splits_width_with_padding() {
    let scale =
        BandScale::new(["Caravans", "Combination", "Tents"], 600.0, 0.2).expect("band scale");

    assert_abs_diff_eq!(scale.step(), 187.5, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.bandwidth(), 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.band_start("Caravans").expect("first"), 37.5, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.band_start("Combination").expect("second"), 225.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.band_start("Tents").expect("third"), 412.5, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.band_center("Tents").expect("center"), 487.5, epsilon = 1e-9);
    assert_eq!(scale.band_start("Igloos"), None);
}

#[test]
fn band_scale_rejects_duplicate_categories() {
    let result = BandScale::new(["Tents", "Tents"], 600.0, 0.2);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn linear_ticks_use_round_steps() {
    let ticks = linear_ticks(0.0, 100.0, 10).expect("ticks");
    assert_eq!(ticks.len(), 11);
    assert_abs_diff_eq!(ticks[1], 10.0);
    assert_abs_diff_eq!(ticks[10], 100.0);

    let ticks = linear_ticks(0.0, 400.0, 10).expect("ticks");
    assert_eq!(ticks, vec![0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0]);

    let ticks = linear_ticks(0.0, 1.0, 5).expect("ticks");
    assert_eq!(ticks.len(), 6);
    assert_abs_diff_eq!(ticks[3], 0.6, epsilon = 1e-12);
}

#[test]
fn linear_ticks_stay_inside_interval() {
    let ticks = linear_ticks(3.0, 121_305.0, 10).expect("ticks");
    assert!(ticks.iter().all(|tick| (3.0..=121_305.0).contains(tick)));
    assert_abs_diff_eq!(ticks[0], 10_000.0);
}

#[test]
fn quarterly_month_ticks_land_on_quarter_starts() {
    let ticks = month_ticks(date(2012, 7, 15), date(2013, 7, 1), 3).expect("ticks");
    assert_eq!(
        ticks,
        vec![
            date(2012, 10, 1),
            date(2013, 1, 1),
            date(2013, 4, 1),
            date(2013, 7, 1)
        ]
    );
}

#[test]
fn month_ticks_include_start_on_first_of_month() {
    let ticks = month_ticks(date(2012, 1, 1), date(2012, 1, 21), 3).expect("ticks");
    assert_eq!(ticks, vec![date(2012, 1, 1)]);
    assert!(month_ticks(date(2012, 1, 1), date(2012, 2, 1), 0).is_err());
}

#[test]
fn plot_area_subtracts_margins() {
    let plot = PlotArea::from_viewport(Viewport::new(650, 580), Margins::default()).expect("plot");
    assert_abs_diff_eq!(plot.width, 600.0);
    assert_abs_diff_eq!(plot.height, 520.0);
    assert!(plot.contains(0.0, 520.0));
    assert!(!plot.contains(-0.5, 10.0));

    let too_small = PlotArea::from_viewport(Viewport::new(40, 40), Margins::default());
    assert!(matches!(too_small, Err(ChartError::InvalidViewport { .. })));
}
