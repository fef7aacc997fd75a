use approx::assert_abs_diff_eq;
use camp_charts::api::{AreaChart, ChartConfig, render_area_chart};
use camp_charts::core::{Observation, ObservationSeries, project_area_geometry};
use camp_charts::error::ChartError;
use camp_charts::interaction::{PointerEvent, TooltipPlacement, TooltipState};
use camp_charts::render::{NullRenderer, Renderer, TextHAlign};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// 20-day series over a 600 px plot: 30 px per day, value axis 0..400 over 520 px.
fn sample_chart() -> AreaChart {
    let series = ObservationSeries::new(vec![
        Observation::new(date(2012, 1, 1), 100),
        Observation::new(date(2012, 1, 11), 400),
        Observation::new(date(2012, 1, 21), 200),
    ])
    .expect("series");
    AreaChart::new(ChartConfig::default(), series).expect("chart")
}

/// Pointer at plot-space x, vertically inside the plot (default margins: left 50, top 30).
fn pointer_at_plot_x(plot_x: f64) -> PointerEvent {
    PointerEvent::new(plot_x + 50.0, 30.0 + 200.0)
}

#[test]
fn area_projection_closes_fill_at_baseline() {
    let chart = sample_chart();
    let geometry = project_area_geometry(
        chart.series(),
        chart.time_scale().expect("time scale"),
        chart.value_scale().expect("value scale"),
        520.0,
    )
    .expect("project");

    assert_eq!(geometry.line_points.len(), 3);
    assert_eq!(geometry.fill_polygon.len(), 6);
    assert_abs_diff_eq!(geometry.line_points[0].y, 390.0);
    assert_abs_diff_eq!(geometry.line_points[1].x, 300.0);
    assert_abs_diff_eq!(geometry.line_points[1].y, 0.0);
    assert_abs_diff_eq!(geometry.fill_polygon[0].y, 520.0);
    assert_abs_diff_eq!(geometry.fill_polygon[4].x, 600.0);
    assert_eq!(geometry.fill_polygon[0], geometry.fill_polygon[5]);
}

#[test]
fn pointer_move_resolves_nearest_observation() {
    let chart = sample_chart();

    let state = chart
        .on_pointer_move(pointer_at_plot_x(160.0))
        .expect("pointer move");
    assert!(state.visible);
    assert_eq!(
        state.observation,
        Some(Observation::new(date(2012, 1, 11), 400))
    );
    assert_abs_diff_eq!(state.anchor_x, 300.0);
    assert_abs_diff_eq!(state.anchor_y, 0.0);
    assert_eq!(state.placement, TooltipPlacement::Right);
    assert_eq!(state.date_label, "2012-01-11");
    assert_eq!(state.value_label, "Pop: 400");

    let state = chart
        .on_pointer_move(pointer_at_plot_x(140.0))
        .expect("pointer move");
    assert_eq!(state.date_label, "2012-01-01");
    assert_abs_diff_eq!(state.anchor_y, 390.0);
}

#[test]
fn pointer_halfway_between_points_picks_earlier_one() {
    let chart = sample_chart();
    let state = chart
        .on_pointer_move(pointer_at_plot_x(150.0))
        .expect("pointer move");
    assert_eq!(state.date_label, "2012-01-01");
}

#[test]
fn tooltip_mirrors_near_right_edge() {
    let chart = sample_chart();
    let state = chart
        .on_pointer_move(pointer_at_plot_x(590.0))
        .expect("pointer move");
    assert_abs_diff_eq!(state.anchor_x, 600.0);
    assert_eq!(state.placement, TooltipPlacement::Left);
}

#[test]
fn placement_threshold_is_strict() {
    assert_eq!(
        TooltipPlacement::resolve(480.0, 600.0, 120.0),
        TooltipPlacement::Right
    );
    assert_eq!(
        TooltipPlacement::resolve(480.5, 600.0, 120.0),
        TooltipPlacement::Left
    );
    assert_eq!(
        TooltipPlacement::resolve(0.0, 600.0, 120.0),
        TooltipPlacement::Right
    );
}

#[test]
fn pointer_outside_plot_hides_tooltip() {
    let chart = sample_chart();

    let left_margin = chart
        .on_pointer_move(PointerEvent::new(10.0, 100.0))
        .expect("pointer move");
    assert_eq!(left_margin, TooltipState::hidden());

    let below_axis = chart
        .on_pointer_move(PointerEvent::new(190.0, 570.0))
        .expect("pointer move");
    assert!(!below_axis.visible);
    assert!(below_axis.observation.is_none());
}

#[test]
fn pointer_leave_hides_tooltip() {
    let chart = sample_chart();
    assert!(!chart.on_pointer_leave().visible);
}

#[test]
fn non_finite_pointer_is_rejected() {
    let chart = sample_chart();
    let result = chart.on_pointer_move(PointerEvent::new(f64::NAN, 100.0));
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn empty_series_reports_empty_sequence_on_hover() {
    let chart = AreaChart::new(ChartConfig::default(), ObservationSeries::default())
        .expect("empty chart still builds");

    let result = chart.on_pointer_move(pointer_at_plot_x(100.0));
    assert!(matches!(result, Err(ChartError::EmptySequence)));

    let frame = chart.render_frame(None).expect("render");
    assert!(!frame.is_empty());
    assert!(frame.paths.is_empty());
    assert_eq!(frame.texts.len(), 1);
}

#[test]
fn render_frame_draws_area_axes_and_title() {
    let chart = sample_chart();
    let frame = chart.render_frame(None).expect("render");

    assert_eq!(frame.paths.len(), 2);
    assert!(frame.paths[0].closed);
    assert!(frame.paths[0].fill_color.is_some());
    assert!(!frame.paths[1].closed);
    // Plot space is translated by the margins.
    assert_abs_diff_eq!(frame.paths[1].points[0].0, 50.0);
    assert_abs_diff_eq!(frame.paths[1].points[0].1, 420.0);

    // Bottom axis: domain + one January tick. Left axis: domain + nine ticks (0..400 by 50).
    assert_eq!(frame.lines.len(), 12);
    assert_eq!(frame.texts.len(), 11);
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(labels.contains(&"Jan 2012"));
    assert!(labels.contains(&"350"));
    assert!(labels.contains(&"Camp Population"));

    let title = frame
        .texts
        .iter()
        .find(|text| text.text == "Camp Population")
        .expect("title");
    assert!(title.bold);
    assert_abs_diff_eq!(title.x, 350.0);

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("valid frame");
}

#[test]
fn render_frame_includes_visible_tooltip() {
    let chart = sample_chart();
    let state = chart
        .on_pointer_move(pointer_at_plot_x(300.0))
        .expect("pointer move");
    let frame = chart.render_frame(Some(&state)).expect("render");

    assert_eq!(frame.lines.len(), 13);
    let guide = frame.lines.last().expect("guide line");
    assert_abs_diff_eq!(guide.x1, 350.0);
    assert_abs_diff_eq!(guide.y1, 40.0);
    assert_abs_diff_eq!(guide.y2, 550.0);

    let value_label = frame
        .texts
        .iter()
        .find(|text| text.text == "Pop: 400")
        .expect("value label");
    assert_abs_diff_eq!(value_label.x, 360.0);
    assert_abs_diff_eq!(value_label.y, 50.0);
    assert_eq!(value_label.h_align, TextHAlign::Left);

    let date_label = frame
        .texts
        .iter()
        .find(|text| text.text == "2012-01-11")
        .expect("date label");
    assert_abs_diff_eq!(date_label.y, 75.0);
}

#[test]
fn mirrored_tooltip_text_is_right_aligned() {
    let chart = sample_chart();
    let state = chart
        .on_pointer_move(pointer_at_plot_x(600.0))
        .expect("pointer move");
    let frame = chart.render_frame(Some(&state)).expect("render");

    let value_label = frame
        .texts
        .iter()
        .find(|text| text.text == "Pop: 200")
        .expect("value label");
    assert_abs_diff_eq!(value_label.x, 640.0);
    assert_eq!(value_label.h_align, TextHAlign::Right);
}

#[test]
fn hidden_tooltip_adds_nothing() {
    let chart = sample_chart();
    let plain = chart.render_frame(None).expect("render");
    let hidden = chart
        .render_frame(Some(&chart.on_pointer_leave()))
        .expect("render");
    assert_eq!(plain, hidden);
}

#[test]
fn one_shot_render_matches_chart_render() {
    let chart = sample_chart();
    let frame = render_area_chart(chart.config(), chart.series()).expect("render");
    assert_eq!(frame, chart.render_frame(None).expect("render"));
}
