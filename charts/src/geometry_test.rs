use super::*;
use crate::{ChartData, SINGLE_SERIES_KEY, Series, SeriesPoint, merge_series};

fn rows_of(labels: &[&str]) -> Vec<ChartRow> {
    let points = labels
        .iter()
        .enumerate()
        .map(|(i, t)| SeriesPoint::new(*t, (i * 10) as f64))
        .collect();
    merge_series(&[Series::new("s", "S", "#000000", points)])
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Scales
// =============================================================

#[test]
fn y_scale_is_fixed_to_percentage_domain() {
    let layout = ChartLayout::new(600.0, 200.0);
    assert!(approx(layout.y_at(0.0), layout.plot_bottom()));
    assert!(approx(layout.y_at(100.0), layout.plot_top()));
    assert!(approx(layout.y_at(50.0), (layout.plot_top() + layout.plot_bottom()) / 2.0));
}

#[test]
fn y_scale_clamps_out_of_domain_and_non_finite_values() {
    let layout = ChartLayout::new(600.0, 200.0);
    assert!(approx(layout.y_at(140.0), layout.plot_top()));
    assert!(approx(layout.y_at(-5.0), layout.plot_bottom()));
    assert!(approx(layout.y_at(f64::NAN), layout.plot_bottom()));
}

#[test]
fn y_ticks_cover_zero_to_hundred() {
    let layout = ChartLayout::new(600.0, 200.0);
    let labels = layout.y_ticks().into_iter().map(|t| t.label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["0", "25", "50", "75", "100"]);
}

#[test]
fn x_scale_puts_first_and_last_rows_on_plot_edges() {
    let layout = ChartLayout::new(600.0, 200.0);
    assert!(approx(layout.x_at(0, 5), layout.plot_left()));
    assert!(approx(layout.x_at(4, 5), layout.plot_right()));
    assert!(approx(layout.x_at(0, 1), layout.plot_left() + layout.plot_width() / 2.0));
}

#[test]
fn hover_bands_tile_the_plot_without_overlap() {
    let layout = ChartLayout::new(600.0, 200.0);
    let (a0, a1) = layout.hover_band(0, 3);
    let (b0, b1) = layout.hover_band(1, 3);
    let (c0, c1) = layout.hover_band(2, 3);
    assert!(approx(a0, layout.plot_left()));
    assert!(approx(a1, b0));
    assert!(approx(b1, c0));
    assert!(approx(c1, layout.plot_right()));
}

// =============================================================
// X tick thinning
// =============================================================

#[test]
fn x_ticks_keep_every_label_when_there_is_room() {
    let layout = ChartLayout::new(600.0, 200.0);
    let ticks = layout.x_ticks(&rows_of(&["10:00", "10:05", "10:10"]));
    assert_eq!(ticks.len(), 3);
}

#[test]
fn x_ticks_are_thinned_for_dense_rows() {
    let labels = (0..25).map(|i| format!("{:02}:{:02}", 8 + i / 12, (i % 12) * 5)).collect::<Vec<_>>();
    let refs = labels.iter().map(String::as_str).collect::<Vec<_>>();
    let layout = ChartLayout::new(600.0, 200.0);

    let ticks = layout.x_ticks(&rows_of(&refs));

    assert_eq!(ticks.len(), 7);
    assert_eq!(ticks[0].label, "08:00");
    for pair in ticks.windows(2) {
        let spacing = pair[1].position - pair[0].position;
        assert!(spacing >= 5.0 * TICK_CHAR_WIDTH + MIN_TICK_GAP);
    }
}

#[test]
fn x_ticks_of_empty_frame_are_empty() {
    let layout = ChartLayout::new(600.0, 200.0);
    assert!(layout.x_ticks(&[]).is_empty());
}

// =============================================================
// Series segments and paths
// =============================================================

#[test]
fn single_series_line_runs_from_first_to_second_sample() {
    let data = ChartData::Single {
        points: vec![SeriesPoint::new("10:00", 42.0), SeriesPoint::new("10:05", 58.0)],
        label: "CPU".to_owned(),
        color: "#1B58F4".to_owned(),
    };
    let layout = ChartLayout::new(600.0, 200.0);

    let segments = layout.series_segments(&data.rows(), SINGLE_SERIES_KEY);

    assert_eq!(segments.len(), 1);
    let points = &segments[0].points;
    assert_eq!(points.len(), 2);
    assert!(approx(points[0].y, layout.y_at(42.0)));
    assert!(approx(points[1].y, layout.y_at(58.0)));
    assert!(points[1].y < points[0].y);
    assert!(segments[0].line.starts_with('M'));
    assert!(segments[0].line.contains('L'));
    assert!(segments[0].area.ends_with('Z'));
}

#[test]
fn segments_break_at_missing_samples() {
    let a = Series::new(
        "a",
        "A",
        "#111111",
        vec![SeriesPoint::new("t1", 10.0), SeriesPoint::new("t2", 20.0), SeriesPoint::new("t4", 40.0)],
    );
    let b = Series::new("b", "B", "#222222", vec![SeriesPoint::new("t3", 30.0)]);
    let rows = merge_series(&[a, b]);
    let layout = ChartLayout::new(600.0, 200.0);

    let segments = layout.series_segments(&rows, "a");

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].points.len(), 2);
    assert_eq!(segments[1].points[0].index, 3);
}

#[test]
fn series_without_rows_has_no_segments() {
    let layout = ChartLayout::new(600.0, 200.0);
    assert!(layout.series_segments(&[], "a").is_empty());
}

#[test]
fn monotone_path_uses_cubic_segments_for_three_or_more_points() {
    let points = [
        PlotPoint { index: 0, x: 0.0, y: 100.0 },
        PlotPoint { index: 1, x: 50.0, y: 40.0 },
        PlotPoint { index: 2, x: 100.0, y: 60.0 },
    ];
    let d = monotone_path(&points);
    assert_eq!(d.matches('C').count(), 2);
    assert!(d.starts_with("M0.00,100.00"));
    assert!(d.ends_with("100.00,60.00"));
}

#[test]
fn monotone_tangent_is_flat_at_local_extremum() {
    let points = [
        PlotPoint { index: 0, x: 0.0, y: 100.0 },
        PlotPoint { index: 1, x: 50.0, y: 40.0 },
        PlotPoint { index: 2, x: 100.0, y: 60.0 },
    ];
    let tangents = monotone_tangents(&points);
    assert!(approx(tangents[1], 0.0));
}

#[test]
fn monotone_path_of_single_point_is_a_move() {
    let d = monotone_path(&[PlotPoint { index: 0, x: 3.0, y: 4.0 }]);
    assert_eq!(d, "M3.00,4.00");
    assert_eq!(monotone_path(&[]), "");
}
