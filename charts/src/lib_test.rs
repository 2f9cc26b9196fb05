use super::*;

fn pt(time: &str, value: f64) -> SeriesPoint {
    SeriesPoint::new(time, value)
}

// =============================================================
// merge_series
// =============================================================

#[test]
fn merge_unions_time_labels_in_order() {
    let a = Series::new("a", "A", "#111111", vec![pt("t1", 10.0), pt("t2", 20.0)]);
    let b = Series::new("b", "B", "#222222", vec![pt("t2", 30.0), pt("t3", 40.0)]);

    let rows = merge_series(&[a, b]);

    let times = rows.iter().map(|r| r.time.as_str()).collect::<Vec<_>>();
    assert_eq!(times, vec!["t1", "t2", "t3"]);
    assert_eq!(rows[0].value("a"), Some(10.0));
    assert_eq!(rows[0].value("b"), None);
    assert_eq!(rows[1].value("a"), Some(20.0));
    assert_eq!(rows[1].value("b"), Some(30.0));
    assert_eq!(rows[2].value("a"), None);
    assert_eq!(rows[2].value("b"), Some(40.0));
}

#[test]
fn merge_sorts_by_label_not_by_series_order() {
    let a = Series::new("a", "A", "#111111", vec![pt("10:10", 1.0)]);
    let b = Series::new("b", "B", "#222222", vec![pt("09:55", 2.0), pt("10:00", 3.0)]);

    let rows = merge_series(&[a, b]);

    let times = rows.iter().map(|r| r.time.as_str()).collect::<Vec<_>>();
    assert_eq!(times, vec!["09:55", "10:00", "10:10"]);
}

#[test]
fn merge_of_no_series_is_empty() {
    assert!(merge_series(&[]).is_empty());
}

#[test]
fn merge_keeps_last_value_for_duplicate_label() {
    let a = Series::new("a", "A", "#111111", vec![pt("t1", 1.0), pt("t1", 5.0)]);
    let rows = merge_series(&[a]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value("a"), Some(5.0));
}

#[test]
fn sparse_rows_omit_missing_series_rather_than_zeroing() {
    let a = Series::new("cpu", "CPU", "#111111", vec![pt("t1", 50.0)]);
    let b = Series::new("gpu", "GPU", "#222222", vec![pt("t2", 0.0)]);
    let rows = merge_series(&[a, b]);
    assert!(!rows[0].values.contains_key("gpu"));
    assert_eq!(rows[1].value("gpu"), Some(0.0));
}

// =============================================================
// ChartData
// =============================================================

#[test]
fn single_input_wraps_as_value_series_and_keeps_order() {
    let data = ChartData::Single {
        points: vec![pt("10:05", 58.0), pt("10:00", 42.0)],
        label: DEFAULT_LABEL.to_owned(),
        color: DEFAULT_COLOR.to_owned(),
    };

    let series = data.series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].key, SINGLE_SERIES_KEY);
    assert_eq!(series[0].name, "Utilization");
    assert_eq!(series[0].color, "#1B58F4");

    let rows = data.rows();
    assert_eq!(rows[0].time, "10:05");
    assert_eq!(rows[1].value(SINGLE_SERIES_KEY), Some(42.0));
}

#[test]
fn empty_multi_input_has_no_series_and_no_rows() {
    let data = ChartData::Multi(Vec::new());
    assert!(data.series().is_empty());
    assert!(data.rows().is_empty());
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_value_rounds_and_appends_unit() {
    assert_eq!(format_value(58.0, "%"), "58%");
    assert_eq!(format_value(57.5, "%"), "58%");
    assert_eq!(format_value(42.49, "°C"), "42°C");
}

#[test]
fn gradient_ids_are_scoped_by_chart_instance() {
    let a = gradient_id("chart1", "cpu");
    let b = gradient_id("chart2", "cpu");
    assert_eq!(a, "color-chart1-cpu");
    assert_ne!(a, b);
}

#[test]
fn tooltip_for_second_point_of_single_series() {
    let data = ChartData::Single {
        points: vec![pt("10:00", 42.0), pt("10:05", 58.0)],
        label: "CPU".to_owned(),
        color: DEFAULT_COLOR.to_owned(),
    };
    let rows = data.rows();
    let tip = tooltip(&rows[1], &data.series(), "%");
    assert_eq!(tip.time, "10:05");
    assert_eq!(tip.entries.len(), 1);
    assert_eq!(tip.entries[0].name, "CPU");
    assert_eq!(tip.entries[0].text, "58%");
}

#[test]
fn tooltip_skips_series_without_sample() {
    let a = Series::new("a", "A", "#111111", vec![pt("t1", 12.4)]);
    let b = Series::new("b", "B", "#222222", vec![pt("t2", 3.0)]);
    let series = vec![a, b];
    let rows = merge_series(&series);
    let tip = tooltip(&rows[0], &series, "%");
    assert_eq!(tip.entries.len(), 1);
    assert_eq!(tip.entries[0].text, "12%");
}

#[test]
fn series_deserializes_from_json_fixture() {
    let raw = r##"{"key":"mem","name":"Memory","color":"#8b5cf6","points":[{"time":"10:00","value":68.5}]}"##;
    let series: Series = serde_json::from_str(raw).unwrap();
    assert_eq!(series.key, "mem");
    assert_eq!(series.points[0], pt("10:00", 68.5));
}
