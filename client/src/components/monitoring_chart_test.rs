use charts::{SINGLE_SERIES_KEY, gradient_id};

use super::*;

fn points(samples: &[(&str, f64)]) -> Vec<SeriesPoint> {
    samples.iter().map(|(t, v)| SeriesPoint::new(*t, *v)).collect()
}

#[test]
fn chart_ids_differ_per_instance() {
    let a = new_chart_id();
    let b = new_chart_id();
    assert_ne!(a, b);
    assert_ne!(gradient_id(&a, "cpu"), gradient_id(&b, "cpu"));
    assert!(!a.contains('-'));
}

#[test]
fn single_input_uses_defaults() {
    let input = resolve_chart_data(Some(points(&[("10:00", 42.0)])), None, None, None);
    let series = input.series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].key, SINGLE_SERIES_KEY);
    assert_eq!(series[0].name, DEFAULT_LABEL);
    assert_eq!(series[0].color, DEFAULT_COLOR);
}

#[test]
fn single_input_honours_label_and_color() {
    let input = resolve_chart_data(
        Some(points(&[("10:00", 42.0)])),
        None,
        Some("GPU".to_owned()),
        Some("#EF4444".to_owned()),
    );
    let series = input.series();
    assert_eq!(series[0].name, "GPU");
    assert_eq!(series[0].color, "#EF4444");
}

#[test]
fn series_input_takes_precedence_over_data() {
    let multi = vec![Series::new("cpu", "CPU", "#1B58F4", points(&[("10:05", 1.0)]))];
    let input = resolve_chart_data(Some(points(&[("10:00", 42.0)])), Some(multi), None, None);
    let rows = input.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value("cpu"), Some(1.0));
}

#[test]
fn missing_input_is_empty_chart() {
    let input = resolve_chart_data(None, None, None, None);
    assert!(input.series().is_empty());
    assert!(input.rows().is_empty());
}
