use super::*;
use crate::ledger::FixedDate;
use crate::model::geometry::ScoreBounds;

const EPS: f64 = 1e-9;

fn ledger_with(values: &[f64]) -> ScoreLedger {
    let mut ledger = ScoreLedger::new(
        ScoreBounds::twenty_point(),
        Box::new(FixedDate("2026-10-19".to_string())),
    );
    for v in values {
        ledger.insert_value(*v, None).unwrap();
    }
    ledger
}

#[test]
fn test_insufficient_data_below_two_entries() {
    let g = ChartGeometry::default_v1();
    let empty = ledger_with(&[]);
    assert_eq!(
        run_stage2(&empty, &g),
        Projection::InsufficientData { n_entries: 0 }
    );
    let single = ledger_with(&[0.0]);
    let p = run_stage2(&single, &g);
    assert!(p.is_insufficient());
    assert!(p.chart().is_none());
}

#[test]
fn test_two_points_span_plot_width() {
    let g = ChartGeometry::default_v1();
    let ledger = ledger_with(&[0.0, 20.0]);
    let chart = run_stage2(&ledger, &g).chart().cloned().unwrap();
    assert_eq!(chart.points.len(), 2);
    assert!((chart.points[0].x - 40.0).abs() < EPS);
    assert!((chart.points[0].y - 160.0).abs() < EPS);
    assert!((chart.points[1].x - 360.0).abs() < EPS);
    assert!((chart.points[1].y - 40.0).abs() < EPS);
}

#[test]
fn test_point_formula() {
    let g = ChartGeometry::default_v1();
    let values = [12.0, 15.5, 9.25, 18.0, 20.0];
    let ledger = ledger_with(&values);
    let chart = run_stage2(&ledger, &g).chart().cloned().unwrap();

    let n = values.len() as f64;
    for (i, (point, value)) in chart.points.iter().zip(values).enumerate() {
        let x = 40.0 + i as f64 * (400.0 - 80.0) / (n - 1.0);
        let y = (200.0 - 40.0) - (value / 20.0) * (200.0 - 80.0);
        assert!((point.x - x).abs() < EPS);
        assert!((point.y - y).abs() < EPS);
        assert_eq!(point.value, value);
        assert_eq!(point.id, ledger.entries()[i].id());
    }
}

#[test]
fn test_gridlines_share_vertical_mapping() {
    let g = ChartGeometry::default_v1();
    let lines = gridlines(&g);
    let ys: Vec<f64> = lines.iter().map(|l| l.y).collect();
    let expected = [160.0, 130.0, 100.0, 70.0, 40.0];
    for (y, e) in ys.iter().zip(expected) {
        assert!((y - e).abs() < EPS);
    }
    assert!(lines.iter().all(|l| l.x1 == 40.0 && l.x2 == 360.0));

    let ledger = ledger_with(&[5.0, 10.0]);
    let chart = run_stage2(&ledger, &g).chart().cloned().unwrap();
    assert_eq!(chart.gridlines, lines);
    assert!((chart.points[0].y - lines[1].y).abs() < EPS);
}

#[test]
fn test_projection_is_deterministic() {
    let g = ChartGeometry::default_v1();
    let ledger = ledger_with(&[3.0, 17.75, 11.5, 0.0, 19.25, 8.0, 14.0]);
    let a = run_stage2(&ledger, &g);
    let b = run_stage2(&ledger, &g);
    assert_eq!(a, b);
    let (a, b) = (a.chart().unwrap(), b.chart().unwrap());
    for (p, q) in a.points.iter().zip(&b.points) {
        assert!((p.x - q.x).abs() < EPS && (p.y - q.y).abs() < EPS);
    }
}

#[test]
fn test_projection_follows_removals() {
    let g = ChartGeometry::default_v1();
    let mut ledger = ledger_with(&[10.0, 4.0, 16.0]);
    let middle = ledger.entries()[1].id();
    ledger.remove(middle);
    let chart = run_stage2(&ledger, &g).chart().cloned().unwrap();
    assert_eq!(chart.points.len(), 2);
    assert!((chart.points[1].x - 360.0).abs() < EPS);
    assert_eq!(chart.points[1].value, 16.0);
}

#[test]
fn test_polyline_points_format() {
    let g = ChartGeometry::default_v1();
    let ledger = ledger_with(&[10.0, 20.0]);
    let chart = run_stage2(&ledger, &g).chart().cloned().unwrap();
    assert_eq!(chart.polyline_points(), "40,100 360,40");
}

#[test]
fn test_label_anchors_follow_original_layout() {
    let g = ChartGeometry::default_v1();
    let mut ledger = ledger_with(&[]);
    ledger.insert("18", Some("Quiz 1")).unwrap();
    ledger.insert("15", None).unwrap();
    let chart = run_stage2(&ledger, &g).chart().cloned().unwrap();

    assert_eq!(chart.points[0].label, "Quiz 1");
    assert_eq!(chart.points[1].label, "Test 2");
    for p in &chart.points {
        assert_eq!(p.label_x, p.x);
        assert!((p.label_y - 180.0).abs() < EPS);
    }

    for line in &chart.gridlines {
        assert!((line.label_x - 30.0).abs() < EPS);
        assert!((line.label_y - (line.y + 4.0)).abs() < EPS);
    }
    assert!((chart.gridlines[2].label_y - 104.0).abs() < EPS);
}
