use serde::Serialize;

use crate::ledger::ScoreLedger;
use crate::model::entry::{EntryId, ScoreEntry};
use crate::model::geometry::ChartGeometry;

pub const MIN_ENTRIES: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub id: EntryId,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gridline {
    pub mark: f64,
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub points: Vec<ChartPoint>,
    pub gridlines: Vec<Gridline>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    InsufficientData { n_entries: usize },
    Chart(TrendChart),
}

impl Projection {
    pub fn chart(&self) -> Option<&TrendChart> {
        match self {
            Projection::Chart(chart) => Some(chart),
            Projection::InsufficientData { .. } => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Projection::InsufficientData { .. })
    }
}

impl TrendChart {
    /// `"x,y x,y ..."`, the form a polyline `points` attribute takes.
    pub fn polyline_points(&self) -> String {
        let parts: Vec<String> = self
            .points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect();
        parts.join(" ")
    }
}

pub fn run_stage2(ledger: &ScoreLedger, geometry: &ChartGeometry) -> Projection {
    project_entries(ledger.entries(), geometry)
}

pub fn project_entries(entries: &[ScoreEntry], geometry: &ChartGeometry) -> Projection {
    let n = entries.len();
    if n < MIN_ENTRIES {
        return Projection::InsufficientData { n_entries: n };
    }

    let x_step = geometry.plot_width() / (n - 1) as f64;
    let points = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let x = geometry.padding + i as f64 * x_step;
            ChartPoint {
                id: entry.id(),
                value: entry.value(),
                x,
                y: geometry.y_for(entry.value()),
                label: entry.label().to_string(),
                label_x: x,
                label_y: geometry.point_label_y(),
            }
        })
        .collect();

    Projection::Chart(TrendChart {
        points,
        gridlines: gridlines(geometry),
    })
}

pub fn gridlines(geometry: &ChartGeometry) -> Vec<Gridline> {
    geometry
        .marks
        .iter()
        .map(|&mark| {
            let y = geometry.y_for(mark);
            Gridline {
                mark,
                x1: geometry.plot_left(),
                x2: geometry.plot_right(),
                y,
                label_x: geometry.mark_label_x(),
                label_y: geometry.mark_label_y(y),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_project.rs"]
mod tests;
