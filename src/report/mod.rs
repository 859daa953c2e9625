pub mod json;
pub mod messages;
pub mod text;

use serde::Serialize;
use thiserror::Error;

use crate::model::geometry::{ChartGeometry, ScoreBounds};
use crate::model::trend::Trend;
use crate::pipeline::stage1_replay::ReplayCounters;
use crate::pipeline::stage2_project::{ChartPoint, Gridline};
use messages::{Locale, ReportLabels};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub path: String,
    pub locale: Locale,
    pub bounds: ScoreBounds,
    pub geometry: ChartGeometry,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectionSummary {
    pub line: usize,
    pub raw: String,
    pub reason: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedgerStats {
    pub mean: f64,
    pub median: f64,
    pub best: f64,
    pub worst: f64,
    pub latest: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerSummary {
    pub n_entries: usize,
    pub counters: ReplayCounters,
    pub rejections: Vec<RejectionSummary>,
    pub stats: Option<LedgerStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSummary {
    pub status: &'static str,
    pub points: Vec<ChartPoint>,
    pub gridlines: Vec<Gridline>,
    pub polyline: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    pub verdict: Option<Trend>,
    pub message: String,
    pub previous: Option<f64>,
    pub latest: Option<f64>,
    pub delta: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub ledger: LedgerSummary,
    pub chart: ChartSummary,
    pub progress: ProgressSummary,
}

#[derive(Debug, Clone)]
pub struct EntryLine {
    pub id: String,
    pub label: String,
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub title: &'static str,
    pub labels: ReportLabels,
    pub entries: Vec<EntryLine>,
    pub stats: Option<LedgerStats>,
    pub rejected: usize,
    pub chart_points: usize,
    pub verdict: Option<Trend>,
    pub verdict_message: Option<&'static str>,
    pub insufficient_title: &'static str,
    pub insufficient_hint: &'static str,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// A stored score exactly as recorded, shortest form: `18`, `19.999`.
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{}", v)
    }
}

/// Derived statistics only: up to two decimals, trailing zeros trimmed.
pub fn format_score(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn ledger_stats(values: &[f64]) -> Option<LedgerStats> {
    let latest = *values.last()?;
    let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let worst = values.iter().copied().fold(f64::INFINITY, f64::min);
    Some(LedgerStats {
        mean: mean(values),
        median: median(values),
        best,
        worst,
        latest,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
