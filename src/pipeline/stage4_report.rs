use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ledger::ScoreLedger;
use crate::model::geometry::ChartGeometry;
use crate::pipeline::stage1_replay::{Rejection, ReplayCounters};
use crate::pipeline::stage2_project::Projection;
use crate::pipeline::stage3_classify::Classification;
use crate::report::json::render_summary_json;
use crate::report::messages::{Locale, MessageCatalog};
use crate::report::text::render_report_text;
use crate::report::{
    ChartSummary, EntryLine, InputMeta, LedgerSummary, ProgressSummary, RejectionSummary,
    ReportContext, ReportError, SummaryData, ToolMeta, format_f64_6, format_value, ledger_stats,
};

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub ledger: &'a ScoreLedger,
    pub counters: ReplayCounters,
    pub rejections: &'a [Rejection],
    pub projection: &'a Projection,
    pub classification: Option<Classification>,
    pub catalog: &'a MessageCatalog,
    pub locale: Locale,
    pub geometry: &'a ChartGeometry,

    pub input_path: String,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage4Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    write_grades_tsv(input, &out_dir.join("grades.tsv"))?;
    write_chart_tsv(input, &out_dir.join("chart.tsv"))?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report_ctx = build_report_context(input);
    let report = render_report_text(&report_ctx);
    write_text(&out_dir.join("report.txt"), &report)?;

    tracing::info!(
        out_dir = %out_dir.display(),
        entries = input.ledger.len(),
        chart = summary.chart.status,
        "reports written"
    );

    Ok(())
}

fn write_grades_tsv(input: &Stage4Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "id\tlabel\tdate\tvalue")?;
    for entry in input.ledger.entries() {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            entry.id(),
            tsv_field(entry.label()),
            tsv_field(entry.date()),
            format_value(entry.value())
        )?;
    }
    w.flush()
}

fn write_chart_tsv(input: &Stage4Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "kind\tkey\tx\ty\tlabel\tlabel_x\tlabel_y")?;
    if let Some(chart) = input.projection.chart() {
        for p in &chart.points {
            writeln!(
                w,
                "point\t{}\t{}\t{}\t{}\t{}\t{}",
                p.id,
                format_f64_6(p.x),
                format_f64_6(p.y),
                tsv_field(&p.label),
                format_f64_6(p.label_x),
                format_f64_6(p.label_y)
            )?;
        }
        for g in &chart.gridlines {
            let mark = format_value(g.mark);
            writeln!(
                w,
                "grid\t{}\t{}\t{}\t{}\t{}\t{}",
                mark,
                format_f64_6(g.x1),
                format_f64_6(g.y),
                mark,
                format_f64_6(g.label_x),
                format_f64_6(g.label_y)
            )?;
        }
    }
    w.flush()
}

pub fn build_summary(input: &Stage4Input<'_>) -> SummaryData {
    let values = input.ledger.values();

    let rejections = input
        .rejections
        .iter()
        .map(|r| RejectionSummary {
            line: r.line,
            raw: r.raw.clone(),
            reason: r.error.reason(),
            message: r.error.to_string(),
        })
        .collect();

    let status = if input.projection.is_insufficient() {
        "insufficient_data"
    } else {
        "ok"
    };
    let chart = match input.projection.chart() {
        Some(chart) => ChartSummary {
            status,
            points: chart.points.clone(),
            gridlines: chart.gridlines.clone(),
            polyline: Some(chart.polyline_points()),
        },
        None => ChartSummary {
            status,
            points: Vec::new(),
            gridlines: Vec::new(),
            polyline: None,
        },
    };

    let progress = match input.classification {
        Some(c) => ProgressSummary {
            verdict: Some(c.trend),
            message: input.catalog.verdict_message(c.trend).to_string(),
            previous: Some(c.previous),
            latest: Some(c.latest),
            delta: Some(c.delta()),
        },
        None => ProgressSummary {
            verdict: None,
            message: input.catalog.insufficient_title.to_string(),
            previous: None,
            latest: None,
            delta: None,
        },
    };

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputMeta {
            path: input.input_path.clone(),
            locale: input.locale,
            bounds: input.ledger.bounds(),
            geometry: input.geometry.clone(),
        },
        ledger: LedgerSummary {
            n_entries: values.len(),
            counters: input.counters,
            rejections,
            stats: ledger_stats(&values),
        },
        chart,
        progress,
    }
}

fn build_report_context(input: &Stage4Input<'_>) -> ReportContext {
    let entries = input
        .ledger
        .entries()
        .iter()
        .map(|e| EntryLine {
            id: e.id().to_string(),
            label: e.label().to_string(),
            date: e.date().to_string(),
            value: e.value(),
        })
        .collect();
    let verdict = input.classification.map(|c| c.trend);

    ReportContext {
        title: input.catalog.report_title,
        labels: input.catalog.labels,
        entries,
        stats: ledger_stats(&input.ledger.values()),
        rejected: input.counters.rejected,
        chart_points: input.projection.chart().map_or(0, |c| c.points.len()),
        verdict,
        verdict_message: verdict.map(|t| input.catalog.verdict_message(t)),
        insufficient_title: input.catalog.insufficient_title,
        insufficient_hint: input.catalog.insufficient_hint,
    }
}

fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
