mod input;
mod ledger;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::load_session_script;
use crate::ledger::{DateStamper, FixedDate, LocalCalendar, ScoreLedger};
use crate::model::geometry::{ChartGeometry, ScoreBounds};
use crate::pipeline::stage1_replay::run_stage1;
use crate::pipeline::stage2_project::run_stage2;
use crate::pipeline::stage3_classify::run_stage3;
use crate::pipeline::stage4_report::{Stage4Input, write_reports};
use crate::report::messages::{Locale, MessageCatalog};

#[derive(Debug, Parser)]
#[command(name = "gradetrend")]
#[command(about = "Record assessment scores, project the grade trend chart and classify progress")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a session script and write grades.tsv, chart.tsv, summary.json and report.txt
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Session script (`add`/`remove` actions, tab-separated; `.gz` accepted)
    #[arg(long)]
    input: PathBuf,

    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Date label stamped on every entry instead of today's date
    #[arg(long)]
    date: Option<String>,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    logging::init(&args.log_level);

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), String> {
    let script = load_session_script(&args.input).map_err(|e| e.to_string())?;

    let catalog = MessageCatalog::for_locale(args.locale);
    let geometry = ChartGeometry::default_v1();
    let ledger = ScoreLedger::new(ScoreBounds::twenty_point(), date_stamper(args))
        .with_label_prefix(catalog.label_prefix);

    let stage1 = run_stage1(&script, ledger);
    if stage1.ledger.is_empty() {
        tracing::warn!(input = %args.input.display(), "session recorded no grades");
    }
    let projection = run_stage2(&stage1.ledger, &geometry);
    let classification = run_stage3(&stage1.ledger);

    match classification {
        Some(c) => tracing::info!(
            verdict = c.trend.name(),
            previous = c.previous,
            latest = c.latest,
            "progress classified"
        ),
        None => tracing::info!(
            entries = stage1.ledger.len(),
            "not enough grades for a trend yet"
        ),
    }

    let input = Stage4Input {
        ledger: &stage1.ledger,
        counters: stage1.counters,
        rejections: &stage1.rejections,
        projection: &projection,
        classification,
        catalog: &catalog,
        locale: args.locale,
        geometry: &geometry,
        input_path: args.input.display().to_string(),
        tool_name: "gradetrend".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    write_reports(&input, &args.out).map_err(|e| e.to_string())?;

    Ok(())
}

fn date_stamper(args: &RunArgs) -> Box<dyn DateStamper> {
    match &args.date {
        Some(label) => Box::new(FixedDate(label.clone())),
        None => Box::new(LocalCalendar),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
