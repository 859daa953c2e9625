use serde::Serialize;

use crate::input::script::{Action, SessionScript};
use crate::ledger::{LedgerError, ScoreLedger};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplayCounters {
    pub added: usize,
    pub rejected: usize,
    pub removed: usize,
    pub remove_misses: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub line: usize,
    pub raw: String,
    pub error: LedgerError,
}

#[derive(Debug)]
pub struct Stage1Output {
    pub ledger: ScoreLedger,
    pub counters: ReplayCounters,
    pub rejections: Vec<Rejection>,
}

/// Applies the script to `ledger` in file order. Rejected inserts are
/// recorded and skipped; removals of unknown ids are counted silently.
pub fn run_stage1(script: &SessionScript, mut ledger: ScoreLedger) -> Stage1Output {
    let mut counters = ReplayCounters::default();
    let mut rejections = Vec::new();

    for step in &script.actions {
        match &step.action {
            Action::Add { raw, label } => match ledger.insert(raw, label.as_deref()) {
                Ok(entry) => {
                    counters.added += 1;
                    tracing::debug!(
                        line = step.line,
                        id = %entry.id(),
                        value = entry.value(),
                        label = entry.label(),
                        "score recorded"
                    );
                }
                Err(error) => {
                    counters.rejected += 1;
                    tracing::warn!(line = step.line, raw = %raw, "score rejected: {error}");
                    rejections.push(Rejection {
                        line: step.line,
                        raw: raw.clone(),
                        error,
                    });
                }
            },
            Action::Remove { id } => match ledger.remove(*id) {
                Some(entry) => {
                    counters.removed += 1;
                    tracing::debug!(line = step.line, id = %entry.id(), "score removed");
                }
                None => counters.remove_misses += 1,
            },
        }
    }

    tracing::info!(
        entries = ledger.len(),
        added = counters.added,
        rejected = counters.rejected,
        removed = counters.removed,
        "session replayed"
    );

    Stage1Output {
        ledger,
        counters,
        rejections,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_replay.rs"]
mod tests;
