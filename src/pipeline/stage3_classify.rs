use serde::Serialize;

use crate::ledger::ScoreLedger;
use crate::model::entry::ScoreEntry;
use crate::model::trend::Trend;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub trend: Trend,
    pub previous: f64,
    pub latest: f64,
}

impl Classification {
    pub fn delta(&self) -> f64 {
        self.latest - self.previous
    }
}

pub fn run_stage3(ledger: &ScoreLedger) -> Option<Classification> {
    classify_progress(ledger.entries())
}

/// Compares the last two entries in insertion order. `None` below two entries.
pub fn classify_progress(entries: &[ScoreEntry]) -> Option<Classification> {
    let [.., previous, latest] = entries else {
        return None;
    };
    Some(Classification {
        trend: classify_step(previous.value(), latest.value()),
        previous: previous.value(),
        latest: latest.value(),
    })
}

pub fn classify_step(previous: f64, latest: f64) -> Trend {
    if latest >= previous {
        Trend::Improving
    } else {
        Trend::Declined
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
