pub mod clock;

use thiserror::Error;

use crate::model::entry::{EntryId, ScoreEntry};
use crate::model::geometry::ScoreBounds;

pub use clock::{DateStamper, FixedDate, LocalCalendar};

pub const DEFAULT_LABEL_PREFIX: &str = "Test";

/// Every variant is a validation rejection: the ledger is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("not a number: {raw:?}")]
    NotANumber { raw: String },
    #[error("score {value} outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

impl LedgerError {
    pub fn reason(&self) -> &'static str {
        match self {
            LedgerError::NotANumber { .. } => "not_a_number",
            LedgerError::OutOfRange { .. } => "out_of_range",
        }
    }
}

/// Ordered, session-scoped collection of score entries. Insertion order is
/// chronological order and chart order; nothing is ever reordered.
#[derive(Debug)]
pub struct ScoreLedger {
    entries: Vec<ScoreEntry>,
    next_id: u64,
    bounds: ScoreBounds,
    label_prefix: String,
    stamper: Box<dyn DateStamper>,
}

impl ScoreLedger {
    pub fn new(bounds: ScoreBounds, stamper: Box<dyn DateStamper>) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            bounds,
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            stamper,
        }
    }

    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    pub fn bounds(&self) -> ScoreBounds {
        self.bounds
    }

    /// Parses `raw` and inserts it. On error nothing is created.
    pub fn insert(&mut self, raw: &str, label: Option<&str>) -> Result<&ScoreEntry, LedgerError> {
        let value = parse_score(raw)?;
        self.insert_value(value, label)
    }

    pub fn insert_value(
        &mut self,
        value: f64,
        label: Option<&str>,
    ) -> Result<&ScoreEntry, LedgerError> {
        validate_score(value, self.bounds)?;
        // -0.0 is accepted by the bounds check but stored as 0.
        let value = if value == 0.0 { 0.0 } else { value };

        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        let label = match label.map(str::trim) {
            Some(given) if !given.is_empty() => given.to_string(),
            _ => default_label(&self.label_prefix, self.entries.len()),
        };
        let date = self.stamper.stamp();

        self.entries.push(ScoreEntry::new(id, value, date, label));
        let last = self.entries.len() - 1;
        Ok(&self.entries[last])
    }

    /// Removes the entry with `id`. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: EntryId) -> Option<ScoreEntry> {
        let pos = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(ScoreEntry::value).collect()
    }
}

pub fn default_label(prefix: &str, ledger_size: usize) -> String {
    format!("{} {}", prefix, ledger_size + 1)
}

pub fn parse_score(raw: &str) -> Result<f64, LedgerError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LedgerError::NotANumber {
            raw: raw.to_string(),
        }),
    }
}

pub fn validate_score(value: f64, bounds: ScoreBounds) -> Result<(), LedgerError> {
    if value.is_nan() {
        return Err(LedgerError::NotANumber {
            raw: value.to_string(),
        });
    }
    if !bounds.contains(value) {
        return Err(LedgerError::OutOfRange {
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/ledger/tests.rs"]
mod tests;
