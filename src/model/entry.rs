use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// One recorded assessment result. Fields are fixed at creation; the ledger
/// is the only place entries are built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    id: EntryId,
    value: f64,
    date: String,
    label: String,
}

impl ScoreEntry {
    pub(crate) fn new(id: EntryId, value: f64, date: String, label: String) -> Self {
        Self {
            id,
            value,
            date,
            label,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/entry.rs"]
mod tests;
