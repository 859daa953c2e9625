use std::io::BufRead;

use crate::input::InputError;
use crate::model::entry::EntryId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add { raw: String, label: Option<String> },
    Remove { id: EntryId },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub action: Action,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionScript {
    pub actions: Vec<ScriptLine>,
}

pub fn parse_script(mut reader: impl BufRead) -> Result<SessionScript, InputError> {
    let mut buf = String::new();
    let mut actions = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        if let Some(action) = parse_line(line_no, &buf)? {
            actions.push(ScriptLine {
                line: line_no,
                action,
            });
        }
    }

    Ok(SessionScript { actions })
}

pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Action>, InputError> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return Ok(None);
    }

    let mut cols = line.split('\t');
    let op = cols.next().unwrap_or_default().trim();
    let value = cols.next();

    match op.to_ascii_lowercase().as_str() {
        "add" => {
            let raw = value.ok_or_else(|| parse_error(line_no, "add requires a score column"))?;
            let label = cols
                .next()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string);
            Ok(Some(Action::Add {
                raw: raw.to_string(),
                label,
            }))
        }
        "remove" => {
            let raw = value.ok_or_else(|| parse_error(line_no, "remove requires an id column"))?;
            let id = raw
                .parse::<EntryId>()
                .map_err(|e| parse_error(line_no, &format!("invalid entry id {raw:?}: {e}")))?;
            Ok(Some(Action::Remove { id }))
        }
        other => Err(parse_error(line_no, &format!("unknown action {other:?}"))),
    }
}

fn parse_error(line: usize, message: &str) -> InputError {
    InputError::Parse {
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/script.rs"]
mod tests;
