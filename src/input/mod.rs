use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod script;

use script::{SessionScript, parse_script};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_session_script(path: &Path) -> Result<SessionScript, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "session script not found: {}",
            path.display()
        )));
    }

    let reader = open_maybe_gz(path)?;
    let script = parse_script(reader)?;

    tracing::info!(
        path = %path.display(),
        actions = script.actions.len(),
        "loaded session script"
    );

    Ok(script)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
