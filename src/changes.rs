//! Reading frequency changes: one signed decimal integer per line.

use failure::Error;
use std::path::Path;
use std::str::FromStr;

use CalibrationError;

/// Where the puzzle input lives, relative to the working directory.
pub const DEFAULT_INPUT: &'static str = "input/input.txt";

/// Parse a single change like `+7` or `-13`. Surrounding whitespace is
/// ignored. `line` is only used for error reporting.
pub fn parse_change(line: usize, text: &str) -> Result<i64, CalibrationError> {
    i64::from_str(text.trim()).map_err(|_| CalibrationError::BadChange {
        line,
        text: text.to_owned(),
    })
}

/// Parse a whole input. Trailing whitespace is dropped before splitting into
/// lines; every remaining line must hold a change, so a blank line in the
/// middle is an error. An entirely blank input has no changes.
pub fn parse_changes(input: &str) -> Result<Vec<i64>, CalibrationError> {
    let input = input.trim_end();
    if input.is_empty() {
        return Ok(vec![]);
    }

    input
        .split('\n')
        .enumerate()
        .map(|(i, line)| parse_change(i + 1, line))
        .collect()
}

pub fn read_changes<P: AsRef<Path>>(path: P) -> Result<Vec<i64>, Error> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path)
        .map_err(|e| format_err!("reading {}: {}", path.display(), e))?;

    let changes = parse_changes(&input)?;
    debug!("read {} changes from {}", changes.len(), path.display());
    Ok(changes)
}
