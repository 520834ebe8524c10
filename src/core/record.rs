//! Backing file format.
//!
//! One credential per line, `Kind,identity,secret,target`, comma separated,
//! no header and no quoting.

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::constants::{DELIMITER, RECORD_FIELDS};
use crate::core::domain::{Credential, Kind};

/// Why a line did not produce a credential.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineIssue {
    #[error("blank line")]
    Blank,

    #[error("unknown record type '{0}'")]
    UnknownKind(String),

    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("line is not valid UTF-8")]
    Encoding,
}

/// Parse a single record line (without its line terminator).
pub fn parse_line(line: &str) -> Result<Credential, LineIssue> {
    if line.trim().is_empty() {
        return Err(LineIssue::Blank);
    }

    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let kind =
        Kind::from_tag(fields[0]).ok_or_else(|| LineIssue::UnknownKind(fields[0].to_string()))?;

    if fields.len() != RECORD_FIELDS {
        return Err(LineIssue::FieldCount(fields.len()));
    }

    Ok(Credential::new(kind, fields[1], fields[2], fields[3]))
}

/// Decode one raw line, dropping a trailing carriage return.
fn decode_line(raw: &[u8]) -> Result<Credential, LineIssue> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = std::str::from_utf8(raw).map_err(|_| LineIssue::Encoding)?;
    parse_line(line)
}

/// Parse a whole file, skipping lines that do not hold a credential.
///
/// Each line is decoded on its own, so one line in a legacy code page does
/// not cost the rest of the file. Unknown record types are skipped quietly.
/// Undecodable lines and lines with the wrong number of fields are skipped
/// with a warning.
pub fn decode(contents: &[u8]) -> Vec<Credential> {
    let mut credentials = Vec::new();

    for (idx, raw) in contents.split(|&b| b == b'\n').enumerate() {
        match decode_line(raw) {
            Ok(credential) => credentials.push(credential),
            Err(LineIssue::Blank) => {}
            Err(issue @ LineIssue::UnknownKind(_)) => {
                debug!(line = idx + 1, %issue, "skipping record");
            }
            Err(issue) => {
                warn!(line = idx + 1, %issue, "skipping malformed record");
            }
        }
    }

    credentials
}

/// Serialize credentials in order, one line each.
pub fn encode(credentials: &[Credential]) -> String {
    credentials.iter().map(Credential::to_record).collect()
}
