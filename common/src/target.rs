//! # Target Model
//!
//! Organization names fed to the intelligence tool.
//!
//! A targets file holds one organization per line. Lines often carry a
//! domain-like suffix (`acme.com`), which is stripped before the name is
//! used as a query:
//! * `acme.com` queries `acme`.
//! * `acme.co.uk` queries `acme.co` (only the last suffix goes).
//! * `.hidden` queries `.hidden` (a leading dot is not a suffix).

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::ReconError;
use crate::warn;

/// A single organization to gather intelligence on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    raw: String,
}

impl Target {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The line exactly as it appeared in the targets file.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The name handed to the intelligence tool.
    pub fn query_name(&self) -> &str {
        strip_extension(&self.raw)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Target {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Removes everything from the last `.` onwards, unless that `.` is the first character.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

/// Reads a newline-delimited targets file.
pub fn read_targets(path: &Path) -> Result<Vec<Target>, ReconError> {
    let content = fs::read_to_string(path).map_err(|source| ReconError::TargetsFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_targets(&content))
}

/// Splits file content into targets.
///
/// Trailing empty lines are dropped. Blank lines in the middle of the file
/// would query an empty organization, so they are skipped with a warning.
pub fn parse_targets(content: &str) -> Vec<Target> {
    let mut lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut targets = Vec::with_capacity(lines.len());
    for (idx, line) in lines.into_iter().enumerate() {
        if line.trim().is_empty() {
            warn!("Skipping blank line {} in targets file", idx + 1);
            continue;
        }
        targets.push(Target::new(line));
    }
    targets
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
