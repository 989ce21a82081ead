//! Manifest reading: one input-file path per line.

use std::path::Path;

use crate::error::Result;

/// Read a manifest text file into an ordered list of trimmed lines.
/// Empty lines are kept (as empty strings) so line numbering survives.
/// With `fast` set, only the first two entries are returned (smoke-test
/// mode).
pub fn read_file_manifest(path: impl AsRef<Path>, fast: bool) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let mut infiles: Vec<String> = text.lines().map(|l| l.trim().to_string()).collect();
    if fast {
        infiles.truncate(2);
    }
    Ok(infiles)
}
