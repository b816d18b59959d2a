//! Directory listing.

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use super::dir_entry_names;
use crate::output as out;

/// Print the contents of `dir`, one `>>`-prefixed name per line, sorted.
///
/// An empty folder prints a single "No files found" line instead of a
/// header. An unreadable folder is an error.
pub fn list_dir(dir: &Path) -> Result<()> {
    let mut names = dir_entry_names(dir)?;
    if names.is_empty() {
        out::print_user(&format!("No files found in {}", dir.display()));
        return Ok(());
    }

    names.sort();
    debug!(count = names.len(), dir = %dir.display(), "listing directory");

    out::print_user(&format!("Listing files in {}:", dir.display()));
    for name in names {
        out::print_user(&format!(">> {}", name.to_string_lossy()));
    }
    Ok(())
}
