//! Filesystem operations: resolution, moves and listing.

mod file_move;
mod helpers;
mod list;
mod resolve;

pub use file_move::move_file;
pub use list::list_dir;
pub use resolve::resolve_token;

use anyhow::Result;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::Paths;
use helpers::io_error_with_help;

/// Create the destination folder if it is missing. Idempotent; runs once
/// before any move-performing path.
pub fn ensure_destination(paths: &Paths) -> Result<()> {
    let dest = paths.destination();
    if !dest.exists() {
        fs::create_dir_all(dest)
            .map_err(io_error_with_help("create destination directory", dest))?;
        debug!(path = %dest.display(), "created destination directory");
    }
    Ok(())
}

/// Names of every entry in `dir`, in directory-enumeration order.
/// An unreadable directory is an error; list and move-all callers treat
/// that as fatal.
pub fn dir_entry_names(dir: &Path) -> Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error_with_help("read directory", dir))? {
        let entry = entry.map_err(io_error_with_help("read directory entry", dir))?;
        names.push(entry.file_name());
    }
    Ok(names)
}
