//! File move implementation.
//! One rename across the folder pair; any failure aborts the run.

use anyhow::Result;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use super::helpers::io_error_with_help;
use crate::config::Paths;

/// Move `name` from the source folder to the destination folder, keeping
/// the filename. Returns the full (source, destination) paths on success.
///
/// The rename has no retry and no copy fallback: both folders live under
/// the same `patching-tool` parent, so a failure means something is
/// genuinely wrong (missing file, permissions) and the run stops. Files
/// moved by earlier tokens in the same invocation stay where they landed.
pub fn move_file(paths: &Paths, name: &OsStr) -> Result<(PathBuf, PathBuf)> {
    let src = paths.source().join(name);
    let dest = paths.destination().join(name);

    fs::rename(&src, &dest).map_err(io_error_with_help("move file", &src))?;

    info!(src = %src.display(), dest = %dest.display(), "renamed file");
    Ok((src, dest))
}
