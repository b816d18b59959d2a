//! Application orchestrator.
//! Initializes logging, builds the folder pair, and dispatches the requested
//! mode: list, move-all, or per-token resolve+move. Every failure travels
//! back here as a Result; main decides the exit code.

use anyhow::{bail, Result};
use tracing::{debug, error, info};

use spit::cli::Args;
use spit::config::Paths;
use spit::fs_ops;
use spit::output as out;

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    init_tracing(&args.effective_log_level())?;

    debug!("Starting spit: {:?}", args);

    // Reversal is decided here once; nothing downstream mutates the pair.
    let paths = Paths::for_direction(args.reverse);

    // `-lr` bundles to `-l -r`, so listing the (possibly swapped) source
    // covers plain listing and spit-folder listing alike.
    if args.list {
        return fs_ops::list_dir(paths.source());
    }

    if args.all {
        fs_ops::ensure_destination(&paths)?;
        return move_all(&paths);
    }

    if args.tokens.is_empty() {
        bail!("nothing to do: no tokens and no mode flag (see --help)");
    }

    fs_ops::ensure_destination(&paths)?;

    for token in &args.tokens {
        match fs_ops::resolve_token(paths.source(), token) {
            Ok(name) => {
                let (src, dest) = fs_ops::move_file(&paths, &name)?;
                out::print_user(&format!("Moving: {} -> {}", src.display(), dest.display()));
            }
            Err(e) if e.is_miss() => {
                info!(token = %token, reason = %e, "skipping token");
                out::print_warn(&format!("Ignoring '{token}': {e}"));
            }
            Err(e) => {
                error!(token = %token, error = %e, "failed to build a match pattern");
                return Err(e.into());
            }
        }
    }

    Ok(())
}

/// Move every entry of the source folder by its current name. Literal names
/// go straight to the mover; token resolution is not involved.
fn move_all(paths: &Paths) -> Result<()> {
    for name in fs_ops::dir_entry_names(paths.source())? {
        let (src, dest) = fs_ops::move_file(paths, &name)?;
        out::print_user(&format!("Moving: {} -> {}", src.display(), dest.display()));
    }
    Ok(())
}
