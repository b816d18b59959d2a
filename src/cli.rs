//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - `-lr` is not its own flag: clap bundles it into `-l -r`, which lists
//!   the spit folder because reversal swaps the pair before listing.
//! - --debug is a shorthand for --log-level debug.

use clap::Parser;

use crate::config::LogLevel;

/// Shuttle fixes between the patches folder (patching-tool/patches) and the
/// spit folder (patching-tool/spit), and vice-versa with `-r`.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move fixes between patching-tool/patches and patching-tool/spit",
    after_help = "Token expansion:\n  1234       -> *hotfix-1234*\n  de-6       -> *de-6*\n  portal-45  -> *portal-45*\n\nShort flags bundle, so `-lr` lists the spit folder (same as `-l -r`)."
)]
pub struct Args {
    /// Move every entry in the source folder, by its exact current name.
    #[arg(short = 'a', long)]
    pub all: bool,

    /// List the source folder contents and exit; with `-r`, lists the spit folder.
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Reverse direction: treat the spit folder as the source.
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Tokens to resolve against the source folder (e.g. `1234`, `de-6`).
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }
}

pub fn parse() -> Args {
    Args::parse()
}
