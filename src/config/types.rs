//! Core configuration types.
//! - Paths holds the immutable source/destination pair for one invocation.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{PATCHES_DIR, SPIT_DIR};

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// The folder pair for one invocation.
///
/// Direction is decided once at construction; afterwards the pair is
/// immutable and passed explicitly to every operation that needs it.
#[derive(Debug, Clone)]
pub struct Paths {
    source: PathBuf,
    destination: PathBuf,
}

impl Paths {
    /// Forward pair moves patches -> spit; with `reverse`, spit -> patches.
    pub fn for_direction(reverse: bool) -> Self {
        let patches = PathBuf::from(PATCHES_DIR);
        let spit = PathBuf::from(SPIT_DIR);
        if reverse {
            Self {
                source: spit,
                destination: patches,
            }
        } else {
            Self {
                source: patches,
                destination: spit,
            }
        }
    }

    /// Construct an explicit pair (library callers and tests).
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
