//! Typed error definitions for spit.
//! Separates per-token resolution misses from failures that abort the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// Token fits neither the ticket-code nor the bare-number shape.
    #[error("couldn't match '{0}' to any known pattern")]
    UnknownPattern(String),

    /// The derived glob matched nothing in the source folder.
    #[error("didn't find any matching file for '{0}'")]
    NoMatch(String),

    /// The derived glob failed to compile. Fragments only contain word
    /// characters and hyphens, so hitting this means a resolver bug.
    #[error(transparent)]
    Pattern(#[from] globset::Error),
}

impl ResolveError {
    /// Misses are skipped with a warning; anything else aborts the run.
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            ResolveError::UnknownPattern(_) | ResolveError::NoMatch(_)
        )
    }
}
