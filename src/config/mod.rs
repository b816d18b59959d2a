//! Runtime configuration.
//! Provides the folder pair and verbosity types; the folders themselves are
//! fixed relative to the working directory and are not configurable.

pub mod types;

pub use types::{LogLevel, Paths};

/// Where fixes wait to be staged.
pub const PATCHES_DIR: &str = "patching-tool/patches";
/// Scratch folder fixes are spat into (created on demand).
pub const SPIT_DIR: &str = "patching-tool/spit";
