use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Returns the directory of the xtask crate.
///
/// Profile lookup is anchored here rather than on the working directory.
#[must_use]
pub fn tooling_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Returns the current working directory.
///
/// # Errors
/// Returns an error if the working directory is missing or inaccessible.
pub fn working_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Could not determine the current working directory")
}

/// Resolves `path` against the working directory unless it is already absolute.
#[must_use]
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
