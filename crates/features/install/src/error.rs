use std::path::PathBuf;

/// Installer setup failures. Failed `conan install` runs are not errors; they are
/// recorded in the [`InstallReport`](crate::InstallReport).
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("Tooling directory '{}' has no parent directory", .0.display())]
    NoParent(PathBuf),

    #[error("Failed to resolve working directory '{}': {source}", .path.display())]
    WorkingDirectory { path: PathBuf, source: std::io::Error },

    #[error("Failed to scan '{}' for recipes: {source}", .root.display())]
    Discovery { root: PathBuf, source: walkdir::Error },
}
