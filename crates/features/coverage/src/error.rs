use crate::compiler::Compiler;
use std::path::PathBuf;

/// Coverage failures that abort the run. A failing `gcovr` invocation is
/// not one of them; it is logged and reported in the
/// [`CoverageReport`](crate::CoverageReport).
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("Unsupported compiler for code coverage: {0}")]
    UnsupportedCompiler(Compiler),

    #[error("Failed to create coverage directory '{}': {source}", .path.display())]
    OutputDirectory { path: PathBuf, source: std::io::Error },
}
