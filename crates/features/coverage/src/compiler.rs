use crate::error::CoverageError;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, VariantNames};

/// Compilers accepted on the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum Compiler {
    #[strum(serialize = "gcc")]
    #[serde(rename = "gcc")]
    Gcc,
    #[strum(serialize = "clang")]
    #[serde(rename = "clang")]
    Clang,
    #[strum(serialize = "apple-clang")]
    #[serde(rename = "apple-clang")]
    AppleClang,
    #[strum(serialize = "Visual Studio")]
    #[serde(rename = "Visual Studio")]
    VisualStudio,
}

impl Compiler {
    /// Returns the `--gcov-executable` value for this compiler and version.
    ///
    /// # Errors
    /// Returns [`CoverageError::UnsupportedCompiler`] for Visual Studio, which
    /// produces no gcov data.
    pub fn coverage_tool(self, version: &str) -> Result<String, CoverageError> {
        match self {
            Self::Gcc => Ok(format!("gcov-{version}")),
            Self::Clang | Self::AppleClang => Ok(format!("llvm-cov-{version} gcov")),
            Self::VisualStudio => Err(CoverageError::UnsupportedCompiler(self)),
        }
    }
}
