use serde::Deserialize;
use std::path::PathBuf;

/// The `[coverage]` section of the tooling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// `gcovr` executable.
    pub program: String,
    /// Report directory, relative to the working directory.
    pub output_dir: PathBuf,
    /// Title of the HTML report.
    pub title: String,
    /// Regex limiting the report to the library sources.
    pub filter: String,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            program: "gcovr".to_owned(),
            output_dir: PathBuf::from("unit_tests/coverage"),
            title: "video_io".to_owned(),
            filter: ".*video_io.*".to_owned(),
        }
    }
}
