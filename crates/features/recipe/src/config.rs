use serde::Deserialize;
use std::path::PathBuf;

/// The `[recipe]` section of the tooling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecipeConfig {
    /// CMake executable.
    pub cmake: String,
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub package_dir: PathBuf,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            cmake: "cmake".to_owned(),
            source_dir: PathBuf::from("."),
            build_dir: PathBuf::from("build"),
            package_dir: PathBuf::from("package"),
        }
    }
}
