use serde::Deserialize;
use vio_coverage::CoverageConfig;
use vio_install::InstallConfig;
use vio_logger::LoggingConfig;
use vio_recipe::RecipeConfig;

/// Root of `vio.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ToolingConfig {
    pub logging: LoggingConfig,
    pub install: InstallConfig,
    pub coverage: CoverageConfig,
    pub recipe: RecipeConfig,
}
