use crate::config::InstallConfig;
use crate::discovery::discover_recipes;
use crate::error::InstallError;
use crate::profile::profile_path;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use vio_kernel::BuildType;
use vio_kernel::process::{CommandRunner, ToolCommand};

/// Result of one `conan install` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    Installed,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeOutcome {
    pub recipe: PathBuf,
    pub status: InstallStatus,
}

/// Per-recipe outcomes of an installer run, in invocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub profile: PathBuf,
    pub outcomes: Vec<RecipeOutcome>,
}

impl InstallReport {
    pub fn installed(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|o| o.status == InstallStatus::Installed)
            .map(|o| o.recipe.as_path())
    }

    pub fn failed(&self) -> impl Iterator<Item = &RecipeOutcome> {
        self.outcomes.iter().filter(|o| matches!(o.status, InstallStatus::Failed(_)))
    }
}

/// Drives `conan install` over every recipe of a workspace.
#[derive(Debug)]
pub struct Installer<R> {
    config: InstallConfig,
    runner: R,
}

impl<R: CommandRunner> Installer<R> {
    pub const fn new(config: InstallConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Installs dependencies for every recipe below `root`.
    ///
    /// `tooling_dir` anchors profile resolution (see [`profile_path`]). Each child
    /// runs in the absolute `root` with the configured home variable pointing at
    /// it. Invocation failures are logged and recorded; they never abort the loop.
    ///
    /// # Errors
    /// Returns an error only when the run cannot start: `root` cannot be made
    /// absolute or scanned, or `tooling_dir` has no parent.
    pub fn run(
        &self,
        root: &Path,
        tooling_dir: &Path,
        build_type: BuildType,
        profile: &str,
    ) -> Result<InstallReport, InstallError> {
        let profile = profile_path(tooling_dir, profile)?;
        if !profile.is_file() {
            warn!("Profile '{}' does not exist", profile.display());
        }

        // Not canonicalize: on Windows that yields `\\?\` paths the tools reject.
        let root = std::path::absolute(root).map_err(|source| InstallError::WorkingDirectory {
            path: root.to_path_buf(),
            source,
        })?;

        let recipes = discover_recipes(&root, &self.config.cache_dir)?;
        if recipes.is_empty() {
            info!("No recipes found below {}", root.display());
        }

        let mut report = InstallReport { profile: profile.clone(), outcomes: Vec::new() };

        for recipe in recipes {
            info!("-- install: {}", recipe.display());
            let command = self.command(&recipe, build_type, &profile, &root);

            let status = match self.runner.run(&command) {
                Ok(()) => InstallStatus::Installed,
                Err(err) => {
                    error!("Unhandled Exception: {err}");
                    InstallStatus::Failed(err.to_string())
                },
            };
            report.outcomes.push(RecipeOutcome { recipe, status });
        }

        let failed = report.failed().count();
        info!(
            "Processed {} recipe(s): {} installed, {failed} failed",
            report.outcomes.len(),
            report.outcomes.len() - failed
        );

        Ok(report)
    }

    /// Builds the `conan install` invocation for one recipe, run from `root`.
    #[must_use]
    pub fn command(
        &self,
        recipe: &Path,
        build_type: BuildType,
        profile: &Path,
        root: &Path,
    ) -> ToolCommand {
        ToolCommand::new(&self.config.program)
            .arg("install")
            .arg(recipe)
            .args(["--install-folder", self.config.install_folder.as_str()])
            .arg("--settings")
            .arg(format!("build_type={build_type}"))
            .arg("--profile")
            .arg(profile)
            .args(["--build", self.config.build_policy.as_str()])
            .env(&self.config.home_env, root)
            .current_dir(root)
    }
}
