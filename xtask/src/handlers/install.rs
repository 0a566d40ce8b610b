use crate::services::utils::{tooling_dir, working_dir};
use anyhow::{Context, Result};
use vio_install::{InstallConfig, Installer};
use vio_kernel::BuildType;
use vio_kernel::process::SystemRunner;

/// Installs Conan dependencies for every recipe below the working directory.
///
/// # Result
/// Returns `Ok(())` once every recipe has been attempted, even if some installs failed;
/// failures are logged.
///
/// # Errors
/// Returns an error if the working directory cannot be resolved or scanned.
pub fn run_install(config: &InstallConfig, build_type: BuildType, profile: &str) -> Result<()> {
    let root = working_dir()?;
    let installer = Installer::new(config.clone(), SystemRunner);

    let report = installer
        .run(&root, tooling_dir(), build_type, profile)
        .with_context(|| format!("Failed to install dependencies in {}", root.display()))?;

    if report.outcomes.is_empty() {
        println!("ℹ️ No recipes found in '{}'.", root.display());
    }
    for failed in report.failed() {
        println!("⚠️  {} was not installed.", failed.recipe.display());
    }

    Ok(())
}
