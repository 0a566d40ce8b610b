use anyhow::Result;
use vio_coverage::{Compiler, CoverageConfig, CoverageRunner};
use vio_kernel::process::SystemRunner;

/// Generates the coverage reports for the given compiler.
///
/// # Result
/// Returns `Ok(())` whether or not `gcovr` succeeded; a failed run is logged.
///
/// # Errors
/// Returns an error for unsupported compilers or if the report directory cannot be created.
pub fn run_coverage(config: &CoverageConfig, compiler: Compiler, version: &str) -> Result<()> {
    let report = CoverageRunner::new(config.clone(), SystemRunner).run(compiler, version)?;

    if report.succeeded {
        println!("📊 Coverage: {} and {}", report.xml.display(), report.html.display());
    }
    Ok(())
}
