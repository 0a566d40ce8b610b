use crate::compiler::Compiler;
use crate::config::CoverageConfig;
use crate::error::CoverageError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use vio_kernel::process::{CommandRunner, ToolCommand};

pub const XML_REPORT: &str = "cobertura.xml";
pub const HTML_REPORT: &str = "results.html";

/// What a coverage run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// The `--gcov-executable` value used.
    pub tool: String,
    pub xml: PathBuf,
    pub html: PathBuf,
    /// Whether `gcovr` exited successfully.
    pub succeeded: bool,
}

/// Runs `gcovr` for a given compiler.
#[derive(Debug)]
pub struct CoverageRunner<R> {
    config: CoverageConfig,
    runner: R,
}

impl<R: CommandRunner> CoverageRunner<R> {
    pub const fn new(config: CoverageConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Generates the XML and HTML reports.
    ///
    /// The output directory is created with its parents if missing; an existing
    /// directory is left as is. A failing `gcovr` run is logged and reflected in
    /// [`CoverageReport::succeeded`].
    ///
    /// # Errors
    /// Returns [`CoverageError::UnsupportedCompiler`] before touching the
    /// filesystem, or [`CoverageError::OutputDirectory`] if the directory cannot
    /// be created.
    pub fn run(&self, compiler: Compiler, version: &str) -> Result<CoverageReport, CoverageError> {
        let tool = compiler.coverage_tool(version)?;

        let dir = &self.config.output_dir;
        fs::create_dir_all(dir)
            .map_err(|source| CoverageError::OutputDirectory { path: dir.clone(), source })?;

        let xml = dir.join(XML_REPORT);
        let html = dir.join(HTML_REPORT);
        let command = self.command(&tool, &xml, &html);

        info!("Generating coverage report with {tool}");
        let succeeded = match self.runner.run(&command) {
            Ok(()) => {
                info!("Coverage report written to {}", html.display());
                true
            },
            Err(err) => {
                error!("Unhandled Exception: {err}");
                false
            },
        };

        Ok(CoverageReport { tool, xml, html, succeeded })
    }

    /// Builds the `gcovr` invocation.
    #[must_use]
    pub fn command(&self, tool: &str, xml: &Path, html: &Path) -> ToolCommand {
        ToolCommand::new(&self.config.program)
            .args(["-r", ".", "--xml", "--xml-pretty", "--output"])
            .arg(xml)
            .arg("--html-details")
            .arg(html)
            .args(["--html-title", self.config.title.as_str()])
            .args(["--filter", self.config.filter.as_str()])
            .args(["--gcov-executable", tool])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vio_kernel::testing::RecordingRunner;

    #[test]
    fn command_lists_both_reports_and_tool() {
        let runner = CoverageRunner::new(CoverageConfig::default(), RecordingRunner::new());
        let command = runner.command(
            "gcov-11",
            Path::new("unit_tests/coverage/cobertura.xml"),
            Path::new("unit_tests/coverage/results.html"),
        );

        assert_eq!(command.program(), "gcovr");
        assert_eq!(
            command.args_lossy(),
            vec![
                "-r",
                ".",
                "--xml",
                "--xml-pretty",
                "--output",
                "unit_tests/coverage/cobertura.xml",
                "--html-details",
                "unit_tests/coverage/results.html",
                "--html-title",
                "video_io",
                "--filter",
                ".*video_io.*",
                "--gcov-executable",
                "gcov-11",
            ]
        );
    }
}
