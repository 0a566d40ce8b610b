//! External tool invocation.
//!
//! Every operation of the tooling ends in one or more blocking child processes
//! (`conan`, `gcovr`, `cmake`). [`ToolCommand`] describes such an invocation and
//! [`CommandRunner`] executes it, so callers can swap the real spawner for a
//! recording one in tests.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Errors raised while running an external tool.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The program could not be started (not installed, not executable, ...).
    #[error("Failed to execute '{program}': {source}")]
    Spawn { program: String, source: std::io::Error },

    /// The program ran but exited unsuccessfully.
    #[error("Command '{command}' returned non-zero exit status {}", format_code(.code))]
    ExitStatus { command: String, code: Option<i32> },
}

fn format_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "(terminated by signal)".to_owned(), |c| c.to_string())
}

/// A fully described invocation of an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<OsString>,
    envs: Vec<(String, OsString)>,
    cwd: Option<PathBuf>,
}

impl ToolCommand {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), envs: Vec::new(), cwd: None }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Adds an environment variable visible to the child only.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments as lossy UTF-8, convenient for assertions and logs.
    #[must_use]
    pub fn args_lossy(&self) -> Vec<String> {
        self.args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[must_use]
    pub fn get_env(&self, key: &str) -> Option<&OsString> {
        self.envs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn get_current_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    fn to_std(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }
        command
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Executes [`ToolCommand`]s.
pub trait CommandRunner {
    /// Runs the command to completion.
    ///
    /// # Errors
    /// Returns [`ProcessError::Spawn`] if the program cannot be started and
    /// [`ProcessError::ExitStatus`] if it exits unsuccessfully.
    fn run(&self, command: &ToolCommand) -> Result<(), ProcessError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &ToolCommand) -> Result<(), ProcessError> {
        (**self).run(command)
    }
}

/// Spawns real processes with inherited stdio and waits for them, without a timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> Result<(), ProcessError> {
        debug!(command = %command, "Spawning external tool");
        let status = command
            .to_std()
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ProcessError::Spawn { program: command.program.clone(), source })?;

        check_status(command, status)
    }
}

fn check_status(command: &ToolCommand, status: ExitStatus) -> Result<(), ProcessError> {
    if status.success() {
        Ok(())
    } else {
        Err(ProcessError::ExitStatus { command: command.to_string(), code: status.code() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let command = ToolCommand::new("gcovr")
            .args(["--html-title", "video io"])
            .arg("--gcov-executable")
            .arg("llvm-cov-15 gcov");
        assert_eq!(
            command.to_string(),
            "gcovr --html-title \"video io\" --gcov-executable \"llvm-cov-15 gcov\""
        );
    }

    #[test]
    fn last_env_value_wins() {
        let command = ToolCommand::new("conan").env("CONAN_USER_HOME", "/a").env("CONAN_USER_HOME", "/b");
        assert_eq!(command.get_env("CONAN_USER_HOME"), Some(&OsString::from("/b")));
        assert!(command.get_env("PATH").is_none());
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = SystemRunner
            .run(&ToolCommand::new("vio-definitely-not-installed-tool"))
            .expect_err("missing program must fail");
        assert!(matches!(err, ProcessError::Spawn { .. }), "got: {err}");
        assert!(err.to_string().contains("vio-definitely-not-installed-tool"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported_with_code() {
        let err = SystemRunner
            .run(&ToolCommand::new("sh").args(["-c", "exit 3"]))
            .expect_err("exit 3 must fail");
        match err {
            ProcessError::ExitStatus { code, command } => {
                assert_eq!(code, Some(3));
                assert!(command.starts_with("sh -c"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn child_sees_command_env_and_cwd() {
        let dir = tempfile::tempdir().expect("tempdir");
        let command = ToolCommand::new("sh")
            .args(["-c", "test \"$VIO_CHILD_FLAG\" = yes && test -z \"$(ls)\""])
            .env("VIO_CHILD_FLAG", "yes")
            .current_dir(dir.path());
        SystemRunner.run(&command).expect("child should succeed");
    }
}
