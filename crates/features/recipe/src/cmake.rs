use std::path::Path;
use tracing::info;
use vio_kernel::BuildType;
use vio_kernel::process::{CommandRunner, ProcessError, ToolCommand};

/// Thin driver over the `cmake` command line.
#[derive(Debug)]
pub struct CMake<R> {
    program: String,
    runner: R,
}

impl<R: CommandRunner> CMake<R> {
    pub fn new(program: impl Into<String>, runner: R) -> Self {
        Self { program: program.into(), runner }
    }

    /// Configures `build` from `source` using the generated toolchain file.
    ///
    /// # Errors
    /// Returns the [`ProcessError`] of the failed `cmake` invocation.
    pub fn configure(
        &self,
        source: &Path,
        build: &Path,
        toolchain: &Path,
        build_type: BuildType,
    ) -> Result<(), ProcessError> {
        info!("Configuring {} into {}", source.display(), build.display());
        let command = ToolCommand::new(&self.program)
            .arg("-S")
            .arg(source)
            .arg("-B")
            .arg(build)
            .arg(format!("-DCMAKE_TOOLCHAIN_FILE={}", toolchain.display()))
            .arg(format!("-DCMAKE_BUILD_TYPE={build_type}"));
        self.runner.run(&command)
    }

    /// # Errors
    /// Returns the [`ProcessError`] of the failed `cmake --build` invocation.
    pub fn build(&self, build: &Path, build_type: BuildType) -> Result<(), ProcessError> {
        info!("Building {}", build.display());
        let command = ToolCommand::new(&self.program)
            .arg("--build")
            .arg(build)
            .args(["--config", build_type.as_ref()]);
        self.runner.run(&command)
    }

    /// # Errors
    /// Returns the [`ProcessError`] of the failed `cmake --install` invocation.
    pub fn install(
        &self,
        build: &Path,
        prefix: &Path,
        build_type: BuildType,
    ) -> Result<(), ProcessError> {
        info!("Installing into {}", prefix.display());
        let command = ToolCommand::new(&self.program)
            .arg("--install")
            .arg(build)
            .arg("--prefix")
            .arg(prefix)
            .args(["--config", build_type.as_ref()]);
        self.runner.run(&command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vio_kernel::testing::RecordingRunner;

    #[test]
    fn issues_configure_build_install() {
        let runner = RecordingRunner::new();
        let cmake = CMake::new("cmake", &runner);
        let (src, build, pkg) = (Path::new("src"), Path::new("build"), Path::new("pkg"));

        cmake
            .configure(src, build, Path::new("build/vio_toolchain.cmake"), BuildType::Debug)
            .expect("configure");
        cmake.build(build, BuildType::Debug).expect("build");
        cmake.install(build, pkg, BuildType::Debug).expect("install");

        let commands: Vec<_> = runner.commands().iter().map(ToString::to_string).collect();
        assert_eq!(
            commands,
            vec![
                "cmake -S src -B build -DCMAKE_TOOLCHAIN_FILE=build/vio_toolchain.cmake -DCMAKE_BUILD_TYPE=Debug",
                "cmake --build build --config Debug",
                "cmake --install build --prefix pkg --config Debug",
            ]
        );
    }
}
