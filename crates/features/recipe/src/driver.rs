use crate::cmake::CMake;
use crate::error::RecipeError;
use crate::recipe::Recipe;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vio_kernel::process::CommandRunner;

pub const TOOLCHAIN_FILE: &str = "vio_toolchain.cmake";
pub const DEPENDENCY_GRAPH_FILE: &str = "dependency_graph.json";
pub const PACKAGE_INFO_FILE: &str = "package_info.json";

/// Source, build and package directories of one recipe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub package_dir: PathBuf,
}

impl Layout {
    #[must_use]
    pub fn toolchain_file(&self) -> PathBuf {
        self.build_dir.join(TOOLCHAIN_FILE)
    }

    #[must_use]
    pub fn dependency_graph_file(&self) -> PathBuf {
        self.build_dir.join(DEPENDENCY_GRAPH_FILE)
    }

    #[must_use]
    pub fn package_info_file(&self) -> PathBuf {
        self.package_dir.join(PACKAGE_INFO_FILE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub toolchain: PathBuf,
    pub dependency_graph: PathBuf,
}

/// Runs the recipe steps against a [`Layout`].
#[derive(Debug)]
pub struct RecipeDriver<R> {
    recipe: Recipe,
    layout: Layout,
    cmake: CMake<R>,
}

impl<R: CommandRunner> RecipeDriver<R> {
    pub const fn new(recipe: Recipe, layout: Layout, cmake: CMake<R>) -> Self {
        Self { recipe, layout, cmake }
    }

    #[must_use]
    pub const fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Writes the CMake toolchain and the dependency graph into the build directory.
    ///
    /// # Errors
    /// Returns an error if the build directory or either file cannot be written.
    pub fn generate(&self) -> Result<GeneratedFiles, RecipeError> {
        create_dir(&self.layout.build_dir)?;

        let toolchain = self.layout.toolchain_file();
        let header = format!(
            "Toolchain for {} ({}, {})",
            self.recipe.metadata().reference(),
            self.recipe.settings().os,
            self.recipe.settings().build_type
        );
        write_file(&toolchain, self.recipe.toolchain_variables().render(&header))?;

        let dependency_graph = self.layout.dependency_graph_file();
        write_json(&dependency_graph, &self.recipe.dependency_graph())?;

        info!("Generated {} and {}", toolchain.display(), dependency_graph.display());
        Ok(GeneratedFiles { toolchain, dependency_graph })
    }

    /// Regenerates the toolchain for the current settings, then configures and
    /// builds with CMake.
    ///
    /// A toolchain left over from other settings is overwritten, since its cached
    /// values would override the command line.
    ///
    /// # Errors
    /// Returns an error if generation fails or a `cmake` invocation fails.
    pub fn build(&self) -> Result<(), RecipeError> {
        let GeneratedFiles { toolchain, .. } = self.generate()?;

        let build_type = self.recipe.settings().build_type;
        self.cmake.configure(&self.layout.source_dir, &self.layout.build_dir, &toolchain, build_type)?;
        self.cmake.build(&self.layout.build_dir, build_type)?;
        Ok(())
    }

    /// Copies the license files and installs the build tree into the package directory.
    ///
    /// Package files missing from the source directory are skipped.
    ///
    /// # Errors
    /// Returns an error if copying fails or `cmake --install` fails.
    pub fn package(&self) -> Result<(), RecipeError> {
        create_dir(&self.layout.package_dir)?;

        for name in self.recipe.metadata().package_files {
            let from = self.layout.source_dir.join(name);
            if !from.is_file() {
                debug!("Skipping missing package file {}", from.display());
                continue;
            }
            let to = self.layout.package_dir.join(name);
            fs::copy(&from, &to).map_err(|source| RecipeError::Io { path: from.clone(), source })?;
        }

        self.cmake.install(
            &self.layout.build_dir,
            &self.layout.package_dir,
            self.recipe.settings().build_type,
        )?;
        Ok(())
    }

    /// Writes the installed-package metadata.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn package_info(&self) -> Result<PathBuf, RecipeError> {
        create_dir(&self.layout.package_dir)?;
        let path = self.layout.package_info_file();
        write_json(&path, &self.recipe.package_info())?;
        info!("Package metadata written to {}", path.display());
        Ok(path)
    }

    /// Runs generate, build, package and package info in order.
    ///
    /// # Errors
    /// Stops at, and returns, the first failing step.
    pub fn create(&self) -> Result<PathBuf, RecipeError> {
        self.build()?;
        self.package()?;
        self.package_info()
    }
}

fn create_dir(path: &Path) -> Result<(), RecipeError> {
    fs::create_dir_all(path).map_err(|source| RecipeError::Io { path: path.to_path_buf(), source })
}

fn write_file(path: &Path, contents: String) -> Result<(), RecipeError> {
    fs::write(path, contents).map_err(|source| RecipeError::Io { path: path.to_path_buf(), source })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), RecipeError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|source| RecipeError::Json { path: path.to_path_buf(), source })?;
    write_file(path, json)
}
