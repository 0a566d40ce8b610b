use crate::error::RecipeError;
use crate::ffmpeg::{FfmpegOptions, Requirement};
use crate::metadata::{METADATA, RecipeMetadata};
use crate::options::{OptionAssignment, RecipeOptions};
use crate::settings::Settings;
use crate::toolchain::{CMakeValue, ToolchainVariables};
use serde::Serialize;
use std::collections::BTreeMap;

/// Project switches forced off when building the package.
const DISABLED_PROJECT_FLAGS: &[&str] = &[
    "VIDEO_IO_BUILD_TESTS",
    "VIDEO_IO_BUILD_EXAMPLES",
    "VIDEO_IO_BUILD_SANITIZERS",
    "VIDEO_IO_BUILD_BENCHMARKS",
    "VIDEO_IO_BUILD_DOCS",
    "VIDEO_IO_INTERNAL_LOGGER",
];

/// The `video_io` recipe evaluated for one set of settings and options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    metadata: RecipeMetadata,
    settings: Settings,
    options: RecipeOptions,
    requirement: Requirement,
    ffmpeg: FfmpegOptions,
}

/// One edge of the dependency graph with the options it is built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementNode {
    pub reference: String,
    pub options: BTreeMap<&'static str, String>,
}

/// Serialized next to the toolchain so the dependency set is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyGraph {
    pub reference: String,
    pub settings: Settings,
    pub options: RecipeOptions,
    pub requires: Vec<RequirementNode>,
}

/// Consumer-facing metadata of the installed package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub license: &'static str,
    pub libs: Vec<&'static str>,
    pub shared: bool,
}

impl Recipe {
    /// # Errors
    /// Fails if an override names an unknown or removed option, or has an invalid value.
    pub fn new(settings: Settings, overrides: &[OptionAssignment]) -> Result<Self, RecipeError> {
        let options = RecipeOptions::resolve(settings.os, overrides)?;
        Ok(Self {
            metadata: METADATA,
            settings,
            options,
            requirement: Requirement::FFMPEG,
            ffmpeg: FfmpegOptions::default(),
        })
    }

    #[must_use]
    pub const fn metadata(&self) -> &RecipeMetadata {
        &self.metadata
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn options(&self) -> &RecipeOptions {
        &self.options
    }

    #[must_use]
    pub const fn requirement(&self) -> Requirement {
        self.requirement
    }

    #[must_use]
    pub const fn ffmpeg(&self) -> &FfmpegOptions {
        &self.ffmpeg
    }

    /// Variables for the generated CMake toolchain.
    #[must_use]
    pub fn toolchain_variables(&self) -> ToolchainVariables {
        let mut vars = ToolchainVariables::default();
        vars.set(
            "CMAKE_BUILD_TYPE",
            CMakeValue::String(self.settings.build_type.to_string()),
        );
        vars.set("BUILD_SHARED_LIBS", CMakeValue::Bool(self.options.shared()));
        if let Some(fpic) = self.options.fpic() {
            vars.set("CMAKE_POSITION_INDEPENDENT_CODE", CMakeValue::Bool(fpic));
        }
        for flag in DISABLED_PROJECT_FLAGS {
            vars.set(*flag, CMakeValue::Bool(false));
        }
        vars
    }

    #[must_use]
    pub fn dependency_graph(&self) -> DependencyGraph {
        DependencyGraph {
            reference: self.metadata.reference(),
            settings: self.settings.clone(),
            options: self.options,
            requires: vec![RequirementNode {
                reference: self.requirement.to_string(),
                options: self.ffmpeg.assignments().into_iter().collect(),
            }],
        }
    }

    #[must_use]
    pub fn package_info(&self) -> PackageInfo {
        PackageInfo {
            name: self.metadata.name,
            version: self.metadata.version,
            license: self.metadata.license,
            libs: self.metadata.libs.to_vec(),
            shared: self.options.shared(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::TargetOs;
    use vio_kernel::BuildType;

    fn linux() -> Settings {
        Settings {
            os: TargetOs::Linux,
            arch: "x86_64".to_owned(),
            compiler: Some("gcc".to_owned()),
            build_type: BuildType::Release,
        }
    }

    #[test]
    fn project_flags_default_to_off() {
        let vars = Recipe::new(linux(), &[]).expect("recipe").toolchain_variables();
        for flag in DISABLED_PROJECT_FLAGS {
            assert_eq!(vars.get(flag), Some(&CMakeValue::Bool(false)), "{flag}");
        }
        assert_eq!(vars.get("CMAKE_POSITION_INDEPENDENT_CODE"), Some(&CMakeValue::Bool(true)));
        assert_eq!(vars.get("BUILD_SHARED_LIBS"), Some(&CMakeValue::Bool(false)));
    }

    #[test]
    fn shared_build_omits_pic_variable() {
        let shared = "shared=True".parse().expect("assignment");
        let vars = Recipe::new(linux(), &[shared]).expect("recipe").toolchain_variables();
        assert_eq!(vars.get("BUILD_SHARED_LIBS"), Some(&CMakeValue::Bool(true)));
        assert!(vars.get("CMAKE_POSITION_INDEPENDENT_CODE").is_none());
    }

    #[test]
    fn graph_pins_ffmpeg_with_options() {
        let graph = Recipe::new(linux(), &[]).expect("recipe").dependency_graph();
        assert_eq!(graph.reference, "video_io/0.1.0");
        assert_eq!(graph.requires.len(), 1);
        assert_eq!(graph.requires[0].reference, "ffmpeg/5.1");
        assert_eq!(graph.requires[0].options.get("with_libx264").map(String::as_str), Some("True"));
        assert_eq!(graph.requires[0].options.get("with_ssl").map(String::as_str), Some("openssl"));
    }

    #[test]
    fn package_info_exposes_library() {
        let info = Recipe::new(linux(), &[]).expect("recipe").package_info();
        assert_eq!(info.libs, vec!["video_io"]);
        assert!(!info.shared);
    }
}
