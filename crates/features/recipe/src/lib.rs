//! Package recipe slice.
//!
//! Describes how `video_io` is configured, built and packaged: its options, the
//! pinned `ffmpeg` requirement with an explicit feature selection, the CMake
//! toolchain variables, and the generate/build/package steps driven through CMake.
//!
//! ```rust
//! use vio_recipe::{Recipe, Settings, TargetOs};
//!
//! let settings = Settings { os: TargetOs::Windows, ..Settings::host() };
//! let recipe = Recipe::new(settings, &[]).unwrap();
//! assert!(recipe.options().fpic().is_none());
//! ```
mod cmake;
mod config;
mod driver;
mod error;
mod ffmpeg;
mod metadata;
mod options;
mod recipe;
mod settings;
mod toolchain;

pub use crate::cmake::CMake;
pub use crate::config::RecipeConfig;
pub use crate::driver::{
    DEPENDENCY_GRAPH_FILE, GeneratedFiles, Layout, PACKAGE_INFO_FILE, RecipeDriver,
    TOOLCHAIN_FILE,
};
pub use crate::error::RecipeError;
pub use crate::ffmpeg::{FfmpegOptions, Requirement};
pub use crate::metadata::{METADATA, RecipeMetadata};
pub use crate::options::{OptionAssignment, RecipeOptions};
pub use crate::recipe::{DependencyGraph, PackageInfo, Recipe, RequirementNode};
pub use crate::settings::{Settings, TargetOs};
pub use crate::toolchain::{CMakeValue, ToolchainVariables};
