//! Dependency installer slice.
//!
//! Runs `conan install` once for every recipe found one directory below the
//! working directory, skipping anything inside the local Conan cache.
//! A failing install is logged and the loop moves on to the next recipe.
mod config;
mod discovery;
mod error;
mod installer;
mod profile;

pub use crate::config::InstallConfig;
pub use crate::discovery::{RECIPE_STEM, discover_recipes};
pub use crate::error::InstallError;
pub use crate::installer::{InstallReport, InstallStatus, Installer, RecipeOutcome};
pub use crate::profile::{PROFILES_DIR, profile_path};
