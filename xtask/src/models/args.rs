//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the tooling.

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strum::VariantNames;
use vio_coverage::Compiler;
use vio_kernel::BuildType;
use vio_recipe::{OptionAssignment, TargetOs};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the video_io library")]
pub struct Cli {
    /// Configuration file (defaults to ./vio.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Install Conan dependencies for every sub-project in the current directory
    Install {
        /// Debug or Release
        #[arg(value_parser = build_type_parser())]
        build_type: BuildType,
        /// Conan profile name, looked up in the 'profiles' directory
        profile: String,
    },
    /// Generate Cobertura XML and HTML coverage reports with gcovr
    Coverage {
        /// Compiler name
        #[arg(value_parser = compiler_parser())]
        compiler: Compiler,
        /// Compiler version
        compiler_version: String,
    },
    /// Configure, build and package the library through its recipe
    Recipe {
        #[command(subcommand)]
        action: RecipeAction,
    },
}

/// Enumeration of recipe steps.
#[derive(Debug, Subcommand)]
pub enum RecipeAction {
    /// Print the effective package options and the pinned ffmpeg configuration
    Options {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Write the CMake toolchain and the dependency graph
    Generate {
        #[command(flatten)]
        args: RecipeArgs,
    },
    /// Configure and build with CMake
    Build {
        #[command(flatten)]
        args: RecipeArgs,
    },
    /// Copy license files and install the build into the package directory
    Package {
        #[command(flatten)]
        args: RecipeArgs,
    },
    /// Write the installed package metadata
    Info {
        #[command(flatten)]
        args: RecipeArgs,
    },
    /// Run generate, build, package and info in order
    Create {
        #[command(flatten)]
        args: RecipeArgs,
    },
}

/// Settings and options the recipe is evaluated against.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Target operating system (defaults to the host)
    #[arg(long, value_parser = os_parser())]
    pub os: Option<TargetOs>,

    /// Target architecture (defaults to the host)
    #[arg(long)]
    pub arch: Option<String>,

    /// Compiler name, recorded in the dependency graph
    #[arg(long)]
    pub compiler: Option<String>,

    /// Debug or Release
    #[arg(long, value_parser = build_type_parser(), default_value = "Release")]
    pub build_type: BuildType,

    /// Option override, e.g. '-o shared=True' (repeatable)
    #[arg(short = 'o', long = "option")]
    pub options: Vec<OptionAssignment>,
}

/// Directory layout for recipe steps; unset values come from the `[recipe]` config.
#[derive(Debug, Args)]
pub struct RecipeArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    #[arg(long)]
    pub build_dir: Option<PathBuf>,

    #[arg(long)]
    pub package_dir: Option<PathBuf>,
}

fn build_type_parser() -> impl TypedValueParser<Value = BuildType> {
    PossibleValuesParser::new(BuildType::VARIANTS.iter().copied())
        .try_map(|value| value.parse::<BuildType>())
}

fn compiler_parser() -> impl TypedValueParser<Value = Compiler> {
    PossibleValuesParser::new(Compiler::VARIANTS.iter().copied())
        .try_map(|value| value.parse::<Compiler>())
}

fn os_parser() -> impl TypedValueParser<Value = TargetOs> {
    PossibleValuesParser::new(TargetOs::VARIANTS.iter().copied())
        .try_map(|value| value.parse::<TargetOs>())
}
