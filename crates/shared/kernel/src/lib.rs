//! Kernel utilities shared across the tooling slices.
//! Keep this crate lightweight: layered config loading, the build type setting
//! and a small abstraction over external tool invocations.
//!
//! ## Running an external tool
//! ```rust,no_run
//! use vio_kernel::process::{CommandRunner, SystemRunner, ToolCommand};
//!
//! let command = ToolCommand::new("cmake").arg("--version");
//! SystemRunner.run(&command).unwrap();
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use vio_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(None::<&str>).unwrap();
//! ```
pub mod build_type;
pub mod config;
pub mod process;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use crate::build_type::BuildType;
