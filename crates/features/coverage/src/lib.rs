//! Coverage report slice.
//!
//! Picks the gcov-compatible extraction tool for a compiler and runs `gcovr`
//! once to produce a Cobertura XML report and a detailed HTML report.
mod compiler;
mod config;
mod error;
mod report;

pub use crate::compiler::Compiler;
pub use crate::config::CoverageConfig;
pub use crate::error::CoverageError;
pub use crate::report::{CoverageReport, CoverageRunner, HTML_REPORT, XML_REPORT};
