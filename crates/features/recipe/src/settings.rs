use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, VariantNames};
use vio_kernel::BuildType;

/// Target operating system, spelled the way Conan profiles spell it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum TargetOs {
    Linux,
    Windows,
    Macos,
    #[strum(serialize = "iOS")]
    #[serde(rename = "iOS")]
    Ios,
    Android,
    FreeBSD,
}

impl TargetOs {
    /// The operating system this tool was compiled for.
    #[must_use]
    pub fn host() -> Self {
        match std::env::consts::OS {
            "windows" => Self::Windows,
            "macos" => Self::Macos,
            "ios" => Self::Ios,
            "android" => Self::Android,
            "freebsd" => Self::FreeBSD,
            _ => Self::Linux,
        }
    }
}

/// Build settings the recipe is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub os: TargetOs,
    pub arch: String,
    pub compiler: Option<String>,
    pub build_type: BuildType,
}

impl Settings {
    #[must_use]
    pub fn host() -> Self {
        Self {
            os: TargetOs::host(),
            arch: std::env::consts::ARCH.to_owned(),
            compiler: None,
            build_type: BuildType::default(),
        }
    }
}
