use serde::Deserialize;

/// The `[install]` section of the tooling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Package manager executable.
    pub program: String,
    /// Output folder handed to `--install-folder`. Resolved against the working
    /// directory of the install (the workspace root), so every recipe shares it.
    pub install_folder: String,
    /// Environment variable pointing the package manager at its home directory.
    pub home_env: String,
    /// Directory name of the local package cache; recipes below it are skipped.
    pub cache_dir: String,
    /// Value passed to `--build`.
    pub build_policy: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            program: "conan".to_owned(),
            install_folder: "build/modules".to_owned(),
            home_env: "CONAN_USER_HOME".to_owned(),
            cache_dir: ".conan".to_owned(),
            build_policy: "missing".to_owned(),
        }
    }
}
