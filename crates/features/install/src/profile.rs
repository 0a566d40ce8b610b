use crate::error::InstallError;
use std::path::{Path, PathBuf};

/// Name of the directory holding Conan profiles, next to the tooling directory.
pub const PROFILES_DIR: &str = "profiles";

/// Resolves a profile name to `<parent of tooling_dir>/profiles/<profile>`.
///
/// The result depends only on `tooling_dir`, never on the current directory.
///
/// # Errors
/// Returns [`InstallError::NoParent`] if `tooling_dir` is a filesystem root.
pub fn profile_path(tooling_dir: &Path, profile: &str) -> Result<PathBuf, InstallError> {
    let base = tooling_dir
        .parent()
        .ok_or_else(|| InstallError::NoParent(tooling_dir.to_path_buf()))?;
    Ok(base.join(PROFILES_DIR).join(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_sibling_profiles_directory() {
        let path = profile_path(Path::new("/work/video_io/xtask"), "default").expect("has parent");
        assert_eq!(path, PathBuf::from("/work/video_io/profiles/default"));
    }

    #[test]
    fn keeps_profile_name_verbatim() {
        let path = profile_path(Path::new("/repo/scripts"), "gcc-11-x86_64").expect("has parent");
        assert_eq!(path, PathBuf::from("/repo/profiles/gcc-11-x86_64"));
    }

    #[test]
    fn root_has_no_profiles_sibling() {
        let err = profile_path(Path::new("/"), "default").expect_err("root has no parent");
        assert!(matches!(err, InstallError::NoParent(_)));
    }
}
