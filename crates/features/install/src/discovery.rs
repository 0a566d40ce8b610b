use crate::error::InstallError;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Recipe files are named `conanfile.<ext>`.
pub const RECIPE_STEM: &str = "conanfile.";

/// Finds `*/conanfile.*` directly below `root`, excluding any path that passes
/// through a directory named `cache_dir`.
///
/// Results are sorted by path.
///
/// # Errors
/// Returns [`InstallError::Discovery`] if `root` itself cannot be read.
/// Unreadable sub-directories are skipped with a warning.
pub fn discover_recipes(root: &Path, cache_dir: &str) -> Result<Vec<PathBuf>, InstallError> {
    let mut recipes = Vec::new();

    let walker = WalkDir::new(root).min_depth(2).max_depth(2).follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(InstallError::Discovery { root: root.to_path_buf(), source });
            },
            Err(err) => {
                warn!("Skipping unreadable entry: {err}");
                continue;
            },
        };

        if !entry.file_type().is_file() || !is_recipe_name(entry.file_name()) {
            continue;
        }

        let path = entry.into_path();
        if inside_cache(root, &path, cache_dir) {
            continue;
        }
        recipes.push(path);
    }

    recipes.sort();
    Ok(recipes)
}

fn is_recipe_name(name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with(RECIPE_STEM))
}

fn inside_cache(root: &Path, path: &Path, cache_dir: &str) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .any(|component| matches!(component, Component::Normal(name) if name == cache_dir))
}
