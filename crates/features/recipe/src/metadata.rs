use serde::Serialize;

/// Static package metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecipeMetadata {
    pub name: &'static str,
    pub version: &'static str,
    pub license: &'static str,
    pub author: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub topics: &'static [&'static str],
    /// Source patterns shipped with the recipe.
    pub exports_sources: &'static [&'static str],
    /// Files copied into the package root.
    pub package_files: &'static [&'static str],
    pub settings: &'static [&'static str],
    /// Libraries consumers link against.
    pub libs: &'static [&'static str],
}

pub const METADATA: RecipeMetadata = RecipeMetadata {
    name: "video_io",
    version: "0.1.0",
    license: "MIT",
    author: "Stefano Lusardi lusardi.stefano@gmail.com",
    url: "https://github.com/StefanoLusardi/video_io",
    description: "video encoder and decoder, written in modern C++",
    topics: &["video", "encoding", "decoding"],
    exports_sources: &["CMakeLists.txt", "LICENSE", "VERSION", "video_io/*"],
    package_files: &["LICENSE", "VERSION"],
    settings: &["os", "compiler", "build_type", "arch"],
    libs: &["video_io"],
};

impl RecipeMetadata {
    /// `name/version`.
    #[must_use]
    pub fn reference(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}
