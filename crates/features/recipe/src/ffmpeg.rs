use crate::options::python_bool;
use serde::Serialize;
use std::fmt;

/// A pinned `name/version` requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub name: &'static str,
    pub version: &'static str,
}

impl Requirement {
    pub const FFMPEG: Self = Self { name: "ffmpeg", version: "5.1" };
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Sub-features of the `ffmpeg` dependency.
///
/// Everything is disabled up front; only the codecs and compression libraries
/// `video_io` needs are turned back on.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FfmpegOptions {
    pub disable_everything: bool,
    pub with_asm: bool,
    pub with_zlib: bool,
    pub with_bzip2: bool,
    pub with_lzma: bool,
    pub with_libiconv: bool,
    pub with_freetype: bool,
    pub with_openjpeg: bool,
    pub with_openh264: bool,
    pub with_opus: bool,
    pub with_vorbis: bool,
    pub with_zeromq: bool,
    pub with_sdl: bool,
    pub with_libx264: bool,
    pub with_libx265: bool,
    pub with_libvpx: bool,
    pub with_libmp3lame: bool,
    pub with_libfdk_aac: bool,
    pub with_libwebp: bool,
    pub with_ssl: String,
    pub with_libalsa: bool,
    pub with_pulse: bool,
    pub with_vaapi: bool,
    pub with_vdpau: bool,
    pub with_vulkan: bool,
    pub with_xcb: bool,
    pub with_programs: bool,
}

impl Default for FfmpegOptions {
    fn default() -> Self {
        Self {
            disable_everything: true,
            with_asm: true,
            with_zlib: true,
            with_bzip2: true,
            with_lzma: false,
            with_libiconv: false,
            with_freetype: false,
            with_openjpeg: false,
            with_openh264: true,
            with_opus: false,
            with_vorbis: false,
            with_zeromq: false,
            with_sdl: false,
            with_libx264: true,
            with_libx265: true,
            with_libvpx: false,
            with_libmp3lame: false,
            with_libfdk_aac: false,
            with_libwebp: false,
            with_ssl: "openssl".to_owned(),
            with_libalsa: false,
            with_pulse: false,
            with_vaapi: false,
            with_vdpau: false,
            with_vulkan: false,
            with_xcb: false,
            with_programs: false,
        }
    }
}

impl FfmpegOptions {
    /// Option values in declaration order, spelled as Conan expects them.
    #[must_use]
    pub fn assignments(&self) -> Vec<(&'static str, String)> {
        let flag = |name: &'static str, value: bool| (name, python_bool(value).to_owned());
        vec![
            flag("disable_everything", self.disable_everything),
            flag("with_asm", self.with_asm),
            flag("with_zlib", self.with_zlib),
            flag("with_bzip2", self.with_bzip2),
            flag("with_lzma", self.with_lzma),
            flag("with_libiconv", self.with_libiconv),
            flag("with_freetype", self.with_freetype),
            flag("with_openjpeg", self.with_openjpeg),
            flag("with_openh264", self.with_openh264),
            flag("with_opus", self.with_opus),
            flag("with_vorbis", self.with_vorbis),
            flag("with_zeromq", self.with_zeromq),
            flag("with_sdl", self.with_sdl),
            flag("with_libx264", self.with_libx264),
            flag("with_libx265", self.with_libx265),
            flag("with_libvpx", self.with_libvpx),
            flag("with_libmp3lame", self.with_libmp3lame),
            flag("with_libfdk_aac", self.with_libfdk_aac),
            flag("with_libwebp", self.with_libwebp),
            ("with_ssl", self.with_ssl.clone()),
            flag("with_libalsa", self.with_libalsa),
            flag("with_pulse", self.with_pulse),
            flag("with_vaapi", self.with_vaapi),
            flag("with_vdpau", self.with_vdpau),
            flag("with_vulkan", self.with_vulkan),
            flag("with_xcb", self.with_xcb),
            flag("with_programs", self.with_programs),
        ]
    }

    /// `ffmpeg:<option>=<value>` lines, usable as `-o` arguments.
    #[must_use]
    pub fn qualified(&self, package: &str) -> Vec<String> {
        self.assignments()
            .into_iter()
            .map(|(name, value)| format!("{package}:{name}={value}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pins_ffmpeg_5_1() {
        assert_eq!(Requirement::FFMPEG.to_string(), "ffmpeg/5.1");
    }

    #[test]
    fn enables_only_the_needed_features() {
        let enabled: Vec<_> = FfmpegOptions::default()
            .assignments()
            .into_iter()
            .filter(|(_, value)| value == "True")
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            enabled,
            vec![
                "disable_everything",
                "with_asm",
                "with_zlib",
                "with_bzip2",
                "with_openh264",
                "with_libx264",
                "with_libx265",
            ]
        );
    }

    #[test]
    fn qualified_lines_include_ssl_backend() {
        let lines = FfmpegOptions::default().qualified("ffmpeg");
        assert_eq!(lines.len(), 27);
        assert_eq!(lines[0], "ffmpeg:disable_everything=True");
        assert!(lines.contains(&"ffmpeg:with_ssl=openssl".to_owned()));
        assert!(lines.contains(&"ffmpeg:with_vaapi=False".to_owned()));
    }
}
