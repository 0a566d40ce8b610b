use std::fmt;

/// A CMake cache value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CMakeValue {
    Bool(bool),
    String(String),
}

impl CMakeValue {
    const fn cache_type(&self) -> &'static str {
        match self {
            Self::Bool(_) => "BOOL",
            Self::String(_) => "STRING",
        }
    }
}

impl fmt::Display for CMakeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("ON"),
            Self::Bool(false) => f.write_str("OFF"),
            Self::String(s) => write!(f, "\"{}\"", s.replace('\\', "/").replace('"', "\\\"")),
        }
    }
}

/// Ordered cache variables written into the generated toolchain file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolchainVariables {
    entries: Vec<(String, CMakeValue)>,
}

impl ToolchainVariables {
    /// Sets `name`, replacing an earlier value in place.
    pub fn set(&mut self, name: impl Into<String>, value: CMakeValue) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CMakeValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CMakeValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Renders the variables as a CMake toolchain script.
    #[must_use]
    pub fn render(&self, header: &str) -> String {
        ToolchainScript { header, variables: self }.to_string()
    }
}

struct ToolchainScript<'a> {
    header: &'a str,
    variables: &'a ToolchainVariables,
}

impl fmt::Display for ToolchainScript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.header)?;
        writeln!(f, "include_guard()")?;
        writeln!(f)?;
        for (name, value) in self.variables.iter() {
            writeln!(
                f,
                "set({name} {value} CACHE {} \"Variable {name} set by the package recipe\" FORCE)",
                value.cache_type()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut vars = ToolchainVariables::default();
        vars.set("A", CMakeValue::Bool(true));
        vars.set("B", CMakeValue::Bool(false));
        vars.set("A", CMakeValue::Bool(false));
        let names: Vec<_> = vars.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(vars.get("A"), Some(&CMakeValue::Bool(false)));
    }

    #[test]
    fn render_writes_cache_entries() {
        let mut vars = ToolchainVariables::default();
        vars.set("VIDEO_IO_BUILD_TESTS", CMakeValue::Bool(false));
        vars.set("CMAKE_BUILD_TYPE", CMakeValue::String("Release".to_owned()));
        let text = vars.render("generated");

        assert!(text.starts_with("# generated\ninclude_guard()\n"));
        assert!(text.contains(
            "set(VIDEO_IO_BUILD_TESTS OFF CACHE BOOL \"Variable VIDEO_IO_BUILD_TESTS set by the package recipe\" FORCE)"
        ));
        assert!(text.contains("set(CMAKE_BUILD_TYPE \"Release\" CACHE STRING"));
    }

    #[test]
    fn render_keeps_every_line_in_order() {
        let mut vars = ToolchainVariables::default();
        vars.set("BUILD_SHARED_LIBS", CMakeValue::Bool(true));
        vars.set("OUT_DIR", CMakeValue::String("C:\\build".to_owned()));

        let lines: Vec<String> = vars.render("h").lines().map(str::to_owned).collect();
        assert_eq!(
            lines,
            vec![
                "# h",
                "include_guard()",
                "",
                "set(BUILD_SHARED_LIBS ON CACHE BOOL \"Variable BUILD_SHARED_LIBS set by the package recipe\" FORCE)",
                "set(OUT_DIR \"C:/build\" CACHE STRING \"Variable OUT_DIR set by the package recipe\" FORCE)",
            ]
        );
    }
}
