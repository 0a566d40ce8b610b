use crate::error::RecipeError;
use crate::settings::TargetOs;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const SHARED: &str = "shared";
const FPIC: &str = "fPIC";

/// A `name=value` option override, e.g. `shared=True`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAssignment {
    pub name: String,
    pub value: String,
}

impl FromStr for OptionAssignment {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) =
            s.split_once('=').ok_or_else(|| RecipeError::MalformedAssignment(s.to_owned()))?;
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() || value.is_empty() {
            return Err(RecipeError::MalformedAssignment(s.to_owned()));
        }
        Ok(Self { name: name.to_owned(), value: value.to_owned() })
    }
}

/// Package options. `fpic` is `None` once the option has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecipeOptions {
    shared: bool,
    #[serde(rename = "fPIC", skip_serializing_if = "Option::is_none")]
    fpic: Option<bool>,
}

impl Default for RecipeOptions {
    fn default() -> Self {
        Self { shared: false, fpic: Some(true) }
    }
}

impl RecipeOptions {
    /// Evaluates the options for `os`: removes platform-unavailable options,
    /// applies `overrides` in order, then drops options made meaningless by the
    /// final values.
    ///
    /// # Errors
    /// Fails on unknown options, options removed for this platform, or values
    /// other than `True`/`False`.
    pub fn resolve(os: TargetOs, overrides: &[OptionAssignment]) -> Result<Self, RecipeError> {
        let mut options = Self::default();
        options.config_options(os);
        for assignment in overrides {
            options.set(assignment)?;
        }
        options.configure();
        Ok(options)
    }

    /// Removes options that do not exist on `os`.
    pub fn config_options(&mut self, os: TargetOs) {
        if os == TargetOs::Windows {
            self.fpic = None;
        }
    }

    /// Removes `fPIC` for shared builds, where it is implied.
    pub fn configure(&mut self) {
        if self.shared {
            self.fpic = None;
        }
    }

    /// Applies one override.
    ///
    /// # Errors
    /// See [`RecipeOptions::resolve`].
    pub fn set(&mut self, assignment: &OptionAssignment) -> Result<(), RecipeError> {
        let value = parse_bool(&assignment.name, &assignment.value);
        match assignment.name.as_str() {
            SHARED => self.shared = value?,
            FPIC => {
                if self.fpic.is_none() {
                    return Err(RecipeError::RemovedOption {
                        name: FPIC.to_owned(),
                        reason: "position independent code is not configurable for this target",
                    });
                }
                self.fpic = Some(value?);
            },
            other => return Err(RecipeError::UnknownOption(other.to_owned())),
        }
        Ok(())
    }

    #[must_use]
    pub const fn shared(&self) -> bool {
        self.shared
    }

    #[must_use]
    pub const fn fpic(&self) -> Option<bool> {
        self.fpic
    }
}

impl fmt::Display for RecipeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SHARED}={}", python_bool(self.shared))?;
        if let Some(fpic) = self.fpic {
            write!(f, "\n{FPIC}={}", python_bool(fpic))?;
        }
        Ok(())
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, RecipeError> {
    match value {
        "True" => Ok(true),
        "False" => Ok(false),
        _ => Err(RecipeError::InvalidOptionValue { name: name.to_owned(), value: value.to_owned() }),
    }
}

/// Renders a boolean the way Conan option values are spelled.
pub(crate) const fn python_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(s: &str) -> OptionAssignment {
        s.parse().expect("valid assignment")
    }

    #[test]
    fn defaults_are_static_with_fpic() {
        let options = RecipeOptions::resolve(TargetOs::Linux, &[]).expect("defaults");
        assert!(!options.shared());
        assert_eq!(options.fpic(), Some(true));
    }

    #[test]
    fn windows_has_no_fpic() {
        let options = RecipeOptions::resolve(TargetOs::Windows, &[]).expect("defaults");
        assert_eq!(options.fpic(), None);

        let err = RecipeOptions::resolve(TargetOs::Windows, &[assign("fPIC=True")])
            .expect_err("fPIC removed on Windows");
        assert!(matches!(err, RecipeError::RemovedOption { .. }));
    }

    #[test]
    fn shared_drops_fpic_even_when_set() {
        let options =
            RecipeOptions::resolve(TargetOs::Linux, &[assign("fPIC=False"), assign("shared=True")])
                .expect("shared build");
        assert!(options.shared());
        assert_eq!(options.fpic(), None);
    }

    #[test]
    fn fpic_can_be_disabled_for_static() {
        let options =
            RecipeOptions::resolve(TargetOs::Macos, &[assign("fPIC=False")]).expect("static");
        assert_eq!(options.fpic(), Some(false));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            "shared".parse::<OptionAssignment>(),
            Err(RecipeError::MalformedAssignment(_))
        ));
        assert!(matches!(
            RecipeOptions::resolve(TargetOs::Linux, &[assign("with_docs=True")]),
            Err(RecipeError::UnknownOption(_))
        ));
        assert!(matches!(
            RecipeOptions::resolve(TargetOs::Linux, &[assign("shared=yes")]),
            Err(RecipeError::InvalidOptionValue { .. })
        ));
    }

    #[test]
    fn display_lists_available_options() {
        let options = RecipeOptions::resolve(TargetOs::Linux, &[]).expect("defaults");
        assert_eq!(options.to_string(), "shared=False\nfPIC=True");
        let options = RecipeOptions::resolve(TargetOs::Windows, &[]).expect("defaults");
        assert_eq!(options.to_string(), "shared=False");
    }
}
