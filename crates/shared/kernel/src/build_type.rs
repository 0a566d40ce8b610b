use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, VariantNames};

/// Build configuration passed to the package manager and to CMake.
///
/// Values are matched case-sensitively against `Debug` and `Release`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
)]
pub enum BuildType {
    Debug,
    #[default]
    Release,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::VariantNames;

    #[test]
    fn parses_exact_names_only() {
        assert_eq!(BuildType::from_str("Debug").ok(), Some(BuildType::Debug));
        assert_eq!(BuildType::from_str("Release").ok(), Some(BuildType::Release));
        assert!(BuildType::from_str("release").is_err());
        assert!(BuildType::from_str("RelWithDebInfo").is_err());
    }

    #[test]
    fn variant_names_match_cli_choices() {
        assert_eq!(BuildType::VARIANTS, &["Debug", "Release"]);
        assert_eq!(BuildType::Debug.to_string(), "Debug");
    }
}
