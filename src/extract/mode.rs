// src/extract/mode.rs
// =============================================================================
// The extraction mode: exactly one is active per run.
//
//   -o 1  => Links   (<a href="...">)
//   -o 2  => Images  (<img src="...">)
//
// Each variant carries its own tag and attribute, so there is no lookup
// table that could be missing an entry.
// =============================================================================

use serde::Serialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Hyperlink targets from `<a href>`
    Links,
    /// Image sources from `<img src>`
    Images,
}

impl Mode {
    /// Maps the numeric `-o` flag onto a mode.
    pub fn from_option(option: i64) -> Result<Mode, ConfigError> {
        match option {
            1 => Ok(Mode::Links),
            2 => Ok(Mode::Images),
            other => Err(ConfigError::UnknownMode(other)),
        }
    }

    /// The tag name a start tag must have to match
    pub fn tag(self) -> &'static str {
        match self {
            Mode::Links => "a",
            Mode::Images => "img",
        }
    }

    /// The attribute we pull out of a matched tag
    pub fn attr(self) -> &'static str {
        match self {
            Mode::Links => "href",
            Mode::Images => "src",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_options() {
        assert_eq!(Mode::from_option(1).unwrap(), Mode::Links);
        assert_eq!(Mode::from_option(2).unwrap(), Mode::Images);
    }

    #[test]
    fn test_unknown_option() {
        for option in [0, 3, -1] {
            assert!(matches!(
                Mode::from_option(option),
                Err(ConfigError::UnknownMode(n)) if n == option
            ));
        }
    }

    #[test]
    fn test_tag_and_attr() {
        assert_eq!((Mode::Links.tag(), Mode::Links.attr()), ("a", "href"));
        assert_eq!((Mode::Images.tag(), Mode::Images.attr()), ("img", "src"));
    }
}
