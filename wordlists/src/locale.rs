use std::{fmt, str::FromStr};

use thiserror::Error;

/// Identifies which pair of word lists to use, e.g. `en_US.UTF-8`.
///
/// A locale doubles as a subdirectory name, so it must be a single,
/// non-empty path component.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale(String);

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid locale '{locale}': {reason}")]
pub struct InvalidLocale {
    pub locale: String,
    pub reason: &'static str,
}

impl Locale {
    /// Used when neither `--lang` nor `$LANG` is set.
    pub const DEFAULT: &'static str = "en_US.UTF-8";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl FromStr for Locale {
    type Err = InvalidLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reason = if s.is_empty() {
            "must not be empty"
        } else if s.contains(['/', '\\']) {
            "must not contain path separators"
        } else if s == "." || s == ".." {
            "must not be a relative path component"
        } else {
            return Ok(Self(s.to_owned()));
        };

        Err(InvalidLocale {
            locale: s.to_owned(),
            reason,
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
