//! Overwrite policy for existing output files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when the output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Ask on the terminal (default). Behaves like `Never` when quiet.
    #[default]
    Prompt,
    /// Always overwrite.
    Always,
    /// Never overwrite; the run is aborted.
    Never,
}

impl OverwritePolicy {
    /// Policy that actually applies once quiet mode is taken into account.
    pub fn effective(self, quiet: bool) -> Self {
        match self {
            OverwritePolicy::Prompt if quiet => OverwritePolicy::Never,
            policy => policy,
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverwritePolicy::Prompt => write!(f, "prompt"),
            OverwritePolicy::Always => write!(f, "always"),
            OverwritePolicy::Never => write!(f, "never"),
        }
    }
}

impl FromStr for OverwritePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prompt" => Ok(OverwritePolicy::Prompt),
            "always" => Ok(OverwritePolicy::Always),
            "never" => Ok(OverwritePolicy::Never),
            _ => Err(format!("Unknown overwrite policy: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_never_prompts() {
        assert_eq!(
            OverwritePolicy::Prompt.effective(true),
            OverwritePolicy::Never
        );
        assert_eq!(
            OverwritePolicy::Prompt.effective(false),
            OverwritePolicy::Prompt
        );
        assert_eq!(
            OverwritePolicy::Always.effective(true),
            OverwritePolicy::Always
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ALWAYS".parse(), Ok(OverwritePolicy::Always));
        assert!("sometimes".parse::<OverwritePolicy>().is_err());
    }
}
