//! The bundler invocation: mode value and raw argument vector.

use regex::Regex;

use crate::error::{BuildError, Result};
use crate::mode::BuildMode;

/// Passed by the bundler when stats are printed as JSON; compiler output
/// must stay quiet so stdout remains parseable.
pub const STATS_JSON_FLAG: &str = "--json";

#[derive(Debug, Clone, Default)]
pub struct Invocation {
    mode: Option<String>,
    args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(mode: Option<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn mode(&self) -> BuildMode {
        BuildMode::from_mode_arg(self.mode.as_deref())
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn has_arg(&self, flag: &Flag) -> bool {
        has_arg(&self.args, flag)
    }
}

/// A token to look for among the arguments.
#[derive(Debug, Clone)]
pub enum Flag {
    /// Matches an argument equal to the string
    Literal(String),
    /// Matches any argument the regex finds a match in
    Pattern(Regex),
}

impl Flag {
    pub fn literal(flag: impl Into<String>) -> Self {
        Flag::Literal(flag.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Flag::Pattern)
            .map_err(|source| BuildError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn matches(&self, arg: &str) -> bool {
        match self {
            Flag::Literal(flag) => arg == flag,
            Flag::Pattern(re) => re.is_match(arg),
        }
    }
}

impl From<&str> for Flag {
    fn from(flag: &str) -> Self {
        Flag::literal(flag)
    }
}

impl From<Regex> for Flag {
    fn from(re: Regex) -> Self {
        Flag::Pattern(re)
    }
}

/// Whether `flag` occurs anywhere in `args`.
pub fn has_arg<I, S>(args: I, flag: &Flag) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().any(|arg| flag.matches(arg.as_ref()))
}
