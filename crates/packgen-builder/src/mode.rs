use std::fmt;

use serde::Serialize;

/// Which of the two configuration shapes to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    /// Only the exact value `"production"` selects production; any other
    /// value, or none at all, means development.
    pub fn from_mode_arg(mode: Option<&str>) -> Self {
        match mode {
            Some("production") => BuildMode::Production,
            _ => BuildMode::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, BuildMode::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }

    pub fn devtool(self) -> Devtool {
        match self {
            BuildMode::Development => Devtool::EvalSourceMap,
            BuildMode::Production => Devtool::SourceMap,
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source map style (`devtool`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    /// Separate `.map` files, full quality
    SourceMap,
    /// Maps embedded per module through `eval`, fast to rebuild
    EvalSourceMap,
}
