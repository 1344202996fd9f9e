//! Module rules: which loader chain a source file goes through.
//!
//! Rules are tried in order and the first match wins, so a file that would
//! match several tests only ever gets one chain.

use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use packgen_config::BabelOptions;

use crate::error::{BuildError, Result};
use crate::mode::BuildMode;

pub const COMPILER_TEST: &str = r"\.fs(x|proj)?$";
pub const SCRIPT_TEST: &str = r"\.js$";
pub const SCRIPT_EXCLUDE: &str = r"node_modules";
pub const STYLE_TEST: &str = r"\.(sass|scss|css)$";
pub const ASSET_TEST: &str = r"\.(png|jpg|jpeg|gif|svg|woff|woff2|ttf|eot)(\?.*)?$";

const CSS_EXTRACT_LOADER: &str = "mini-css-extract-plugin/dist/loader";

/// A compiled regex that serializes as its source.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Pattern)
            .map_err(|source| BuildError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One step of a loader chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderUse {
    pub loader: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl LoaderUse {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options: Some(options),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// F# sources and project files
    Compiler,
    /// Plain JavaScript outside `node_modules`
    Script,
    /// Sass, SCSS and CSS
    Style,
    /// Images and fonts referenced from code
    Asset,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Compiler => "compiler",
            RuleKind::Script => "script",
            RuleKind::Style => "style",
            RuleKind::Asset => "asset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    #[serde(skip)]
    pub kind: RuleKind,
    pub test: Pattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Pattern>,
    #[serde(rename = "use")]
    pub uses: Vec<LoaderUse>,
}

impl Rule {
    pub fn matches(&self, path: &str) -> bool {
        self.test.is_match(path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(path))
    }

    /// Loader names in application order
    pub fn loaders(&self) -> impl Iterator<Item = &str> {
        self.uses.iter().map(|step| step.loader.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleTable(Vec<Rule>);

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self(rules)
    }

    /// The standard table: compiler, script, style, asset.
    ///
    /// `quiet_compiler` silences the compiler loader's own output.
    pub fn standard(mode: BuildMode, babel: &BabelOptions, quiet_compiler: bool) -> Result<Self> {
        let babel_options = babel_loader_options(babel);

        let extract_loader = match mode {
            BuildMode::Production => CSS_EXTRACT_LOADER,
            BuildMode::Development => "style-loader",
        };

        Ok(Self(vec![
            Rule {
                kind: RuleKind::Compiler,
                test: Pattern::new(COMPILER_TEST)?,
                exclude: None,
                uses: vec![LoaderUse::with_options(
                    "fable-loader",
                    json!({
                        "babel": babel_options.clone(),
                        "silent": quiet_compiler,
                    }),
                )],
            },
            Rule {
                kind: RuleKind::Script,
                test: Pattern::new(SCRIPT_TEST)?,
                exclude: Some(Pattern::new(SCRIPT_EXCLUDE)?),
                uses: vec![LoaderUse::with_options("babel-loader", babel_options)],
            },
            Rule {
                kind: RuleKind::Style,
                test: Pattern::new(STYLE_TEST)?,
                exclude: None,
                uses: vec![
                    LoaderUse::new(extract_loader),
                    LoaderUse::new("css-loader"),
                    LoaderUse::new("resolve-url-loader"),
                    LoaderUse::with_options("sass-loader", json!({ "implementation": "sass" })),
                ],
            },
            Rule {
                kind: RuleKind::Asset,
                test: Pattern::new(ASSET_TEST)?,
                exclude: None,
                uses: vec![LoaderUse::new("file-loader")],
            },
        ]))
    }

    /// First rule that applies to `path`, with its position in the table.
    pub fn route(&self, path: &str) -> Option<(usize, &Rule)> {
        self.0.iter().enumerate().find(|(_, rule)| rule.matches(path))
    }
}

impl std::ops::Deref for RuleTable {
    type Target = [Rule];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// `{presets: [["@babel/preset-env", {...}]]}`
pub fn babel_loader_options(babel: &BabelOptions) -> Value {
    json!({
        "presets": [
            ["@babel/preset-env", {
                "modules": babel.modules,
                "useBuiltIns": babel.use_built_ins,
                "corejs": babel.corejs,
            }]
        ]
    })
}
