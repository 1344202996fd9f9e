//! Plugin descriptors.
//!
//! Each descriptor serializes as `{"plugin": <package>, "options": {...}}`;
//! the consuming bundler instantiates the named plugin with those options.

use std::ops::Deref;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", content = "options")]
pub enum Plugin {
    /// Renders the HTML template with `<script>`/`<link>` tags for every bundle
    #[serde(rename = "html-webpack-plugin")]
    HtmlTemplate { filename: String, template: PathBuf },

    /// Moves compiled styles out of the script bundle into their own file
    #[serde(rename = "mini-css-extract-plugin")]
    CssExtract { filename: String },

    /// Copies static assets into the output directory
    #[serde(rename = "copy-webpack-plugin")]
    CopyAssets { patterns: Vec<CopyPattern> },

    #[serde(rename = "webpack.HotModuleReplacementPlugin")]
    HotModuleReplacement,
}

impl Plugin {
    /// npm package (or webpack export) providing the plugin
    pub fn package(&self) -> &'static str {
        match self {
            Plugin::HtmlTemplate { .. } => "html-webpack-plugin",
            Plugin::CssExtract { .. } => "mini-css-extract-plugin",
            Plugin::CopyAssets { .. } => "copy-webpack-plugin",
            Plugin::HotModuleReplacement => "webpack.HotModuleReplacementPlugin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyPattern {
    pub from: PathBuf,
}

/// Ordered plugin list; the common plugins always come first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginList(Vec<Plugin>);

impl PluginList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, plugin: Plugin) {
        self.0.push(plugin);
    }

    pub fn contains_package(&self, package: &str) -> bool {
        self.0.iter().any(|plugin| plugin.package() == package)
    }

    pub fn packages(&self) -> Vec<&'static str> {
        self.0.iter().map(Plugin::package).collect()
    }
}

impl Deref for PluginList {
    type Target = [Plugin];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Extend<Plugin> for PluginList {
    fn extend<T: IntoIterator<Item = Plugin>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Plugin> for PluginList {
    fn from_iter<T: IntoIterator<Item = Plugin>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
