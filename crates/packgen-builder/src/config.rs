//! The generated configuration, shaped the way webpack expects it.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use packgen_config::ProxyConfig;

use crate::mode::{BuildMode, Devtool};
use crate::plugins::PluginList;
use crate::rules::RuleTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Named entries, each a list of resolved modules bundled together
    pub entry: IndexMap<String, Vec<PathBuf>>,
    pub output: OutputOptions,
    pub mode: BuildMode,
    pub devtool: Devtool,
    pub optimization: Optimization,
    pub plugins: PluginList,
    pub resolve: ResolveOptions,
    pub dev_server: DevServerOptions,
    pub module: ModuleOptions,
}

impl BuildConfig {
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entry.keys().map(String::as_str)
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub public_path: String,
    pub path: PathBuf,
    /// `[name]` and `[contenthash]` are substituted by the bundler
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub split_chunks: SplitChunks,
    pub mangle_exports: bool,
}

impl Default for Optimization {
    fn default() -> Self {
        Self {
            split_chunks: SplitChunks {
                chunks: ChunkSelection::All,
            },
            mangle_exports: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitChunks {
    pub chunks: ChunkSelection,
}

/// Which chunks are eligible for splitting; only `all` is ever emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOptions {
    pub symlinks: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    pub history_api_fallback: HistoryApiFallback,
    pub public_path: String,
    pub content_base: PathBuf,
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub proxy: IndexMap<String, ProxyConfig>,
    pub hot: bool,
    pub inline: bool,
}

/// Serve `index` for unknown paths so client-side routing works
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryApiFallback {
    pub index: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleOptions {
    pub rules: RuleTable,
}
