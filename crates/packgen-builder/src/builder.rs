//! Assembles a [`BuildConfig`] from project options and an invocation.
//!
//! Every mode-dependent choice is an exhaustive match on [`BuildMode`]:
//!
//! | | production | development |
//! |---|---|---|
//! | entries | `app` = script + styles | `app` = script, `style` = styles |
//! | filenames | `[name].[contenthash].js` | `[name].js` |
//! | plugins | HTML, CSS extraction, asset copy | HTML, hot module replacement |
//! | styles | extracted to a file | injected by `style-loader` |
//! | devtool | `source-map` | `eval-source-map` |

use indexmap::IndexMap;

use packgen_config::{Project, ProjectOptions};

use crate::config::{
    BuildConfig, DevServerOptions, HistoryApiFallback, ModuleOptions, Optimization,
    OutputOptions, ResolveOptions,
};
use crate::error::Result;
use crate::invocation::{Flag, Invocation, STATS_JSON_FLAG};
use crate::mode::BuildMode;
use crate::plugins::{CopyPattern, Plugin, PluginList};
use crate::resolve::PathResolver;
use crate::rules::RuleTable;

pub const APP_ENTRY: &str = "app";
pub const STYLE_ENTRY: &str = "style";
pub const HTML_FILENAME: &str = "index.html";
pub const CSS_FILENAME: &str = "style.[contenthash].css";
pub const DEV_SERVER_HOST: &str = "0.0.0.0";

pub struct ConfigBuilder<'a> {
    options: &'a ProjectOptions,
    resolver: PathResolver,
}

impl<'a> ConfigBuilder<'a> {
    pub fn new(options: &'a ProjectOptions, resolver: PathResolver) -> Self {
        Self { options, resolver }
    }

    /// Resolve paths against the project's root.
    pub fn for_project(project: &'a Project) -> Result<Self> {
        Ok(Self::new(&project.options, PathResolver::new(&project.root)?))
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn build(&self, invocation: &Invocation) -> Result<BuildConfig> {
        let mode = invocation.mode();
        let quiet_compiler = invocation.has_arg(&Flag::literal(STATS_JSON_FLAG));

        tracing::info!("Bundling CLIENT for {mode}...");
        tracing::debug!(
            base = %self.resolver.base().display(),
            quiet_compiler,
            "building configuration"
        );

        Ok(BuildConfig {
            entry: self.entries(mode),
            output: self.output(mode),
            mode,
            devtool: mode.devtool(),
            optimization: Optimization::default(),
            plugins: self.plugins(mode),
            resolve: ResolveOptions { symlinks: false },
            dev_server: self.dev_server(),
            module: ModuleOptions {
                rules: self.rules(mode, quiet_compiler)?,
            },
        })
    }

    /// Development keeps styles in their own entry so they hot-reload
    /// without a full script reload.
    pub fn entries(&self, mode: BuildMode) -> IndexMap<String, Vec<std::path::PathBuf>> {
        let script = self.resolver.resolve(&self.options.fsharp_entry);
        let styles = self.resolver.resolve(&self.options.css_entry);

        let mut entries = IndexMap::new();
        match mode {
            BuildMode::Production => {
                entries.insert(APP_ENTRY.to_string(), vec![script, styles]);
            }
            BuildMode::Development => {
                entries.insert(APP_ENTRY.to_string(), vec![script]);
                entries.insert(STYLE_ENTRY.to_string(), vec![styles]);
            }
        }
        entries
    }

    pub fn output(&self, mode: BuildMode) -> OutputOptions {
        let filename = match mode {
            BuildMode::Production => "[name].[contenthash].js",
            BuildMode::Development => "[name].js",
        };

        OutputOptions {
            public_path: self.options.public_path.clone(),
            path: self.resolver.resolve(&self.options.output_dir),
            filename: filename.to_string(),
        }
    }

    pub fn plugins(&self, mode: BuildMode) -> PluginList {
        let mut plugins = PluginList::new();
        plugins.push(Plugin::HtmlTemplate {
            filename: HTML_FILENAME.to_string(),
            template: self.resolver.resolve(&self.options.index_html_template),
        });

        match mode {
            BuildMode::Production => plugins.extend([
                Plugin::CssExtract {
                    filename: CSS_FILENAME.to_string(),
                },
                Plugin::CopyAssets {
                    patterns: vec![CopyPattern {
                        from: self.resolver.resolve(&self.options.assets_dir),
                    }],
                },
            ]),
            BuildMode::Development => plugins.push(Plugin::HotModuleReplacement),
        }

        plugins
    }

    pub fn dev_server(&self) -> DevServerOptions {
        DevServerOptions {
            history_api_fallback: HistoryApiFallback {
                index: "/".to_string(),
            },
            public_path: self.options.public_path.clone(),
            content_base: self.resolver.resolve(&self.options.assets_dir),
            host: DEV_SERVER_HOST.to_string(),
            port: self.options.dev_server_port,
            proxy: self.options.dev_server_proxy.clone(),
            hot: true,
            inline: true,
        }
    }

    pub fn rules(&self, mode: BuildMode, quiet_compiler: bool) -> Result<RuleTable> {
        RuleTable::standard(mode, &self.options.babel, quiet_compiler)
    }
}

/// Build the configuration for a loaded project (convenience function)
pub fn build_config(project: &Project, invocation: &Invocation) -> Result<BuildConfig> {
    ConfigBuilder::for_project(project)?.build(invocation)
}
