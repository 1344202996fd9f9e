//! The project options record consumed by the configuration builder.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::helpers::{
    default_assets_dir, default_corejs, default_css_entry,
    default_dev_server_port, default_fsharp_entry, default_index_html_template,
    default_output_dir, default_public_path,
};

/// Paths, ports and transform presets for one project.
///
/// Relative paths are resolved against the directory holding the
/// configuration file (see `packgen_builder::PathResolver`). Every key is
/// also accepted in snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOptions {
    /// HTML template; generated `<script>` and `<link>` tags are injected into it
    #[serde(default = "default_index_html_template", alias = "index_html_template")]
    pub index_html_template: PathBuf,

    /// Project file handed to the F# compiler loader
    #[serde(
        default = "default_fsharp_entry",
        alias = "compilerEntry",
        alias = "fsharp_entry",
        alias = "compiler_entry"
    )]
    pub fsharp_entry: PathBuf,

    /// Stylesheet entry (sass, scss or css)
    #[serde(default = "default_css_entry", alias = "css_entry")]
    pub css_entry: PathBuf,

    /// Directory receiving the emitted bundles
    #[serde(default = "default_output_dir", alias = "output_dir")]
    pub output_dir: PathBuf,

    /// Static assets, copied in production and served in development
    #[serde(default = "default_assets_dir", alias = "assets_dir")]
    pub assets_dir: PathBuf,

    /// Where bundled files are reachable relative to the server root
    #[serde(default = "default_public_path", alias = "public_path")]
    pub public_path: String,

    #[serde(default = "default_dev_server_port", alias = "dev_server_port")]
    pub dev_server_port: u16,

    /// Requests to forward from the dev server to an upstream API, keyed by
    /// path prefix (e.g. `/api`)
    #[serde(default, alias = "dev_server_proxy")]
    pub dev_server_proxy: IndexMap<String, ProxyConfig>,

    /// `@babel/preset-env` settings shared by the compiler and script loaders
    #[serde(default)]
    pub babel: BabelOptions,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            index_html_template: default_index_html_template(),
            fsharp_entry: default_fsharp_entry(),
            css_entry: default_css_entry(),
            output_dir: default_output_dir(),
            assets_dir: default_assets_dir(),
            public_path: default_public_path(),
            dev_server_port: default_dev_server_port(),
            dev_server_proxy: IndexMap::new(),
            babel: BabelOptions::default(),
        }
    }
}

impl ProjectOptions {
    /// Create from serde_json::Value (for options assembled programmatically)
    ///
    /// # Example
    ///
    /// ```
    /// use packgen_config::ProjectOptions;
    /// use serde_json::json;
    ///
    /// let options = ProjectOptions::from_value(json!({
    ///     "devServerPort": 3000,
    ///     "babel": { "corejs": 2 }
    /// }))
    /// .unwrap();
    /// assert_eq!(options.dev_server_port, 3000);
    /// assert_eq!(options.babel.corejs, 2);
    /// ```
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

/// Options for `@babel/preset-env`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabelOptions {
    /// Module transformation; `false` keeps ES modules for the bundler
    #[serde(default)]
    pub modules: ModuleTransform,

    /// How polyfills are added; anything but `false` requires core-js
    #[serde(default, alias = "use_built_ins")]
    pub use_built_ins: UseBuiltIns,

    /// Major core-js version the polyfills are taken from
    #[serde(default = "default_corejs")]
    pub corejs: u32,
}

impl Default for BabelOptions {
    fn default() -> Self {
        Self {
            modules: ModuleTransform::default(),
            use_built_ins: UseBuiltIns::default(),
            corejs: default_corejs(),
        }
    }
}

/// A preset-env setting as written: either a name or the boolean `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum PresetValue {
    Flag(bool),
    Name(String),
}

/// Module format `@babel/preset-env` transforms ES modules to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "PresetValue", into = "PresetValue")]
pub enum ModuleTransform {
    #[default]
    Auto,
    Amd,
    Umd,
    SystemJs,
    CommonJs,
    Cjs,
    /// Leave `import`/`export` untouched (`false`)
    Disabled,
}

impl ModuleTransform {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleTransform::Auto => "auto",
            ModuleTransform::Amd => "amd",
            ModuleTransform::Umd => "umd",
            ModuleTransform::SystemJs => "systemjs",
            ModuleTransform::CommonJs => "commonjs",
            ModuleTransform::Cjs => "cjs",
            ModuleTransform::Disabled => "false",
        }
    }
}

impl TryFrom<PresetValue> for ModuleTransform {
    type Error = String;

    fn try_from(value: PresetValue) -> Result<Self, Self::Error> {
        match value {
            PresetValue::Flag(false) => Ok(ModuleTransform::Disabled),
            PresetValue::Name(name) => match name.as_str() {
                "auto" => Ok(ModuleTransform::Auto),
                "amd" => Ok(ModuleTransform::Amd),
                "umd" => Ok(ModuleTransform::Umd),
                "systemjs" => Ok(ModuleTransform::SystemJs),
                "commonjs" => Ok(ModuleTransform::CommonJs),
                "cjs" => Ok(ModuleTransform::Cjs),
                "false" => Ok(ModuleTransform::Disabled),
                other => Err(format!(
                    "unknown module transform `{other}`, expected one of auto, amd, umd, systemjs, commonjs, cjs or false"
                )),
            },
            PresetValue::Flag(true) => {
                Err("`modules` accepts a module format name or false, not true".to_string())
            }
        }
    }
}

impl From<ModuleTransform> for PresetValue {
    fn from(modules: ModuleTransform) -> Self {
        match modules {
            ModuleTransform::Disabled => PresetValue::Flag(false),
            other => PresetValue::Name(other.as_str().to_string()),
        }
    }
}

/// Polyfill strategy of `@babel/preset-env`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "PresetValue", into = "PresetValue")]
pub enum UseBuiltIns {
    /// Replace the core-js entry import with the polyfills the targets need
    #[default]
    Entry,
    /// Add polyfills per file based on usage
    Usage,
    /// Never add polyfills (`false`)
    Disabled,
}

impl TryFrom<PresetValue> for UseBuiltIns {
    type Error = String;

    fn try_from(value: PresetValue) -> Result<Self, Self::Error> {
        match value {
            PresetValue::Flag(false) => Ok(UseBuiltIns::Disabled),
            PresetValue::Name(name) => match name.as_str() {
                "entry" => Ok(UseBuiltIns::Entry),
                "usage" => Ok(UseBuiltIns::Usage),
                "false" => Ok(UseBuiltIns::Disabled),
                other => Err(format!(
                    "unknown useBuiltIns value `{other}`, expected entry, usage or false"
                )),
            },
            PresetValue::Flag(true) => {
                Err("`useBuiltIns` accepts entry, usage or false, not true".to_string())
            }
        }
    }
}

impl From<UseBuiltIns> for PresetValue {
    fn from(use_built_ins: UseBuiltIns) -> Self {
        match use_built_ins {
            UseBuiltIns::Entry => PresetValue::Name("entry".to_string()),
            UseBuiltIns::Usage => PresetValue::Name("usage".to_string()),
            UseBuiltIns::Disabled => PresetValue::Flag(false),
        }
    }
}

/// One upstream target of the dev-server proxy.
///
/// Accepts the full table or the bare target string
/// (`"/api" = "http://localhost:5000"`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProxySetting")]
pub struct ProxyConfig {
    /// Upstream origin, e.g. `http://localhost:5000`
    pub target: String,

    pub change_origin: bool,

    /// Proxy websocket upgrades as well
    pub ws: bool,

    /// Regex-to-replacement rewrites applied to the request path
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub path_rewrite: IndexMap<String, String>,
}

impl ProxyConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProxySetting {
    Target(String),
    Table(ProxyTable),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProxyTable {
    target: String,
    #[serde(default, alias = "change_origin")]
    change_origin: bool,
    #[serde(default)]
    ws: bool,
    #[serde(default, alias = "path_rewrite")]
    path_rewrite: IndexMap<String, String>,
}

impl From<ProxySetting> for ProxyConfig {
    fn from(setting: ProxySetting) -> Self {
        match setting {
            ProxySetting::Target(target) => ProxyConfig::new(target),
            ProxySetting::Table(table) => ProxyConfig {
                target: table.target,
                change_origin: table.change_origin,
                ws: table.ws,
                path_rewrite: table.path_rewrite,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_accepts_camel_case_keys() {
        let options = ProjectOptions::from_value(json!({
            "indexHtmlTemplate": "./static/index.html",
            "outputDir": "./dist",
            "devServerProxy": {
                "/api": { "target": "http://localhost:5000", "changeOrigin": true }
            }
        }))
        .unwrap();

        assert_eq!(options.index_html_template, PathBuf::from("./static/index.html"));
        assert_eq!(options.output_dir, PathBuf::from("./dist"));
        let proxy = &options.dev_server_proxy["/api"];
        assert_eq!(proxy.target, "http://localhost:5000");
        assert!(proxy.change_origin);
        assert!(!proxy.ws);
    }

    #[test]
    fn compiler_entry_alias() {
        let options =
            ProjectOptions::from_value(json!({ "compilerEntry": "./src/Client.fsproj" })).unwrap();
        assert_eq!(options.fsharp_entry, PathBuf::from("./src/Client.fsproj"));
    }

    #[test]
    fn use_built_ins_false() {
        let babel: BabelOptions = serde_json::from_value(json!({ "useBuiltIns": "false" })).unwrap();
        assert_eq!(babel.use_built_ins, UseBuiltIns::Disabled);
        assert_eq!(babel.modules, ModuleTransform::Auto);
    }

    #[test]
    fn boolean_false_disables_presets() {
        let babel: BabelOptions =
            serde_json::from_value(json!({ "modules": false, "useBuiltIns": false })).unwrap();
        assert_eq!(babel.modules, ModuleTransform::Disabled);
        assert_eq!(babel.use_built_ins, UseBuiltIns::Disabled);

        let value = serde_json::to_value(&babel).unwrap();
        assert_eq!(value["modules"], json!(false));
        assert_eq!(value["useBuiltIns"], json!(false));
    }

    #[test]
    fn boolean_true_is_rejected() {
        let err = ProjectOptions::from_value(json!({ "babel": { "modules": true } })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn module_transform_names() {
        let babel: BabelOptions = serde_json::from_value(json!({ "modules": "commonjs" })).unwrap();
        assert_eq!(babel.modules, ModuleTransform::CommonJs);
        assert_eq!(serde_json::to_value(babel.modules).unwrap(), json!("commonjs"));
    }

    #[test]
    fn snake_case_keys() {
        let options = ProjectOptions::from_value(json!({
            "index_html_template": "./static/index.html",
            "output_dir": "./dist",
            "dev_server_port": 3000,
            "babel": { "use_built_ins": "usage" }
        }))
        .unwrap();
        assert_eq!(options.index_html_template, PathBuf::from("./static/index.html"));
        assert_eq!(options.output_dir, PathBuf::from("./dist"));
        assert_eq!(options.dev_server_port, 3000);
        assert_eq!(options.babel.use_built_ins, UseBuiltIns::Usage);
    }

    #[test]
    fn proxy_target_shorthand() {
        let options = ProjectOptions::from_value(json!({
            "devServerProxy": {
                "/api": "http://localhost:5000",
                "/socket": { "target": "ws://localhost:5000", "ws": true }
            }
        }))
        .unwrap();
        assert_eq!(options.dev_server_proxy["/api"], ProxyConfig::new("http://localhost:5000"));
        assert!(options.dev_server_proxy["/socket"].ws);
        assert!(!options.dev_server_proxy["/socket"].change_origin);
    }

    #[test]
    fn to_value_uses_camel_case() {
        let value = ProjectOptions::default().to_value().unwrap();
        assert_eq!(value["devServerPort"], json!(8080));
        assert_eq!(value["babel"]["useBuiltIns"], json!("entry"));
        assert!(value.get("dev_server_port").is_none());
    }

    #[test]
    fn unknown_use_built_ins_is_rejected() {
        let err = ProjectOptions::from_value(json!({ "babel": { "useBuiltIns": "always" } }))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }
}
