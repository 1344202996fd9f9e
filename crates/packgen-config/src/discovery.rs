//! File-based project discovery and layered loading
//!
//! Finds the packgen configuration for a project root and layers it with
//! environment overrides:
//!
//! 1. built-in defaults
//! 2. `packgen.toml`, or the `packgen` field of `package.json`
//! 3. `PACKGEN_*` environment variables (`__` separates nested keys)

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Serialized, Toml};
use figment::value::{Dict, Value as FigmentValue};
use figment::Figment;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::options::ProjectOptions;

pub const CONFIG_FILE_NAME: &str = "packgen.toml";
pub const ENV_PREFIX: &str = "PACKGEN_";

const PACKAGE_JSON: &str = "package.json";
const PACKAGE_JSON_FIELD: &str = "packgen";

/// Loaded options together with the directory they are relative to.
#[derive(Debug, Clone)]
pub struct Project {
    /// Base directory for relative paths: the config file's directory, or
    /// the discovery root when no file was found
    pub root: PathBuf,

    /// The file the options came from, if any
    pub source: Option<PathBuf>,

    pub options: ProjectOptions,
}

/// File-based project discovery
///
/// # Example
///
/// ```no_run
/// use packgen_config::ProjectDiscovery;
///
/// let project = ProjectDiscovery::new(".").load().unwrap();
/// println!("{}", project.options.dev_server_port);
/// ```
pub struct ProjectDiscovery {
    root: PathBuf,
}

impl ProjectDiscovery {
    /// Create a new discovery rooted at a directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. packgen.toml
    /// 2. package.json (packgen field)
    ///
    /// # Errors
    ///
    /// A `package.json` that cannot be read or is not valid JSON is an error
    /// rather than a silent fallback to defaults.
    pub fn find(&self) -> Result<Option<PathBuf>> {
        let toml_path = self.root.join(CONFIG_FILE_NAME);
        if toml_path.is_file() {
            return Ok(Some(toml_path));
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        if !pkg_path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&pkg_path)?;
        let parsed: Value =
            serde_json::from_str(&content).map_err(|source| ConfigError::PackageJson {
                path: pkg_path.clone(),
                source,
            })?;

        let has_field = parsed
            .get(PACKAGE_JSON_FIELD)
            .is_some_and(|field| !field.is_null());
        Ok(has_field.then_some(pkg_path))
    }

    /// Load options from the discovered file, falling back to defaults
    ///
    /// A missing config file is not an error: the defaults are layered with
    /// the environment and the discovery root becomes the base directory.
    pub fn load(&self) -> Result<Project> {
        match self.find()? {
            Some(path) => self.load_from(&path),
            None => {
                tracing::debug!(
                    "No config file in {}, using defaults",
                    self.root.display()
                );
                extract(Figment::new(), self.root.clone(), None)
            }
        }
    }

    /// Load options from an explicit file
    ///
    /// Relative paths are taken from the discovery root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist and
    /// `ConfigError::UnsupportedFormat` for anything but `.toml` or `.json`.
    pub fn load_from(&self, path: &Path) -> Result<Project> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };

        if !path.is_file() {
            return Err(ConfigError::NotFound(path));
        }

        tracing::debug!("Loading config from {}", path.display());

        let figment = camel_case_layer(file_figment(&path)?)?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());

        extract(figment, root, Some(path))
    }
}

fn file_figment(path: &Path) -> Result<Figment> {
    let is_package_json = path.file_name() == Some(OsStr::new(PACKAGE_JSON));

    match path.extension().and_then(OsStr::to_str) {
        Some("toml") => Ok(Figment::from(Toml::file_exact(path))),
        Some("json") if is_package_json => {
            Ok(Figment::from(Json::file_exact(path)).focus(PACKAGE_JSON_FIELD))
        }
        Some("json") => Ok(Figment::from(Json::file_exact(path))),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Rewrite snake_case keys of a file layer to camelCase, so that they merge
/// with (and are overridden by) the camelCase keys of the environment.
///
/// Only option names are rewritten; proxy routes and rewrite patterns are
/// user data and keep their spelling.
fn camel_case_layer(figment: Figment) -> Result<Figment> {
    let dict: Dict = figment.extract()?;
    let dict = dict
        .into_iter()
        .map(|(key, value)| {
            let key = snake_to_camel(&key);
            let value = match value {
                FigmentValue::Dict(tag, babel) if key == "babel" => FigmentValue::Dict(
                    tag,
                    babel
                        .into_iter()
                        .map(|(key, value)| (snake_to_camel(&key), value))
                        .collect(),
                ),
                other => other,
            };
            (key, value)
        })
        .collect::<Dict>();

    Ok(Figment::from(Serialized::defaults(dict)))
}

fn extract(figment: Figment, root: PathBuf, source: Option<PathBuf>) -> Result<Project> {
    let options: ProjectOptions = figment.merge(env_provider()).extract()?;

    Ok(Project {
        root,
        source,
        options,
    })
}

/// `PACKGEN_DEV_SERVER_PORT` -> `devServerPort`,
/// `PACKGEN_BABEL__USE_BUILT_INS` -> `babel.useBuiltIns`
fn env_provider() -> Env {
    // `map` and `split` reset the lowercase flag, so it has to come last
    Env::prefixed(ENV_PREFIX)
        .map(|key| env_key_to_camel_case(key.as_str()).into())
        .split("__")
        .lowercase(false)
}

fn env_key_to_camel_case(key: &str) -> String {
    key.split("__")
        .map(|segment| snake_to_camel(&segment.to_ascii_lowercase()))
        .collect::<Vec<_>>()
        .join("__")
}

/// `dev_server_port` -> `devServerPort`; keys without `_` are unchanged.
fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
