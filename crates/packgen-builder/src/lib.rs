//! Mode-aware bundler configuration.
//!
//! Turns a project's [`ProjectOptions`](packgen_config::ProjectOptions) and
//! an [`Invocation`] into a [`BuildConfig`]: entries, output naming, plugins,
//! module rules and dev-server options, ready to serialize for webpack.
//!
//! ```
//! use packgen_builder::{build_config, BuildMode, Invocation};
//! use packgen_config::Project;
//!
//! let project = Project {
//!     root: "/srv/client".into(),
//!     source: None,
//!     options: Default::default(),
//! };
//! let invocation = Invocation::new(Some("production".into()), ["webpack", "--mode", "production"]);
//! let config = build_config(&project, &invocation).unwrap();
//!
//! assert_eq!(config.mode, BuildMode::Production);
//! assert_eq!(config.output.filename, "[name].[contenthash].js");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod invocation;
pub mod mode;
pub mod plugins;
pub mod resolve;
pub mod rules;

pub use builder::{build_config, ConfigBuilder};
pub use config::*;
pub use error::{BuildError, Result};
pub use invocation::{has_arg, Flag, Invocation, STATS_JSON_FLAG};
pub use mode::{BuildMode, Devtool};
pub use plugins::{CopyPattern, Plugin, PluginList};
pub use resolve::PathResolver;
pub use rules::{LoaderUse, Pattern, Rule, RuleKind, RuleTable};
