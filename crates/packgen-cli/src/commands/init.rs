//! Init command: write the webpack config that consumes `packgen generate`.
//!
//! The generated JSON carries regex sources and plugin descriptors; the
//! written `webpack.config.js` turns them into `RegExp`s and plugin
//! instances before handing the object to webpack.

use std::fs;
use std::path::PathBuf;

use crate::cli::InitArgs;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

pub const WEBPACK_CONFIG_FILE: &str = "webpack.config.js";

pub(crate) const WEBPACK_CONFIG: &str = include_str!("../../assets/webpack.config.js");

pub fn execute(args: InitArgs) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let path: PathBuf = dir.join(WEBPACK_CONFIG_FILE);

    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    fs::create_dir_all(&dir).with_path(&dir)?;
    fs::write(&path, WEBPACK_CONFIG).with_path(&path)?;

    ui::success(&format!("Created {}", path.display()));
    ui::info("Build with `webpack --mode production` or serve with `webpack serve`");
    Ok(())
}
