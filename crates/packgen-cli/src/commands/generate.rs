//! Generate command: emit the bundler configuration.

use std::fs;

use packgen_builder::{BuildMode, ConfigBuilder, Invocation};

use crate::cli::GenerateArgs;
use crate::commands::utils::load_project;
use crate::error::{Result, ResultExt};
use crate::ui;

pub fn execute(args: GenerateArgs, argv: &[String]) -> Result<()> {
    let project = load_project(&args.project)?;
    if project.source.is_none() {
        ui::info("No packgen.toml found, using default options");
    }
    warn_on_unknown_mode(args.project.mode.as_deref());

    let invocation = Invocation::new(args.project.mode.clone(), argv.iter().cloned());

    tracing::debug!(stats_json = args.json, "generating configuration");

    let config = ConfigBuilder::for_project(&project)?.build(&invocation)?;
    let rendered = render(&config, args.compact)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(path, format!("{rendered}\n")).with_path(path)?;
            ui::success(&format!(
                "Wrote {} configuration to {}",
                config.mode,
                path.display()
            ));
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Unknown modes silently mean development for the bundler; say so here.
pub(crate) fn warn_on_unknown_mode(mode: Option<&str>) {
    if let Some(mode) = mode.filter(|m| !matches!(*m, "production" | "development")) {
        ui::warning(&format!(
            "Unknown mode '{mode}', building for {}",
            BuildMode::Development
        ));
    }
}

pub(crate) fn render(config: &packgen_builder::BuildConfig, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProjectArgs;
    use tempfile::TempDir;

    fn args_for(dir: &TempDir, mode: &str) -> GenerateArgs {
        GenerateArgs {
            project: ProjectArgs {
                mode: Some(mode.to_string()),
                config: None,
                cwd: Some(dir.path().to_path_buf()),
            },
            output: Some(dir.path().join("out").join("webpack.json")),
            ..GenerateArgs::default()
        }
    }

    #[test]
    fn writes_configuration_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("packgen.toml"), "devServerPort = 9090\n").unwrap();

        let args = args_for(&dir, "production");
        execute(args, &["packgen".to_string()]).unwrap();

        let written = fs::read_to_string(dir.path().join("out").join("webpack.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["mode"], "production");
        assert_eq!(value["devServer"]["port"], 9090);
        assert_eq!(value["module"]["rules"][0]["use"][0]["options"]["silent"], false);
    }

    #[test]
    fn json_flag_in_argv_silences_compiler() {
        let dir = TempDir::new().unwrap();

        let args = args_for(&dir, "development");
        let argv = ["packgen", "generate", "--json"].map(String::from);
        execute(args, &argv).unwrap();

        let written = fs::read_to_string(dir.path().join("out").join("webpack.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["module"]["rules"][0]["use"][0]["options"]["silent"], true);
    }

    #[test]
    fn missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        let mut args = args_for(&dir, "production");
        args.project.config = Some("nope.toml".into());

        let err = execute(args, &[]).unwrap_err();
        assert!(matches!(
            err,
            crate::CliError::Config(packgen_config::ConfigError::NotFound(_))
        ));
    }
}
