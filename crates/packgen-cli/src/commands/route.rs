//! Route command: report the rule a file is handled by.

use packgen_builder::{ConfigBuilder, Invocation, Rule};

use crate::cli::RouteArgs;
use crate::commands::generate::warn_on_unknown_mode;
use crate::commands::utils::load_project;
use crate::error::{CliError, Result};

pub fn execute(args: RouteArgs, argv: &[String]) -> Result<()> {
    let project = load_project(&args.project)?;
    warn_on_unknown_mode(args.project.mode.as_deref());
    let invocation = Invocation::new(args.project.mode.clone(), argv.iter().cloned());
    let config = ConfigBuilder::for_project(&project)?.build(&invocation)?;

    let (index, rule) = config
        .module
        .rules
        .route(&args.file)
        .ok_or_else(|| CliError::NoMatchingRule(args.file.clone()))?;

    println!("{}", describe(index, rule));
    Ok(())
}

/// `rule #2 (script) /\.js$/ excluding /node_modules/: babel-loader`
pub(crate) fn describe(index: usize, rule: &Rule) -> String {
    let mut line = format!(
        "rule #{} ({}) /{}/",
        index + 1,
        rule.kind.as_str(),
        rule.test.as_str()
    );
    if let Some(exclude) = &rule.exclude {
        line.push_str(&format!(" excluding /{}/", exclude.as_str()));
    }
    line.push_str(": ");
    line.push_str(&rule.loaders().collect::<Vec<_>>().join(" -> "));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use packgen_builder::{BuildMode, RuleTable};
    use packgen_config::BabelOptions;

    #[test]
    fn describes_script_rule() {
        let rules = RuleTable::standard(BuildMode::Development, &BabelOptions::default(), false)
            .unwrap();
        let (index, rule) = rules.route("src/interop.js").unwrap();
        assert_eq!(
            describe(index, rule),
            r"rule #2 (script) /\.js$/ excluding /node_modules/: babel-loader"
        );
    }

    #[test]
    fn describes_style_chain() {
        let rules = RuleTable::standard(BuildMode::Development, &BabelOptions::default(), false)
            .unwrap();
        let (index, rule) = rules.route("public/index.scss").unwrap();
        assert!(describe(index, rule).ends_with(
            "style-loader -> css-loader -> resolve-url-loader -> sass-loader"
        ));
    }
}
