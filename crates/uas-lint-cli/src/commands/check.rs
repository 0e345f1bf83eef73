//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use uas_lint_core::{Analyzer, Config, RuleOptions};
use uas_lint_markup::HtmlTemplateExtractor;
use uas_lint_rules::{Preset, RequireComponentAttributes};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = source.load()?;
    let threshold = config.fail_threshold();
    let rule = build_rule(&config)?;

    let analyzer = Analyzer::builder()
        .root(path)
        .extractor(HtmlTemplateExtractor::new())
        .excludes(exclude)
        .config(config)
        .rule(rule)
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, analyzer.root())?;

    if result.has_violations_at(threshold) {
        std::process::exit(1);
    }

    Ok(())
}

/// Preset rules first, then the config file's own, so the file wins on
/// colliding component names.
fn build_rule(config: &Config) -> Result<RequireComponentAttributes> {
    let preset: Preset = config
        .preset
        .as_deref()
        .map(str::parse::<Preset>)
        .transpose()?
        .unwrap_or_default();

    let options: RuleOptions = preset.options().merge(config.rule_options());
    Ok(RequireComponentAttributes::from_options(&options).severity(preset.severity()))
}
