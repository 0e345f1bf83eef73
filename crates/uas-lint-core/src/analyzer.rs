//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::DocumentContext;
use crate::markup::TemplateExtractor;
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// No template extractor was configured.
    #[error("No template extractor configured")]
    MissingExtractor,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    extractor: Option<Box<dyn TemplateExtractor>>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the parser that turns documents into markup elements.
    #[must_use]
    pub fn extractor<E: TemplateExtractor + 'static>(mut self, extractor: E) -> Self {
        self.extractor = Some(Box::new(extractor));
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if no extractor was set, an exclude pattern is not a
    /// valid glob, or the current directory cannot be determined.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let extractor = self.extractor.ok_or(AnalyzerError::MissingExtractor)?;
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let exclude_patterns = self
            .exclude_patterns
            .iter()
            .chain(&config.analyzer.exclude)
            .map(|p| glob::Pattern::new(p.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Analyzer {
            root,
            extractor,
            rules: self.rules,
            exclude_patterns,
            config,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    extractor: Box<dyn TemplateExtractor>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<glob::Pattern>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all matching documents under the root.
    ///
    /// Documents that cannot be read as UTF-8 are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory walk fails.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        let mut result = LintResult::new();

        let active: Vec<&dyn Rule> = self
            .rules
            .iter()
            .map(Box::as_ref)
            .filter(|rule| {
                if !self.config.is_rule_enabled(rule.name()) {
                    debug!("Skipping disabled rule: {}", rule.name());
                    return false;
                }
                if rule.is_inert() {
                    debug!("Skipping inert rule: {}", rule.name());
                    return false;
                }
                true
            })
            .collect();

        if active.is_empty() {
            info!("No active rules, nothing to analyze");
            return Ok(result);
        }

        info!("Starting analysis at {:?}", self.root);
        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            let content = match std::fs::read_to_string(file_path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Failed to read {}: {e}", file_path.display());
                    continue;
                }
            };
            result
                .violations
                .extend(self.analyze_source(file_path, &content, &active));
            result.files_checked += 1;
        }

        // Files are visited in sorted order. Inside a document the rules'
        // emission order is kept; it is not a position order.
        result
            .violations
            .sort_by(|a, b| a.location.file.cmp(&b.location.file));

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes one in-memory document with every enabled rule.
    #[must_use]
    pub fn analyze_document(&self, path: &Path, content: &str) -> Vec<Violation> {
        let active: Vec<&dyn Rule> = self
            .rules
            .iter()
            .map(Box::as_ref)
            .filter(|rule| self.config.is_rule_enabled(rule.name()))
            .collect();
        self.analyze_source(path, content, &active)
    }

    fn analyze_source(&self, path: &Path, content: &str, rules: &[&dyn Rule]) -> Vec<Violation> {
        debug!("Analyzing: {}", path.display());

        let extension = extension_of(path);
        let elements = self.extractor.extract(content, &extension);
        let ctx = DocumentContext::new(path, content, &self.root);

        let mut violations = Vec::new();
        for rule in rules {
            let rule_violations = rule.check(&ctx, &elements);
            violations.extend(self.apply_severity_override(rule.name(), rule_violations));
        }
        violations
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Discovers all documents the extractor understands.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let supported = self.extractor.extensions();

        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.config.analyzer.respect_gitignore);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || !supported.contains(&extension_of(path).as_str()) {
                continue;
            }
            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.matches_path(path) || pattern.matches_path(relative))
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}
