//! Lint configuration discovery.
//!
//! Priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/uas-lint.toml` or `.uas-lint.toml`
//! 3. `$UAS_LINT_CONFIG_DIR/config.toml`, else `~/.uas-lint/config.toml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use uas_lint_core::Config;

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Found in the user-wide config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the configuration, or returns defaults for [`ConfigSource::Default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No configuration file, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Project-level file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["uas-lint.toml", ".uas-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration source for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Takes `global_dir` as a parameter so tests need no env vars.
fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let project = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file());
    if let Some(candidate) = project {
        tracing::debug!("Found project config: {}", candidate.display());
        return ConfigSource::Project(candidate);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, |candidate| {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        })
}

/// `$UAS_LINT_CONFIG_DIR`, else `~/.uas-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("UAS_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".uas-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct Dirs {
        project: TempDir,
        global: TempDir,
    }

    impl Dirs {
        fn new() -> Self {
            Self {
                project: TempDir::new().unwrap(),
                global: TempDir::new().unwrap(),
            }
        }

        fn write_project(&self, name: &str, content: &str) -> PathBuf {
            let path = self.project.path().join(name);
            fs::write(&path, content).unwrap();
            path
        }

        fn write_global(&self, content: &str) -> PathBuf {
            let path = self.global.path().join(GLOBAL_CONFIG_NAME);
            fs::write(&path, content).unwrap();
            path
        }

        fn resolve(&self) -> ConfigSource {
            resolve_inner(self.project.path(), None, Some(self.global.path().to_path_buf()))
        }
    }

    #[test]
    fn explicit_wins_and_is_not_checked() {
        let dirs = Dirs::new();
        dirs.write_project("uas-lint.toml", "");
        let explicit = Path::new("/nonexistent/uas.toml");

        let source = resolve_inner(dirs.project.path(), Some(explicit), None);
        assert_eq!(source, ConfigSource::Explicit(explicit.to_path_buf()));
        assert!(source.load().is_err());
    }

    #[test]
    fn project_names_in_order() {
        let dirs = Dirs::new();
        let dotted = dirs.write_project(".uas-lint.toml", "");
        assert_eq!(dirs.resolve(), ConfigSource::Project(dotted));

        let plain = dirs.write_project("uas-lint.toml", "");
        assert_eq!(dirs.resolve(), ConfigSource::Project(plain));
    }

    #[test]
    fn directory_named_like_config_is_skipped() {
        let dirs = Dirs::new();
        fs::create_dir(dirs.project.path().join("uas-lint.toml")).unwrap();
        assert_eq!(dirs.resolve(), ConfigSource::Default);
    }

    #[test]
    fn global_is_a_fallback() {
        let dirs = Dirs::new();
        let global = dirs.write_global("");
        assert_eq!(dirs.resolve(), ConfigSource::Global(global));

        dirs.write_project("uas-lint.toml", "");
        assert!(matches!(dirs.resolve(), ConfigSource::Project(_)));
    }

    #[test]
    fn nothing_found_means_defaults() {
        let dirs = Dirs::new();
        let source = dirs.resolve();
        assert_eq!(source, ConfigSource::Default);
        assert!(source.path().is_none());

        let config = source.load().unwrap();
        assert!(config.preset.is_none());
        assert!(config.rule_options().is_empty());
    }

    #[test]
    fn loads_component_rules() {
        let dirs = Dirs::new();
        dirs.write_project(
            "uas-lint.toml",
            r#"
preset = "none"
fail_on = "warning"

[[components]]
component = "VanField"
attributes = ["label", { name = "placeholder", reason = "表单项需要提示" }]
"#,
        );

        let config = dirs.resolve().load().unwrap();
        assert_eq!(config.preset.as_deref(), Some("none"));
        assert_eq!(config.fail_threshold(), uas_lint_core::Severity::Warning);
        let rules = config.rule_options().flatten();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].attributes().len(), 2);
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let dirs = Dirs::new();
        let path = dirs.write_project("uas-lint.toml", "preset = [");
        let err = dirs.resolve().load().unwrap_err();
        assert!(format!("{err:#}").contains(&path.display().to_string()));
    }
}
