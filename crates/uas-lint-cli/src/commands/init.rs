//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# uas-lint configuration

# Built-in component rules: "recommended" (Element Plus input limits) or "none"
preset = "recommended"

# Exit with status 1 when violations at this severity or above exist
fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Respect .gitignore files
respect_gitignore = true

[rules.require-component-attributes]
enabled = true
# severity = "error"  # Override the preset's severity

# Component rules. Attributes are a name or a table:
#   { name = "show-word-limit", allowEmpty = true, reason = "...", suggestion = "..." }
#
# [[components]]
# component = "ElInput"
# matchNames = ["el-input"]
# attributes = ["maxlength", { name = "show-word-limit", allowEmpty = true }]

# [[libraries]]
# name = "vant"
#
# [[libraries.components]]
# component = "VanField"
# attributes = [{ name = "maxlength", reason = "统一输入上限" }]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("uas-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created uas-lint.toml");
    println!("\nNext steps:");
    println!("  1. Add component rules to uas-lint.toml");
    println!("  2. Run: uas-lint check");

    Ok(())
}
