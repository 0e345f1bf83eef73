//! List rules command implementation.

use uas_lint_core::Rule;
use uas_lint_rules::{Preset, RequireComponentAttributes};

/// Runs the list-rules command.
pub fn run() {
    let rule = RequireComponentAttributes::default();

    println!("Available rules:\n");
    println!("{:<10} {:<30} Description", "Code", "Name");
    println!("{}", "-".repeat(80));
    println!(
        "{:<10} {:<30} {}",
        rule.code(),
        rule.name(),
        rule.description()
    );

    println!("\nPresets:");
    for (name, preset) in [("recommended", Preset::Recommended), ("none", Preset::None)] {
        let options = preset.options();
        let components: Vec<_> = options.flatten().iter().map(ToString::to_string).collect();
        let listed = if components.is_empty() {
            "no component rules".to_string()
        } else {
            components.join(", ")
        };
        println!("  {name:<12} - {listed} ({})", preset.severity());
    }

    println!("\nAdd your own rules in uas-lint.toml:");
    println!("  [[components]]");
    println!("  component = \"VanField\"");
    println!("  attributes = [\"maxlength\"]");
}
