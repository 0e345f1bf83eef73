//! Runs the rule over a fixture project through the analyzer.

use std::path::{Path, PathBuf};

use uas_lint_core::{Analyzer, Rule, RuleOptions, Severity};
use uas_lint_markup::HtmlTemplateExtractor;
use uas_lint_rules::{Preset, RequireComponentAttributes};

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project")
}

fn analyzer(rule: RequireComponentAttributes) -> Analyzer {
    Analyzer::builder()
        .root(fixture_root())
        .extractor(HtmlTemplateExtractor::new())
        .rule(rule)
        .build()
        .unwrap()
}

#[test]
fn recommended_preset_reports_fixture_project() {
    let preset = Preset::Recommended;
    let rule = RequireComponentAttributes::from_options(&preset.options()).severity(preset.severity());
    let result = analyzer(rule).analyze().unwrap();

    assert_eq!(result.files_checked, 3);
    assert!(!result.has_errors());
    assert!(result.has_violations_at(Severity::Warning));

    let report = result
        .violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(report, @r#"
    legacy/page.html:1:23: warning [UAS001] Component <ElInput> must define attribute "maxlength" (统一输入上限，防止超长数据写入后端).
    legacy/page.html:1:13: warning [UAS001] Component <ElInput> must define attribute "show-word-limit" (搭配 maxlength 展示字数提示).
    src/components/UserForm.vue:3:5: warning [UAS001] Component <ElInput> must define attribute "maxlength" (统一输入上限，防止超长数据写入后端).
    src/components/UserForm.vue:3:5: warning [UAS001] Component <ElInput> must define attribute "show-word-limit" (搭配 maxlength 展示字数提示).
    src/components/UserForm.vue:5:50: warning [UAS001] Component <ElInputNumber> must define attribute "max" (数值型输入必须设置 max 防止越界).
    "#);
}

#[test]
fn empty_rule_set_skips_the_project() {
    let rule = RequireComponentAttributes::from_options(&RuleOptions::new());
    assert!(rule.is_inert());

    let result = analyzer(rule).analyze().unwrap();
    assert_eq!(result.files_checked, 0);
    assert!(result.violations.is_empty());
}

#[test]
fn custom_library_rules_name_the_component() {
    let options = uas_lint_core::declarative::load_options_from_toml(
        r#"
[[libraries]]
name = "vant"

[[libraries.components]]
component = "VanField"
matchNames = ["van-field"]
attributes = [{ name = "maxlength", reason = "Form inputs need consistent limit" }]
"#,
    )
    .unwrap();
    let rule = RequireComponentAttributes::from_options(&options);
    let extractor = HtmlTemplateExtractor::new();

    let analyzer = Analyzer::builder()
        .root("/project")
        .extractor(extractor)
        .rule(rule)
        .build()
        .unwrap();
    let violations = analyzer.analyze_document(
        Path::new("/project/Field.vue"),
        "<template>\n  <van-field />\n</template>\n",
    );

    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("VanField"));
    assert!(violations[0].message.contains("maxlength"));
    assert_eq!(violations[0].severity, Severity::Error);
}

#[test]
fn empty_then_missing_follows_declaration_order() {
    let preset = Preset::Recommended;
    let analyzer = Analyzer::builder()
        .root("/project")
        .extractor(HtmlTemplateExtractor::new())
        .rule(RequireComponentAttributes::from_options(&preset.options()))
        .build()
        .unwrap();

    let violations = analyzer.analyze_document(
        Path::new("/project/Form.vue"),
        "<template>\n  <el-input maxlength=\"\" />\n</template>\n",
    );

    let found: Vec<_> = violations
        .iter()
        .map(|v| (v.location.line, v.location.column, v.message.contains("\"maxlength\"")))
        .collect();
    assert_eq!(found, [(2, 13, true), (2, 3, false)]);
}

#[test]
fn comparison_in_interpolation_does_not_hide_components() {
    let preset = Preset::Recommended;
    let analyzer = Analyzer::builder()
        .root("/project")
        .extractor(HtmlTemplateExtractor::new())
        .rule(RequireComponentAttributes::from_options(&preset.options()))
        .build()
        .unwrap();

    let violations = analyzer.analyze_document(
        Path::new("/project/Count.vue"),
        "<template>\n  <div>{{ count < 10 ? 'a' : 'b' }}</div>\n  <el-input />\n</template>\n",
    );

    assert_eq!(violations.len(), 2);
    assert!(violations.iter().all(|v| v.location.line == 3 && v.location.column == 3));
}
