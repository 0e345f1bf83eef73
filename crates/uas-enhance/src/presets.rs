//! Built-in per-library rules.

use crate::library::UiLibrary;
use crate::props::{AutoPlaceholder, UiRule, UiRules};

const INPUT: &str = "请输入{label}";
const SELECT: &str = "请选择{label}";

fn placeholder(template: &str) -> AutoPlaceholder {
    AutoPlaceholder::Template(template.to_string())
}

fn rules<const N: usize>(entries: [(&str, UiRule); N]) -> UiRules {
    entries
        .into_iter()
        .map(|(name, rule)| (name.to_string(), rule))
        .collect()
}

/// Preset for a library identifier; empty for unknown libraries.
#[must_use]
pub fn for_library(library: &str) -> UiRules {
    library
        .parse::<UiLibrary>()
        .map(preset)
        .unwrap_or_default()
}

/// Preset rules of a built-in library.
#[must_use]
pub fn preset(library: UiLibrary) -> UiRules {
    match library {
        UiLibrary::ElementPlus => element_plus(),
        UiLibrary::Vant => vant(),
        UiLibrary::NaiveUi => naive_ui(),
        UiLibrary::Varlet => varlet(),
        UiLibrary::AntDesignVue => ant_design_vue(),
    }
}

fn element_plus() -> UiRules {
    rules([
        (
            "ElInput",
            UiRule::new()
                .default_prop("clearable", true)
                .auto_placeholder(placeholder(INPUT)),
        ),
        (
            "ElSelect",
            UiRule::new()
                .default_prop("clearable", true)
                .default_prop("filterable", true)
                .auto_placeholder(placeholder(SELECT)),
        ),
        (
            "ElButton",
            UiRule::new()
                .default_prop("type", "warning")
                .default_prop("loading", true),
        ),
        (
            "ElDatePicker",
            UiRule::new()
                .default_prop("clearable", true)
                .default_prop("valueFormat", "YYYY-MM-DD")
                .auto_placeholder(placeholder(SELECT)),
        ),
        (
            "ElTimePicker",
            UiRule::new()
                .default_prop("clearable", true)
                .auto_placeholder(placeholder(SELECT)),
        ),
    ])
}

fn vant() -> UiRules {
    rules([
        (
            "VanField",
            UiRule::new()
                .default_prop("clearable", true)
                .default_prop("inputAlign", "right")
                .auto_placeholder(placeholder(INPUT)),
        ),
        ("VanForm", UiRule::new().default_prop("colon", true)),
        (
            "VanButton",
            UiRule::new()
                .default_prop("round", true)
                .default_prop("type", "danger"),
        ),
    ])
}

fn naive_ui() -> UiRules {
    rules([
        (
            "NInput",
            UiRule::new()
                .default_prop("clearable", true)
                .auto_placeholder(placeholder(INPUT)),
        ),
        (
            "NSelect",
            UiRule::new()
                .default_prop("clearable", true)
                .default_prop("filterable", true)
                .default_prop("consistentMenuWidth", false)
                .auto_placeholder(placeholder(SELECT)),
        ),
        (
            "NDatePicker",
            UiRule::new()
                .default_prop("clearable", true)
                .default_prop("valueFormat", "yyyy-MM-dd")
                .auto_placeholder(placeholder(SELECT)),
        ),
    ])
}

fn varlet() -> UiRules {
    rules([
        (
            "VarInput",
            UiRule::new()
                .default_prop("clearable", true)
                .auto_placeholder(placeholder(INPUT)),
        ),
        (
            "VarSelect",
            UiRule::new()
                .default_prop("clearable", true)
                .auto_placeholder(placeholder(SELECT)),
        ),
    ])
}

fn ant_design_vue() -> UiRules {
    rules([
        (
            "AInput",
            UiRule::new()
                .default_prop("allowClear", true)
                .auto_placeholder(placeholder(INPUT)),
        ),
        (
            "ASelect",
            UiRule::new()
                .default_prop("allowClear", true)
                .default_prop("showSearch", true)
                .auto_placeholder(placeholder(SELECT)),
        ),
        (
            "ADatePicker",
            UiRule::new()
                .default_prop("allowClear", true)
                .default_prop("valueFormat", "YYYY-MM-DD")
                .auto_placeholder(placeholder(SELECT)),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{resolve_props, Props};
    use serde_json::json;

    #[test]
    fn every_library_has_a_preset() {
        for lib in UiLibrary::ALL {
            assert!(!preset(lib).is_empty(), "{lib}");
        }
        assert!(for_library("unknown").is_empty());
    }

    #[test]
    fn preset_names_use_library_prefix() {
        for lib in UiLibrary::ALL {
            let prefix = lib.meta().prefix().to_string();
            assert!(preset(lib).keys().all(|name| name.starts_with(&prefix)), "{lib}");
        }
    }

    #[test]
    fn element_plus_select_placeholder() {
        let rules = for_library("element-plus");
        let mut explicit = Props::new();
        explicit.insert("label".into(), json!("城市"));
        let out = resolve_props(&rules["ElSelect"], &Props::new(), &explicit);
        assert_eq!(out["placeholder"], json!("请选择城市"));
        assert_eq!(out["filterable"], json!(true));
    }

    #[test]
    fn button_has_no_placeholder_policy() {
        let rules = preset(UiLibrary::Vant);
        assert!(!rules["VanButton"].placeholder_policy().is_enabled());
    }
}
