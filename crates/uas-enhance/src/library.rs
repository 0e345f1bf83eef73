//! Per-library metadata: tag prefix, package, export names, style imports.

use std::fmt;
use std::str::FromStr;

use uas_lint_core::naming::to_kebab_case;

/// Built-in UI libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiLibrary {
    /// `vant`
    Vant,
    /// `element-plus`
    ElementPlus,
    /// `naive-ui`
    NaiveUi,
    /// `varlet`
    Varlet,
    /// `ant-design-vue`
    AntDesignVue,
}

impl UiLibrary {
    /// All built-in libraries.
    pub const ALL: [Self; 5] = [
        Self::Vant,
        Self::ElementPlus,
        Self::NaiveUi,
        Self::Varlet,
        Self::AntDesignVue,
    ];

    /// Library identifier used in configuration.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Vant => "vant",
            Self::ElementPlus => "element-plus",
            Self::NaiveUi => "naive-ui",
            Self::Varlet => "varlet",
            Self::AntDesignVue => "ant-design-vue",
        }
    }

    /// Metadata for this library.
    #[must_use]
    pub fn meta(self) -> LibraryMeta {
        match self {
            Self::Vant => LibraryMeta::new("vant", "Van", "vant")
                .export_name(ExportName::StripPrefix)
                .style_template("vant/es/{name}/style"),
            Self::ElementPlus => LibraryMeta::new("element-plus", "El", "element-plus")
                .style_template("element-plus/es/components/{name}/style/css"),
            Self::NaiveUi => LibraryMeta::new("naive-ui", "N", "naive-ui"),
            Self::Varlet => LibraryMeta::new("varlet", "Var", "@varlet/ui")
                .export_name(ExportName::StripPrefix)
                .style_template("@varlet/ui/es/{name}/style"),
            Self::AntDesignVue => LibraryMeta::new("ant-design-vue", "A", "ant-design-vue")
                .export_name(ExportName::StripPrefix)
                .style_template("ant-design-vue/es/{name}/style"),
        }
    }
}

impl fmt::Display for UiLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned for an unknown library identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown UI library `{0}`")]
pub struct UnknownLibrary(pub String);

impl FromStr for UiLibrary {
    type Err = UnknownLibrary;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lib| lib.id() == s)
            .ok_or_else(|| UnknownLibrary(s.to_string()))
    }
}

/// How the package exports a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportName {
    /// `ElInput` is exported as `ElInput`.
    #[default]
    KeepPrefix,
    /// `VanField` is exported as `Field`.
    StripPrefix,
}

/// Metadata of a UI library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryMeta {
    name: String,
    prefix: String,
    package: String,
    export_name: ExportName,
    style_template: Option<String>,
}

impl LibraryMeta {
    /// Creates metadata with prefixed exports and no style import.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            package: package.into(),
            export_name: ExportName::KeepPrefix,
            style_template: None,
        }
    }

    /// Sets the export name policy.
    #[must_use]
    pub fn export_name(mut self, policy: ExportName) -> Self {
        self.export_name = policy;
        self
    }

    /// Sets the style import path; `{name}` becomes the kebab-case
    /// component name without the prefix.
    #[must_use]
    pub fn style_template(mut self, template: impl Into<String>) -> Self {
        self.style_template = Some(template.into());
        self
    }

    // ── Accessors ──

    /// Library identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag prefix (e.g., `El`).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Package to import from.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    // ── Derivations ──

    /// Component name with the library prefix removed.
    #[must_use]
    pub fn strip_prefix<'a>(&self, component: &'a str) -> &'a str {
        component.strip_prefix(self.prefix.as_str()).unwrap_or(component)
    }

    /// Name under which the package exports `component`.
    #[must_use]
    pub fn export_for(&self, component: &str) -> String {
        match self.export_name {
            ExportName::KeepPrefix => component.to_string(),
            ExportName::StripPrefix => self.strip_prefix(component).to_string(),
        }
    }

    /// Side-effect style import for `component`, if the library needs one.
    #[must_use]
    pub fn style_import(&self, component: &str) -> Option<String> {
        let template = self.style_template.as_ref()?;
        let name = to_kebab_case(self.strip_prefix(component));
        Some(template.replace("{name}", &name))
    }
}

impl From<UiLibrary> for LibraryMeta {
    fn from(library: UiLibrary) -> Self {
        library.meta()
    }
}
