//! Project profile: scripts, dependencies, and config tables.
//!
//! A profile is chosen once from the UI framework selection and passed down
//! explicitly to every step that needs it.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// UI framework scaffolded into `ui/` next to the Apps Script sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiFramework {
    Vue,
    React,
}

impl UiFramework {
    pub const ALL: [UiFramework; 2] = [UiFramework::Vue, UiFramework::React];

    pub fn as_str(self) -> &'static str {
        match self {
            UiFramework::Vue => "vue",
            UiFramework::React => "react",
        }
    }

    /// Template name passed to the Vite project generator.
    pub fn vite_template(self) -> &'static str {
        match self {
            UiFramework::Vue => "vue-ts",
            UiFramework::React => "react-ts",
        }
    }
}

impl fmt::Display for UiFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiFramework {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vue" => Ok(UiFramework::Vue),
            "react" => Ok(UiFramework::React),
            _ => Err(AppError::UnknownFramework(value.to_string())),
        }
    }
}

/// Kind of dependency section an install writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Development,
}

/// A `(source, target)` pair: `source` is relative to the embedded asset root,
/// `target` is relative to the project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigEntry {
    pub source: &'static str,
    pub target: &'static str,
}

const fn entry(source: &'static str, target: &'static str) -> ConfigEntry {
    ConfigEntry { source, target }
}

const BASE_SCRIPTS: &[(&str, &str)] = &[
    ("build", "webpack --mode production"),
    ("lint", "eslint src test --ext .ts"),
    ("format", "prettier --write src test"),
    ("test", "jest"),
    ("push", "npm run build && clasp push"),
    ("deploy", "npm run push && clasp deploy"),
];

const UI_SCRIPTS: &[(&str, &str)] = &[
    ("build", "npm run build:ui && webpack --mode production"),
    ("build:ui", "npm --prefix ui run build"),
    ("dev:ui", "npm --prefix ui run dev"),
];

const BASE_DEV_DEPENDENCIES: &[&str] = &[
    "@google/clasp",
    "@types/google-apps-script",
    "typescript",
    "webpack",
    "webpack-cli",
    "ts-loader",
    "gas-webpack-plugin",
    "copy-webpack-plugin",
    "eslint",
    "@typescript-eslint/parser",
    "@typescript-eslint/eslint-plugin",
    "prettier",
    "jest",
    "ts-jest",
    "@types/jest",
];

const UI_DEV_DEPENDENCIES: &[&str] = &["html-webpack-plugin", "html-inline-script-webpack-plugin"];

const BASE_COPY: &[ConfigEntry] = &[
    entry("config/base/tsconfig.json", "tsconfig.json"),
    entry("config/base/webpack.config.js", "webpack.config.js"),
    entry("config/base/jest.config.js", "jest.config.js"),
    entry("config/base/eslintrc.json", ".eslintrc.json"),
    entry("config/base/prettierrc.json", ".prettierrc.json"),
];

const BASE_MERGE: &[ConfigEntry] = &[
    entry("config/base/gitignore", ".gitignore"),
    entry("config/base/claspignore", ".claspignore"),
    entry("config/base/eslintignore", ".eslintignore"),
    entry("config/base/prettierignore", ".prettierignore"),
];

const VUE_COPY: &[ConfigEntry] = &[entry("config/vue/webpack.config.js", "webpack.config.js")];
const VUE_MERGE: &[ConfigEntry] = &[entry("config/vue/gitignore", ".gitignore")];

const REACT_COPY: &[ConfigEntry] = &[entry("config/react/webpack.config.js", "webpack.config.js")];
const REACT_MERGE: &[ConfigEntry] = &[entry("config/react/gitignore", ".gitignore")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    ui: Option<UiFramework>,
    scripts: Vec<(&'static str, &'static str)>,
    dependencies: Vec<&'static str>,
    dev_dependencies: Vec<&'static str>,
    copy: Vec<ConfigEntry>,
    merge: Vec<ConfigEntry>,
}

impl Profile {
    pub fn for_framework(ui: Option<UiFramework>) -> Self {
        let (variant_copy, variant_merge): (&[ConfigEntry], &[ConfigEntry]) = match ui {
            None => (&[], &[]),
            Some(UiFramework::Vue) => (VUE_COPY, VUE_MERGE),
            Some(UiFramework::React) => (REACT_COPY, REACT_MERGE),
        };

        let variant_scripts: &[(&str, &str)] = if ui.is_some() { UI_SCRIPTS } else { &[] };
        let scripts = override_by_key(BASE_SCRIPTS, variant_scripts, |(name, _)| *name);
        let copy = override_by_key(BASE_COPY, variant_copy, |entry| entry.target);
        let merge = BASE_MERGE.iter().chain(variant_merge).copied().collect();

        let mut dev_dependencies = BASE_DEV_DEPENDENCIES.to_vec();
        if ui.is_some() {
            dev_dependencies.extend_from_slice(UI_DEV_DEPENDENCIES);
        }

        Self { ui, scripts, dependencies: Vec::new(), dev_dependencies, copy, merge }
    }

    pub fn ui(&self) -> Option<UiFramework> {
        self.ui
    }

    pub fn scripts(&self) -> &[(&'static str, &'static str)] {
        &self.scripts
    }

    pub fn dependencies(&self, kind: DependencyKind) -> &[&'static str] {
        match kind {
            DependencyKind::Runtime => &self.dependencies,
            DependencyKind::Development => &self.dev_dependencies,
        }
    }

    pub fn copy_entries(&self) -> &[ConfigEntry] {
        &self.copy
    }

    pub fn merge_entries(&self) -> &[ConfigEntry] {
        &self.merge
    }
}

/// Base entries in order, with any entry sharing a key with a variant entry
/// replaced in place; variant entries with new keys go last.
fn override_by_key<T, K>(base: &[T], variant: &[T], key: impl Fn(&T) -> K) -> Vec<T>
where
    T: Copy,
    K: PartialEq,
{
    let mut merged: Vec<T> = base
        .iter()
        .map(|item| {
            variant.iter().find(|candidate| key(*candidate) == key(item)).copied().unwrap_or(*item)
        })
        .collect();
    merged.extend(
        variant
            .iter()
            .filter(|candidate| !base.iter().any(|existing| key(existing) == key(*candidate)))
            .copied(),
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_profile_has_no_ui_entries() {
        let profile = Profile::for_framework(None);

        assert!(profile.ui().is_none());
        assert!(profile.scripts().iter().all(|(name, _)| !name.ends_with(":ui")));
        assert!(profile.dependencies(DependencyKind::Runtime).is_empty());
        assert!(profile.dependencies(DependencyKind::Development).contains(&"@google/clasp"));
        assert!(
            profile
                .copy_entries()
                .iter()
                .any(|e| e.source == "config/base/webpack.config.js")
        );
    }

    #[test]
    fn framework_variant_replaces_webpack_config_in_place() {
        let base = Profile::for_framework(None);
        let vue = Profile::for_framework(Some(UiFramework::Vue));

        assert_eq!(vue.copy_entries().len(), base.copy_entries().len());
        let webpack: Vec<_> =
            vue.copy_entries().iter().filter(|e| e.target == "webpack.config.js").collect();
        assert_eq!(webpack.len(), 1);
        assert_eq!(webpack[0].source, "config/vue/webpack.config.js");

        assert_eq!(vue.merge_entries().len(), base.merge_entries().len() + 1);
    }

    #[test]
    fn ui_profile_rewrites_build_and_adds_ui_scripts() {
        let react = Profile::for_framework(Some(UiFramework::React));
        let scripts = react.scripts();

        assert_eq!(scripts[0], ("build", "npm run build:ui && webpack --mode production"));
        assert!(scripts.iter().any(|(name, _)| *name == "build:ui"));
        assert!(scripts.iter().any(|(name, _)| *name == "dev:ui"));
        assert!(
            react.dependencies(DependencyKind::Development).contains(&"html-webpack-plugin")
        );
    }

    #[test]
    fn parses_framework_names() {
        assert_eq!("Vue".parse::<UiFramework>().unwrap(), UiFramework::Vue);
        assert_eq!(" react ".parse::<UiFramework>().unwrap(), UiFramework::React);
        assert!("svelte".parse::<UiFramework>().is_err());
    }
}
