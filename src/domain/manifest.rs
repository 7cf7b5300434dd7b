//! Package manifest (`package.json`) domain entity.
//!
//! The manifest is kept as an order-preserving JSON object so fields this
//! crate does not model survive a load, mutate and save cycle untouched.
//! Accessors hand out snapshots; mutation goes through explicit methods.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

/// The filename of the package manifest.
pub const MANIFEST_FILENAME: &str = "package.json";

const DEFAULT_VERSION: &str = "0.0.0";
const DEFAULT_LICENSE: &str = "MIT";
const DEFAULT_MAIN: &str = "dist/index.js";
const MINIMUM_NODE: &str = ">=18";

#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Map<String, Value>,
}

impl Manifest {
    /// Build a fresh manifest from the default template.
    pub fn init(title: &str) -> Self {
        let mut document = Map::new();
        document.insert("name".into(), Value::String(normalize_name(title)));
        document.insert("version".into(), json!(DEFAULT_VERSION));
        document.insert("description".into(), json!(""));
        document.insert("main".into(), json!(DEFAULT_MAIN));
        document.insert("license".into(), json!(DEFAULT_LICENSE));
        document.insert("keywords".into(), json!(["google-apps-script"]));
        document.insert("scripts".into(), json!({}));
        document.insert("engines".into(), json!({ "node": MINIMUM_NODE }));
        Self { document }
    }

    /// Parse manifest JSON. Anything other than a JSON object is rejected.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let document: Map<String, Value> = serde_json::from_str(content)?;
        Ok(Self { document })
    }

    /// Serialize with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut content = serde_json::to_string_pretty(&self.document)?;
        content.push('\n');
        Ok(content)
    }

    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    /// Raw field access, including fields without a typed accessor.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    pub fn scripts(&self) -> BTreeMap<String, String> {
        string_table(self.document.get("scripts"))
    }

    /// Dependencies, optionally unioned with devDependencies (dev entries win).
    pub fn dependencies(&self, include_dev: bool) -> BTreeMap<String, String> {
        let mut dependencies = string_table(self.document.get("dependencies"));
        if include_dev {
            dependencies.extend(string_table(self.document.get("devDependencies")));
        }
        dependencies
    }

    /// Dependency names in manifest order, runtime entries first.
    pub fn dependency_names(&self, include_dev: bool) -> Vec<String> {
        let mut sections = vec!["dependencies"];
        if include_dev {
            sections.push("devDependencies");
        }

        sections
            .into_iter()
            .filter_map(|section| self.document.get(section).and_then(Value::as_object))
            .flat_map(|table| table.keys().cloned())
            .collect()
    }

    /// Insert or replace one script and return the updated snapshot.
    pub fn update_script(&mut self, name: &str, command: &str) -> BTreeMap<String, String> {
        let scripts = self
            .document
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));
        if !scripts.is_object() {
            *scripts = Value::Object(Map::new());
        }
        if let Value::Object(table) = scripts {
            table.insert(name.to_string(), Value::String(command.to_string()));
        }
        self.scripts()
    }
}

fn string_table(value: Option<&Value>) -> BTreeMap<String, String> {
    value
        .and_then(Value::as_object)
        .map(|table| {
            table
                .iter()
                .filter_map(|(key, value)| value.as_str().map(|v| (key.clone(), v.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

/// Turn a human project title into a package-name-safe token.
///
/// `"Some CoolTitle Here"` becomes `"some-cool-title-here"`.
pub fn normalize_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 4);
    let mut pending_separator = false;

    for ch in title.chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = true;
            continue;
        }

        // Boundary is judged on what was emitted: some capitals have no
        // lowercase form and survive into the output unchanged.
        let camel_boundary = !pending_separator
            && ch.is_uppercase()
            && name.chars().next_back().is_some_and(char::is_lowercase);
        if (pending_separator || camel_boundary) && !name.is_empty() {
            name.push('-');
        }
        pending_separator = false;

        name.extend(ch.to_lowercase());
    }

    name
}
