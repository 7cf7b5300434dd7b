use std::cell::RefCell;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::{AppError, DependencyKind};
use crate::ports::PackageInstaller;

/// Installer that records calls and writes the packages into `package.json`
/// the way npm would.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeInstaller {
    pub calls: RefCell<Vec<(Vec<String>, DependencyKind)>>,
    failure: Option<String>,
}

#[allow(dead_code)]
impl FakeInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self { calls: RefCell::default(), failure: Some(message.to_string()) }
    }

    pub fn calls(&self) -> Vec<(Vec<String>, DependencyKind)> {
        self.calls.borrow().clone()
    }
}

impl PackageInstaller for FakeInstaller {
    fn install(
        &self,
        project_dir: &Path,
        packages: &[String],
        kind: DependencyKind,
    ) -> Result<(), AppError> {
        self.calls.borrow_mut().push((packages.to_vec(), kind));
        if let Some(message) = &self.failure {
            return Err(AppError::external("npm", message.clone()));
        }

        let path = project_dir.join("package.json");
        let mut document: Map<String, Value> = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).expect("fake installer reads JSON"),
            Err(_) => Map::new(),
        };
        let section = match kind {
            DependencyKind::Runtime => "dependencies",
            DependencyKind::Development => "devDependencies",
        };
        let table = document
            .entry(section)
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .expect("dependency section is an object");
        for package in packages {
            table.insert(package.clone(), Value::String("^1.0.0".into()));
        }

        let mut content = serde_json::to_string_pretty(&document).expect("serialize");
        content.push('\n');
        fs::write(&path, content)?;
        Ok(())
    }
}
