//! Shared testing harness for `gas-init` integration tests.

use assert_cmd::Command;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scripts a fully scaffolded project without a UI framework declares.
pub(crate) const BASE_SCRIPTS: &[(&str, &str)] = &[
    ("build", "webpack --mode production"),
    ("lint", "eslint src test --ext .ts"),
    ("format", "prettier --write src test"),
    ("test", "jest"),
    ("push", "npm run build && clasp push"),
    ("deploy", "npm run push && clasp deploy"),
];

/// Dev dependencies a fully scaffolded project without a UI framework declares.
pub(crate) const BASE_DEV_DEPENDENCIES: &[&str] = &[
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

/// Testing harness providing an isolated project directory for CLI runs.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `gas-init` binary in the project directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gas-init").expect("Failed to locate gas-init binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", relative, err))
    }

    pub(crate) fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }

    /// Write a project that needs no npm or clasp calls: every script and dev
    /// dependency declared, sources present, clasp already configured.
    pub(crate) fn write_provisioned_project(&self) {
        let scripts: Map<String, Value> = BASE_SCRIPTS
            .iter()
            .map(|(name, command)| (name.to_string(), json!(command)))
            .collect();
        let dev_dependencies: Map<String, Value> =
            BASE_DEV_DEPENDENCIES.iter().map(|name| (name.to_string(), json!("^1.0.0"))).collect();
        let manifest = json!({
            "name": "provisioned",
            "version": "1.2.3",
            "private": true,
            "scripts": scripts,
            "devDependencies": dev_dependencies,
        });

        let mut content = serde_json::to_string_pretty(&manifest).expect("serialize manifest");
        content.push('\n');
        self.write("package.json", &content);
        self.write("src/index.ts", "export function main(): void {}\n");
        self.write(".clasp.json", "{\"scriptId\":\"1EXISTING\",\"rootDir\":\"dist\"}\n");
        self.write("gas-init.toml", "[ui]\nframework = \"none\"\n");
    }
}
