use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;

use crate::domain::{AppError, ScriptType};
use crate::ports::DeployTool;

/// Deploy tool that records invocations and writes `.clasp.json` like clasp.
#[allow(dead_code)]
pub struct FakeDeployTool {
    logged_in: Cell<bool>,
    create_output: String,
    pub calls: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeDeployTool {
    pub fn new() -> Self {
        Self {
            logged_in: Cell::new(true),
            create_output: "Created new standalone script: https://script.google.com/d/1NEW/edit\n"
                .to_string(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn logged_out(self) -> Self {
        self.logged_in.set(false);
        self
    }

    pub fn with_create_output(mut self, output: &str) -> Self {
        self.create_output = output.to_string();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn write_project(project_dir: &Path, script_id: &str, root_dir: &str) -> Result<(), AppError> {
        fs::write(
            project_dir.join(".clasp.json"),
            format!("{{\"scriptId\":\"{}\",\"rootDir\":\"{}\"}}\n", script_id, root_dir),
        )?;
        Ok(())
    }
}

impl DeployTool for FakeDeployTool {
    fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    fn login(&self) -> Result<(), AppError> {
        self.calls.borrow_mut().push("login".into());
        self.logged_in.set(true);
        Ok(())
    }

    fn create(
        &self,
        project_dir: &Path,
        title: &str,
        script_type: ScriptType,
        root_dir: &str,
    ) -> Result<String, AppError> {
        self.calls.borrow_mut().push(format!("create {} {} {}", title, script_type, root_dir));
        Self::write_project(project_dir, "1NEW", root_dir)?;
        Ok(self.create_output.clone())
    }

    fn clone_project(
        &self,
        project_dir: &Path,
        script_id: &str,
        root_dir: &str,
    ) -> Result<(), AppError> {
        self.calls.borrow_mut().push(format!("clone {} {}", script_id, root_dir));
        Self::write_project(project_dir, script_id, root_dir)
    }

    fn pull(&self, _project_dir: &Path) -> Result<(), AppError> {
        self.calls.borrow_mut().push("pull".into());
        Ok(())
    }
}
