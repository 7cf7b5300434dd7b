use std::cell::RefCell;
use std::fs;
use std::path::Path;

use crate::domain::{AppError, UiFramework};
use crate::ports::UiGenerator;

/// UI generator that records requests and creates a minimal project.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeUiGenerator {
    pub generated: RefCell<Vec<(UiFramework, String)>>,
}

#[allow(dead_code)]
impl FakeUiGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generated(&self) -> Vec<(UiFramework, String)> {
        self.generated.borrow().clone()
    }
}

impl UiGenerator for FakeUiGenerator {
    fn generate(
        &self,
        project_dir: &Path,
        framework: UiFramework,
        name: &str,
    ) -> Result<(), AppError> {
        self.generated.borrow_mut().push((framework, name.to_string()));
        let dir = project_dir.join(name);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("package.json"), format!("{{\"name\":\"{}\"}}\n", name))?;
        Ok(())
    }
}
