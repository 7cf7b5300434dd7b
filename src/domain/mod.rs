pub mod comparison;
pub mod config;
pub mod config_merge;
pub mod deployment;
pub mod error;
pub mod manifest;
pub mod options;
pub mod profile;
pub mod scripts;

pub use comparison::{Comparison, ComparisonEntry};
pub use config::{CONFIG_FILENAME, ProjectConfig};
pub use config_merge::{CopyPlan, MergePlan, plan_copy, plan_merge};
pub use deployment::{CLASP_PROJECT_FILENAME, ClaspProject, DEPLOY_ROOT_DIR, ProjectLinks};
pub use error::AppError;
pub use manifest::{MANIFEST_FILENAME, Manifest, normalize_name};
pub use options::{AnswerPolicy, InitOptions, ScriptType};
pub use profile::{ConfigEntry, DependencyKind, Profile, UiFramework};
pub use scripts::sync_scripts;
