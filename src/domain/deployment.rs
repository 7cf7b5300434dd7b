//! Deployment tool (clasp) project settings and output scraping.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use url::Url;

/// Project file clasp writes after `create` or `clone`.
pub const CLASP_PROJECT_FILENAME: &str = ".clasp.json";

/// Directory clasp pushes from; webpack emits here.
pub const DEPLOY_ROOT_DIR: &str = "dist";

static DOCUMENT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Created new Google [^:\n]+:\s*(https://drive\.google\.com/\S+)")
        .expect("document link pattern is valid")
});

static SCRIPT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Created new [^:\n]*script:\s*(https://script\.google\.com/\S+)")
        .expect("script link pattern is valid")
});

/// Links reported by `clasp create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    /// Container document (sheet, doc, form...), absent for standalone scripts.
    pub document: Option<Url>,
    pub script: Option<Url>,
}

impl ProjectLinks {
    pub fn scrape(output: &str) -> Self {
        Self {
            document: capture_url(&DOCUMENT_LINK, output),
            script: capture_url(&SCRIPT_LINK, output),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_none() && self.script.is_none()
    }
}

fn capture_url(pattern: &Regex, output: &str) -> Option<Url> {
    pattern
        .captures(output)
        .and_then(|captures| captures.get(1))
        .and_then(|link| Url::parse(link.as_str()).ok())
}

/// Subset of `.clasp.json` this tool reads.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClaspProject {
    pub script_id: String,
    #[serde(default)]
    pub root_dir: Option<String>,
}

impl ClaspProject {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
