use include_dir::{Dir, File, include_dir};
use minijinja::{Environment, context};

use crate::domain::AppError;

static ASSETS: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

const TEMPLATE_ROOT: &str = "template";

/// A starter file ready to be written into a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterFile {
    /// Path relative to the project root.
    pub path: String,
    pub content: String,
}

/// Raw bytes of an embedded config asset.
pub fn asset_bytes(path: &str) -> Result<&'static [u8], AppError> {
    ASSETS.get_file(path).map(File::contents).ok_or_else(|| AppError::MissingAsset(path.into()))
}

/// UTF-8 text of an embedded config asset.
pub fn asset_text(path: &str) -> Result<&'static str, AppError> {
    ASSETS
        .get_file(path)
        .and_then(File::contents_utf8)
        .ok_or_else(|| AppError::MissingAsset(path.into()))
}

/// Starter sources rendered with the project title and package name.
pub fn starter_files(title: &str, name: &str) -> Result<Vec<StarterFile>, AppError> {
    let root =
        ASSETS.get_dir(TEMPLATE_ROOT).ok_or_else(|| AppError::MissingAsset(TEMPLATE_ROOT.into()))?;

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    let mut files = Vec::new();
    collect_files(root, &mut files);

    let mut rendered = Vec::with_capacity(files.len());
    for file in files {
        let asset_path = file.path().to_string_lossy().to_string();
        let source =
            file.contents_utf8().ok_or_else(|| AppError::MissingAsset(asset_path.clone()))?;
        let content = env
            .render_str(source, context! { title => title, name => name })
            .map_err(|err| AppError::Render {
                name: asset_path.clone(),
                details: err.to_string(),
            })?;
        let path = asset_path
            .strip_prefix(TEMPLATE_ROOT)
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(asset_path.as_str())
            .to_string();
        rendered.push(StarterFile { path, content });
    }

    rendered.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(rendered)
}

fn collect_files<'a>(dir: &'a Dir<'a>, out: &mut Vec<&'a File<'a>>) {
    out.extend(dir.files());
    for child in dir.dirs() {
        collect_files(child, out);
    }
}
