use std::path::{Component, Path, PathBuf};

use anyhow::Context as _;

use crate::{
    assets::source::is_allowed_image_name,
    composition::config::DEFAULT_OUTPUT_NAME,
    foundation::error::{ConcatError, ConcatResult},
};

/// Uploads are staged here, relative to the root.
pub const UPLOADS_DIR_NAME: &str = "uploads";
/// Default save folder, relative to the root.
pub const OUTPUTS_DIR_NAME: &str = "outputs";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Directories a caller works in. Injected into every entry point.
pub struct AppDirs {
    /// Absolute root; no client path may resolve outside it.
    pub root: PathBuf,
    /// Staging area for uploads.
    pub uploads: PathBuf,
    /// Default destination for saved results.
    pub outputs: PathBuf,
}

impl AppDirs {
    /// Describe the layout under `root` without touching the filesystem.
    pub fn new(root: &Path) -> ConcatResult<Self> {
        let root = std::path::absolute(root)
            .with_context(|| format!("resolve root '{}'", root.display()))?;
        let root = normalize_lexically(&root);
        Ok(Self {
            uploads: root.join(UPLOADS_DIR_NAME),
            outputs: root.join(OUTPUTS_DIR_NAME),
            root,
        })
    }

    /// Like [`AppDirs::new`], and create the uploads/outputs directories.
    pub fn prepare(root: &Path) -> ConcatResult<Self> {
        let dirs = Self::new(root)?;
        for dir in [&dirs.uploads, &dirs.outputs] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create directory '{}'", dir.display()))?;
        }
        Ok(dirs)
    }

    /// `path` relative to the root, with `/` separators.
    pub fn relative_to_root(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Resolve a client-supplied path against `root`, refusing anything that lands outside it.
///
/// Resolution is lexical (`.` and `..` are folded, symlinks are not followed).
/// An empty `relative` resolves to `root` itself.
pub fn resolve_within(root: &Path, relative: &str) -> ConcatResult<PathBuf> {
    let root = normalize_lexically(
        &std::path::absolute(root).with_context(|| format!("resolve root '{}'", root.display()))?,
    );
    let rel = Path::new(relative);
    let candidate = if rel.is_absolute() {
        normalize_lexically(rel)
    } else {
        normalize_lexically(&root.join(rel))
    };
    if !candidate.starts_with(&root) {
        return Err(ConcatError::path_outside_root(format!(
            "'{relative}' resolves outside the allowed root"
        )));
    }
    Ok(candidate)
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Sorted names of the allowed image files in `folder` (relative to `root`).
pub fn list_images(root: &Path, folder: &str) -> ConcatResult<Vec<String>> {
    let dir = resolve_within(root, folder)?;
    if !dir.is_dir() {
        return Err(ConcatError::validation("Folder does not exist"));
    }

    let mut names = Vec::new();
    for entry in
        std::fs::read_dir(&dir).with_context(|| format!("read directory '{}'", dir.display()))?
    {
        let entry = entry.with_context(|| format!("read directory '{}'", dir.display()))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_allowed_image_name(&name) && entry.path().is_file() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Reduce a client file name to a safe, flat ASCII name.
///
/// Non-ASCII characters are transliterated first (`ü` becomes `u`).
/// Separators and whitespace become `_`, other characters outside
/// `[A-Za-z0-9._-]` are dropped, and leading/trailing `.`/`_` are trimmed.
/// The result may be empty.
pub fn sanitize_file_name(name: &str) -> String {
    let flat: String = deunicode::deunicode(name)
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = flat.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Output name as the caller should use it: defaulted, `.png`-suffixed when
/// extension-less, then sanitized.
pub fn normalize_output_name(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return DEFAULT_OUTPUT_NAME.to_string();
    }
    let with_ext = if Path::new(trimmed).extension().is_some() {
        trimmed.to_string()
    } else {
        format!("{trimmed}.png")
    };
    let clean = sanitize_file_name(&with_ext);
    if clean.is_empty() {
        DEFAULT_OUTPUT_NAME.to_string()
    } else {
        clean
    }
}

#[cfg(test)]
#[path = "../../tests/unit/service/dirs.rs"]
mod tests;
